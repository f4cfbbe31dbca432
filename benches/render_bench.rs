//! Benchmarks for Medboard section rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use medboard::render::{self, document, page, PageOptions, ReportTab, Section};
use medboard::store::{FieldMap, RecordStore};

fn grow_store(patients: usize) -> RecordStore {
    let store = RecordStore::seeded();
    for i in 0..patients {
        let mut fields = FieldMap::new();
        fields.insert("name".into(), format!("Patient {}", i));
        fields.insert("age".into(), (20 + i % 60).to_string());
        fields.insert("gender".into(), "Female".into());
        fields.insert("diagnosis".into(), "Observation".into());
        fields.insert("admitted".into(), "2024-06-10".into());
        fields.insert("status".into(), "Active".into());
        store.append("patients", &fields).unwrap();
    }
    store
}

fn bench_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("sections");
    let store = RecordStore::seeded();

    for section in Section::all() {
        group.bench_function(section.as_str(), |b| {
            b.iter(|| render::render(black_box(&store), *section, ReportTab::Monthly))
        });
    }

    group.finish();
}

fn bench_patient_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("patient_table");

    for size in [100, 1000, 10000] {
        let store = grow_store(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| render::render_section(black_box(&store), "patients", None))
        });

        let tree = render::render_section(&store, "patients", None);

        group.bench_function(format!("to_html_{}", size), |b| {
            b.iter(|| black_box(&tree).to_html())
        });
    }

    group.finish();
}

fn bench_full_page(c: &mut Criterion) {
    let store = RecordStore::seeded();

    c.bench_function("full_page_dashboard", |b| {
        b.iter(|| {
            let content = render::render(&store, Section::Dashboard, ReportTab::Monthly);
            document(&page(content, black_box(&PageOptions::default())))
        })
    });
}

criterion_group!(benches, bench_sections, bench_patient_table, bench_full_page);
criterion_main!(benches);
