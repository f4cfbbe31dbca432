//! Medboard Record Store
//!
//! Owns the five collections and the stats snapshot:
//! - Read path: `get_collection` / typed accessors clone the current records
//! - Lookup: `get_record` by id, `filter_collection`, `search_patients`
//! - Write path: fields → coerce → assign id and append (under the collection lock)
//!
//! Each collection sits behind its own `RwLock`, so appends to one collection
//! are serialized while readers of the others are never blocked.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::store::error::{StoreError, StoreResult};
use crate::store::fields::{build_record, FieldMap};
use crate::store::filter::{self, RecordFields, RecordFilter};
use crate::store::seed;
use crate::store::types::*;

/// Time-derived, strictly increasing identifier source
///
/// Ids are the current Unix time in milliseconds, bumped past the last
/// issued id when two appends land in the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> RecordId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

/// In-memory store of hospital records
#[derive(Debug)]
pub struct RecordStore {
    patients: RwLock<Vec<Patient>>,
    doctors: RwLock<Vec<Doctor>>,
    appointments: RwLock<Vec<Appointment>>,
    bills: RwLock<Vec<Bill>>,
    reports: RwLock<Vec<Report>>,
    stats: StatsSnapshot,
    ids: IdGenerator,
}

/// Clone a collection out from behind its lock.
///
/// Appends only ever push a fully built record, so a poisoned lock still
/// guards a consistent vector.
fn read<T: Clone>(lock: &RwLock<Vec<T>>) -> Vec<T> {
    lock.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Issue an id and append, both under the write guard, so collection
/// order and id order agree.
fn push<T: RecordFields + Clone>(lock: &RwLock<Vec<T>>, ids: &IdGenerator, mut record: T) -> T {
    let mut records = lock.write().unwrap_or_else(PoisonError::into_inner);
    record.set_record_id(ids.next_id());
    records.push(record.clone());
    record
}

fn find<T: RecordFields + Clone>(lock: &RwLock<Vec<T>>, id: RecordId) -> Option<T> {
    lock.read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|r| r.record_id() == id)
        .cloned()
}

fn count<T>(lock: &RwLock<Vec<T>>) -> usize {
    lock.read().unwrap_or_else(PoisonError::into_inner).len()
}

impl RecordStore {
    /// Create a store holding the given records
    pub fn new(
        patients: Vec<Patient>,
        doctors: Vec<Doctor>,
        appointments: Vec<Appointment>,
        bills: Vec<Bill>,
        reports: Vec<Report>,
        stats: StatsSnapshot,
    ) -> Self {
        Self {
            patients: RwLock::new(patients),
            doctors: RwLock::new(doctors),
            appointments: RwLock::new(appointments),
            bills: RwLock::new(bills),
            reports: RwLock::new(reports),
            stats,
            ids: IdGenerator::new(),
        }
    }

    /// Create a store loaded with the sample hospital data
    pub fn seeded() -> Self {
        let store = Self::new(
            seed::patients(),
            seed::doctors(),
            seed::appointments(),
            seed::bills(),
            seed::reports(),
            seed::stats(),
        );

        tracing::debug!(
            patients = store.len(CollectionName::Patients),
            doctors = store.len(CollectionName::Doctors),
            appointments = store.len(CollectionName::Appointments),
            bills = store.len(CollectionName::Bills),
            reports = store.len(CollectionName::Reports),
            "Seeded record store"
        );

        store
    }

    /// Get the ordered records of a collection by name
    ///
    /// Fails with `InvalidArgument` for anything outside the five collections.
    pub fn get_collection(&self, name: &str) -> StoreResult<Collection> {
        let name: CollectionName = name.parse()?;
        Ok(self.collection(name))
    }

    /// Get the ordered records of a collection
    pub fn collection(&self, name: CollectionName) -> Collection {
        match name {
            CollectionName::Patients => Collection::Patients(self.patients()),
            CollectionName::Doctors => Collection::Doctors(self.doctors()),
            CollectionName::Appointments => Collection::Appointments(self.appointments()),
            CollectionName::Bills => Collection::Bills(self.bills()),
            CollectionName::Reports => Collection::Reports(self.reports()),
        }
    }

    /// Get the records of a collection that match `filter`, in order
    ///
    /// Doctors carry no status, so a status criterion on them is rejected.
    pub fn filter_collection(&self, name: &str, filter: &RecordFilter) -> StoreResult<Collection> {
        let collection = self.get_collection(name)?;
        if filter.is_empty() {
            return Ok(collection);
        }

        if let (Collection::Doctors(_), Some(status)) = (&collection, filter.status()) {
            return Err(StoreError::InvalidField {
                field: "status",
                value: status.to_string(),
                reason: "doctors have no status".to_string(),
            });
        }

        Ok(filter.apply(collection))
    }

    /// Look up one record by collection name and id
    pub fn get_record(&self, name: &str, id: RecordId) -> StoreResult<Record> {
        let name: CollectionName = name.parse()?;
        self.record(name, id).ok_or(StoreError::NotFound {
            collection: name.as_str(),
            id,
        })
    }

    /// Typed variant of [`RecordStore::get_record`]
    pub fn record(&self, name: CollectionName, id: RecordId) -> Option<Record> {
        match name {
            CollectionName::Patients => find(&self.patients, id).map(Record::Patient),
            CollectionName::Doctors => find(&self.doctors, id).map(Record::Doctor),
            CollectionName::Appointments => find(&self.appointments, id).map(Record::Appointment),
            CollectionName::Bills => find(&self.bills, id).map(Record::Bill),
            CollectionName::Reports => find(&self.reports, id).map(Record::Report),
        }
    }

    /// Patients whose name contains `query`, ignoring case, at most
    /// [`filter::PATIENT_SEARCH_LIMIT`] of them
    pub fn search_patients(&self, query: &str) -> Vec<Patient> {
        filter::search_patients(self.patients(), query)
    }

    /// Create a record from submitted form fields and append it
    ///
    /// Validation happens before any lock is taken; a rejected request
    /// leaves the store untouched.
    pub fn append(&self, name: &str, fields: &FieldMap) -> StoreResult<Record> {
        let name: CollectionName = name.parse()?;
        self.append_to(name, fields)
    }

    /// Typed variant of [`RecordStore::append`]
    pub fn append_to(&self, name: CollectionName, fields: &FieldMap) -> StoreResult<Record> {
        let record = match build_record(name, fields)? {
            Record::Patient(r) => Record::Patient(push(&self.patients, &self.ids, r)),
            Record::Doctor(r) => Record::Doctor(push(&self.doctors, &self.ids, r)),
            Record::Appointment(r) => Record::Appointment(push(&self.appointments, &self.ids, r)),
            Record::Bill(r) => Record::Bill(push(&self.bills, &self.ids, r)),
            Record::Report(r) => Record::Report(push(&self.reports, &self.ids, r)),
        };

        tracing::info!(collection = %name, id = record.id(), "Appended record");
        Ok(record)
    }

    /// The stats snapshot fixed at creation
    pub fn get_stats(&self) -> StatsSnapshot {
        self.stats
    }

    /// Number of records in a collection
    pub fn len(&self, name: CollectionName) -> usize {
        match name {
            CollectionName::Patients => count(&self.patients),
            CollectionName::Doctors => count(&self.doctors),
            CollectionName::Appointments => count(&self.appointments),
            CollectionName::Bills => count(&self.bills),
            CollectionName::Reports => count(&self.reports),
        }
    }

    pub fn patients(&self) -> Vec<Patient> {
        read(&self.patients)
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        read(&self.doctors)
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        read(&self.appointments)
    }

    pub fn bills(&self) -> Vec<Bill> {
        read(&self.bills)
    }

    pub fn reports(&self) -> Vec<Report> {
        read(&self.reports)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn patient_fields() -> FieldMap {
        fields(&[
            ("name", "Grace Hopper"),
            ("age", "85"),
            ("gender", "Female"),
            ("diagnosis", "Fracture"),
            ("admitted", "2024-06-08"),
            ("status", "Active"),
        ])
    }

    #[test]
    fn test_get_collection_valid_names() {
        let store = RecordStore::seeded();
        for name in CollectionName::all() {
            let collection = store.get_collection(name.as_str()).unwrap();
            assert_eq!(collection.name(), *name);
            assert!(!collection.is_empty());
        }
    }

    #[test]
    fn test_get_collection_invalid_name() {
        let store = RecordStore::seeded();
        let err = store.get_collection("wards").unwrap_err();
        assert_eq!(err, StoreError::InvalidArgument("wards".to_string()));
    }

    #[test]
    fn test_append_patient() {
        let store = RecordStore::seeded();
        let before = store.len(CollectionName::Patients);

        let record = store.append("patients", &patient_fields()).unwrap();

        assert_eq!(store.len(CollectionName::Patients), before + 1);
        let Record::Patient(created) = &record else {
            panic!("expected a patient");
        };
        assert_eq!(created.name, "Grace Hopper");
        assert_eq!(created.age, 85);
        assert_eq!(created.gender, "Female");
        assert_eq!(created.diagnosis, "Fracture");
        assert_eq!(created.status, PatientStatus::Active);

        let last = store.patients().pop().unwrap();
        assert_eq!(&last, created);
        assert!(!seed::patients().iter().any(|p| p.id == created.id));
    }

    #[test]
    fn test_identical_appends_get_distinct_ids() {
        let store = RecordStore::seeded();
        let first = store.append("patients", &patient_fields()).unwrap();
        let second = store.append("patients", &patient_fields()).unwrap();
        assert_ne!(first.id(), second.id());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_append_missing_field_leaves_store_unchanged() {
        let store = RecordStore::seeded();
        let before = store.bills();

        let err = store
            .append(
                "bills",
                &fields(&[("patient", "Alice Smith"), ("status", "Paid"), ("date", "2024-06-09")]),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(store.bills(), before);
    }

    #[test]
    fn test_append_unknown_collection() {
        let store = RecordStore::seeded();
        let err = store.append("rooms", &FieldMap::new()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    #[test]
    fn test_stats_not_derived_from_collections() {
        let store = RecordStore::seeded();
        store.append("patients", &patient_fields()).unwrap();
        let stats = store.get_stats();
        assert_eq!(stats.total_patients, 156);
        assert_eq!(stats.active_patients, 89);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = RecordStore::seeded();
        let created = store
            .append(
                "reports",
                &fields(&[
                    ("title", "Bed Occupancy"),
                    ("date", "2024-05-01"),
                    ("summary", "82% average occupancy."),
                    ("type", "monthly"),
                ]),
            )
            .unwrap();

        let ids = store.collection(CollectionName::Reports).ids();
        assert_eq!(ids, vec![1, 2, 3, 4, created.id()]);
    }

    #[test]
    fn test_id_generator_strictly_increasing() {
        let ids = IdGenerator::new();
        let mut last = 0;
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_concurrent_appends() {
        let store = Arc::new(RecordStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|_| store.append("patients", &patient_fields()).unwrap().id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {}", id);
            }
        }

        assert_eq!(store.len(CollectionName::Patients), 5 + 200);

        let appended = &store.collection(CollectionName::Patients).ids()[5..];
        assert!(
            appended.windows(2).all(|pair| pair[0] < pair[1]),
            "collection order disagrees with id order"
        );
    }

    #[test]
    fn test_get_record() {
        let store = RecordStore::seeded();
        let Record::Doctor(doctor) = store.get_record("doctors", 2).unwrap() else {
            panic!("expected a doctor");
        };
        assert_eq!(doctor.name, "Dr. Jane Smith");

        let created = store.append("patients", &patient_fields()).unwrap();
        assert_eq!(store.get_record("patients", created.id()).unwrap(), created);
    }

    #[test]
    fn test_get_record_unknown_id() {
        let store = RecordStore::seeded();
        let err = store.get_record("bills", 99).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                collection: "bills",
                id: 99
            }
        );
        assert!(matches!(
            store.get_record("wards", 1),
            Err(StoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter_collection() {
        let store = RecordStore::seeded();
        let unpaid = RecordFilter {
            status: Some("unpaid".to_string()),
            search: None,
        };
        assert_eq!(store.filter_collection("bills", &unpaid).unwrap().ids(), vec![2, 4]);

        let everything = store.filter_collection("bills", &RecordFilter::default()).unwrap();
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn test_filter_doctors_by_status_rejected() {
        let store = RecordStore::seeded();
        let filter = RecordFilter {
            status: Some("active".to_string()),
            search: None,
        };
        let err = store.filter_collection("doctors", &filter).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("status"));
    }

    #[test]
    fn test_search_patients_sees_appended_records() {
        let store = RecordStore::seeded();
        assert!(store.search_patients("grace").is_empty());

        store.append("patients", &patient_fields()).unwrap();
        let found = store.search_patients("GRACE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Grace Hopper");

        assert_eq!(store.search_patients("o").len(), 4);
    }
}
