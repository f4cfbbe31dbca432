//! Dashboard section
//!
//! Headline counters, monthly growth, and the three most recent reports.
//! Counters are emitted at `0` with their target in `data-count`; counting
//! up is left to the display surface.

use crate::render::node::{el, icon, Element, Node};
use crate::store::{RecordStore, Report, StatsSnapshot};

/// How many reports the "Recent Reports" list shows
pub const RECENT_REPORTS: usize = 3;

pub fn render(store: &RecordStore) -> Node {
    let stats = store.get_stats();
    let reports = store.reports();

    el("div")
        .class("section")
        .attr("data-section", "dashboard")
        .child(el("h2").child(icon("fa-chart-line")).text(" Dashboard"))
        .child(counter_cards(&stats))
        .child(growth(&stats))
        .child(recent_reports(&reports))
        .into()
}

fn counter_cards(stats: &StatsSnapshot) -> Element {
    el("div")
        .class("dashboard-cards")
        .attr("data-animate", "counters")
        .child(counter_card("fa-user-injured", "Total Patients", stats.total_patients))
        .child(counter_card("fa-user-md", "Active Patients", stats.active_patients))
        .child(counter_card("fa-calendar-check", "Doctors", stats.total_doctors))
        .child(counter_card("fa-dollar-sign", "Revenue ($)", stats.total_revenue))
}

fn counter_card(icon_name: &str, label: &str, target: u64) -> Element {
    el("div")
        .class("card")
        .attr("data-count", target)
        .child(icon(icon_name))
        .child(
            el("div")
                .child(el("span").class("counter").text("0"))
                .child(el("p").text(label)),
        )
}

fn growth(stats: &StatsSnapshot) -> Element {
    el("div").class("dashboard-stats").child(
        el("div")
            .class("stat-item")
            .child(el("h3").text("Monthly Growth"))
            .child(
                el("div")
                    .class("growth-indicator")
                    .child(
                        el("span")
                            .class("growth-value")
                            .attr("data-value", stats.monthly_growth)
                            .text(format!("+{}%", stats.monthly_growth)),
                    )
                    .child(icon("fa-arrow-up")),
            ),
    )
}

fn recent_reports(reports: &[Report]) -> Element {
    el("div")
        .class("dashboard-quick")
        .child(el("h3").child(icon("fa-chart-bar")).text(" Recent Reports"))
        .child(el("ul").children(reports.iter().take(RECENT_REPORTS).map(|r| {
            el("li")
                .class("report-item")
                .attr("data-id", r.id)
                .child(icon("fa-file-medical-alt"))
                .child(
                    el("div")
                        .child(el("b").text(&r.title))
                        .child(el("p").text(&r.summary)),
                )
        })))
}
