//! Medboard Section Renderer
//!
//! Turns the record store into display trees, one section at a time:
//!
//! - **node**: The display tree and its HTML serializer
//! - **section**: Section and report-tab identifiers
//! - **dashboard**, **tables**, **reports**, **settings**: One renderer per section
//! - **forms**: Add-record modal forms
//! - **layout**: Page chrome around the content panel
//!
//! Rendering is a pure function of the store and the requested section; it
//! reads the store at call time and keeps no state of its own.
//!
//! # Example
//!
//! ```rust
//! use medboard::render::render_section;
//! use medboard::store::RecordStore;
//!
//! let store = RecordStore::seeded();
//! let tree = render_section(&store, "reports", Some("revenue"));
//! assert_eq!(tree.find_by_class("report-card").len(), 2);
//!
//! // Unknown sections fall back to the dashboard
//! assert_eq!(render_section(&store, "foo", None), render_section(&store, "dashboard", None));
//! ```

pub mod dashboard;
pub mod forms;
pub mod layout;
pub mod node;
pub mod reports;
pub mod section;
pub mod settings;
pub mod tables;

pub use layout::{document, page, PageOptions, Theme};
pub use node::{el, Element, Node};
pub use section::{ReportTab, Section};

use crate::store::RecordStore;

/// Render a section by id
///
/// Unknown section ids render the dashboard. `tab` only matters for the
/// reports section; unknown or absent tabs select the monthly tab.
pub fn render_section(store: &RecordStore, section_id: &str, tab: Option<&str>) -> Node {
    render(
        store,
        Section::parse_or_default(section_id),
        ReportTab::parse_or_default(tab),
    )
}

/// Render a section
pub fn render(store: &RecordStore, section: Section, tab: ReportTab) -> Node {
    match section {
        Section::Dashboard => dashboard::render(store),
        Section::Patients => tables::render_patients(store),
        Section::Appointments => tables::render_appointments(store),
        Section::Doctors => tables::render_doctors(store),
        Section::Billing => tables::render_billing(store),
        Section::Reports => reports::render(store, tab),
        Section::Settings => settings::render(),
    }
}
