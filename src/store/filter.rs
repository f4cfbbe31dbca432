//! List filtering and patient search
//!
//! A [`RecordFilter`] narrows a collection by status and by a free-text
//! term. Both matches are case-insensitive; an absent or blank criterion
//! matches everything.

use crate::store::types::*;

/// Most results a patient search returns
pub const PATIENT_SEARCH_LIMIT: usize = 10;

/// Fields of a record that filtering looks at
pub trait RecordFields {
    fn record_id(&self) -> RecordId;

    fn set_record_id(&mut self, id: RecordId);

    /// Status label, for collections that carry one
    fn status_label(&self) -> Option<&'static str>;

    /// Free-text fields a search term is matched against
    fn search_fields(&self) -> Vec<&str>;
}

macro_rules! record_fields {
    ($ty:ty, |$r:ident| status: $status:expr, search: [$($field:ident),+]) => {
        impl RecordFields for $ty {
            fn record_id(&self) -> RecordId {
                self.id
            }

            fn set_record_id(&mut self, id: RecordId) {
                self.id = id;
            }

            fn status_label(&self) -> Option<&'static str> {
                let $r = self;
                $status
            }

            fn search_fields(&self) -> Vec<&str> {
                vec![$(self.$field.as_str()),+]
            }
        }
    };
}

record_fields!(Patient, |r| status: Some(r.status.label()), search: [name, diagnosis]);
record_fields!(Doctor, |_r| status: None, search: [name, specialty]);
record_fields!(Appointment, |r| status: Some(r.status.label()), search: [patient, doctor]);
record_fields!(Bill, |r| status: Some(r.status.label()), search: [patient]);
record_fields!(Report, |r| status: Some(r.report_type.as_str()), search: [title, summary]);

/// Status and free-text criteria for listing a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Status label (report type for reports)
    pub status: Option<String>,
    /// Case-insensitive substring of the collection's text fields
    pub search: Option<String>,
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RecordFilter {
    pub fn status(&self) -> Option<&str> {
        criterion(&self.status)
    }

    pub fn search(&self) -> Option<&str> {
        criterion(&self.search)
    }

    pub fn is_empty(&self) -> bool {
        self.status().is_none() && self.search().is_none()
    }

    pub fn matches<T: RecordFields>(&self, record: &T) -> bool {
        let status_ok = match self.status() {
            Some(wanted) => record
                .status_label()
                .map(|label| label.eq_ignore_ascii_case(wanted))
                .unwrap_or(false),
            None => true,
        };

        let search_ok = match self.search() {
            Some(term) => {
                let term = term.to_lowercase();
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
            None => true,
        };

        status_ok && search_ok
    }

    /// Keep the records of `collection` that match, in order
    pub fn apply(&self, collection: Collection) -> Collection {
        fn keep<T: RecordFields>(filter: &RecordFilter, records: Vec<T>) -> Vec<T> {
            records.into_iter().filter(|r| filter.matches(r)).collect()
        }

        match collection {
            Collection::Patients(v) => Collection::Patients(keep(self, v)),
            Collection::Doctors(v) => Collection::Doctors(keep(self, v)),
            Collection::Appointments(v) => Collection::Appointments(keep(self, v)),
            Collection::Bills(v) => Collection::Bills(keep(self, v)),
            Collection::Reports(v) => Collection::Reports(keep(self, v)),
        }
    }
}

/// Patients whose name contains `query`, ignoring case, capped at
/// [`PATIENT_SEARCH_LIMIT`]. An empty query matches every patient.
pub fn search_patients(patients: Vec<Patient>, query: &str) -> Vec<Patient> {
    let query = query.trim().to_lowercase();
    patients
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .take(PATIENT_SEARCH_LIMIT)
        .collect()
}
