//! Medboard Record Store
//!
//! This module provides the in-memory hospital records:
//!
//! - **types**: Record structs, status enums, collection names
//! - **fields**: Coercion of submitted form fields into typed records
//! - **filter**: Status/search filtering and patient search
//! - **seed**: Sample data every store starts with
//! - **engine**: The store itself
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use medboard::store::{FieldMap, RecordStore};
//!
//! let store = RecordStore::seeded();
//!
//! let mut fields = FieldMap::new();
//! fields.insert("patient".into(), "Alice Smith".into());
//! fields.insert("amount".into(), "75".into());
//! fields.insert("status".into(), "Unpaid".into());
//! fields.insert("date".into(), "2024-06-10".into());
//!
//! let bill = store.append("bills", &fields).unwrap();
//! assert_eq!(store.get_collection("bills").unwrap().len(), 5);
//! assert!(bill.id() > 4);
//! ```

pub mod engine;
pub mod error;
pub mod fields;
pub mod filter;
pub mod seed;
pub mod types;

pub use engine::{IdGenerator, RecordStore};
pub use error::{StoreError, StoreResult};
pub use fields::{build_record, FieldMap};
pub use filter::{RecordFilter, PATIENT_SEARCH_LIMIT};
pub use types::{
    Appointment, AppointmentStatus, Bill, BillStatus, Collection, CollectionName, Doctor,
    Patient, PatientStatus, Record, RecordId, Report, ReportType, StatsSnapshot,
};
