//! Record store error types
//!
//! Defines all errors that can occur in the record store.

use thiserror::Error;

use crate::store::types::RecordId;

/// Errors that can occur in the record store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Requested collection does not exist
    #[error("Invalid argument: unknown collection '{0}'")]
    InvalidArgument(String),

    /// No record with the requested id
    #[error("Not found: no record with id {id} in {collection}")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },

    /// A required field was absent or blank
    #[error("Validation error: missing required field '{field}' for {collection}")]
    MissingField {
        collection: &'static str,
        field: &'static str,
    },

    /// A required field was present but could not be coerced to its type
    #[error("Validation error: invalid value '{value}' for field '{field}' ({reason})")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl StoreError {
    /// True for errors caused by a bad record-creation request
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField { .. } | StoreError::InvalidField { .. }
        )
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            StoreError::MissingField { field, .. } | StoreError::InvalidField { field, .. } => {
                Some(field)
            }
            StoreError::InvalidArgument(_) | StoreError::NotFound { .. } => None,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
