//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::error::{ApiError, ApiResult};
use crate::store::{Collection, CollectionName, FieldMap, Patient, RecordFilter};

// ============================================
// PAGE DTOs
// ============================================

/// Query string of the full page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Section id; unknown ids render the dashboard
    #[serde(default)]
    pub section: Option<String>,
    /// Reports tab id
    #[serde(default)]
    pub tab: Option<String>,
    /// "light" or "dark"
    #[serde(default)]
    pub theme: Option<String>,
    /// Collection whose add form is open in the modal
    #[serde(default)]
    pub modal: Option<String>,
}

/// Query string of section endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

// ============================================
// COLLECTION DTOs
// ============================================

/// Query string of the collection listing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Status label; report type for reports
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive text match
    #[serde(default)]
    pub search: Option<String>,
}

impl From<ListQuery> for RecordFilter {
    fn from(query: ListQuery) -> Self {
        Self {
            status: query.status,
            search: query.search,
        }
    }
}

/// Query string of the patient search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Patient search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Patient>,
}

/// Records of one collection
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub collection: CollectionName,
    pub total: usize,
    pub records: Collection,
}

impl From<Collection> for CollectionResponse {
    fn from(records: Collection) -> Self {
        Self {
            collection: records.name(),
            total: records.len(),
            records,
        }
    }
}

/// JSON append body: field name to value
///
/// Values may be JSON strings, numbers, or booleans; they are converted to
/// their text form before coercion, as if submitted from a form. `null`
/// counts as an absent field.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AppendRequest(pub HashMap<String, serde_json::Value>);

impl AppendRequest {
    pub fn into_fields(self) -> ApiResult<FieldMap> {
        let mut fields = FieldMap::new();
        for (key, value) in self.0 {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => continue,
                _ => {
                    return Err(ApiError::Validation(format!(
                        "field '{}' must be a string, number, or boolean",
                        key
                    )))
                }
            };
            fields.insert(key, text);
        }
        Ok(fields)
    }
}

// ============================================
// NAVIGATION DTOs
// ============================================

/// Navigation request
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub section: String,
    #[serde(default)]
    pub tab: Option<String>,
}

/// Navigation response
#[derive(Debug, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub generation: u64,
    pub section: String,
    pub tab: String,
    /// Milliseconds until the render lands
    pub render_delay_ms: u64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Record count per collection
    pub records: HashMap<String, usize>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
