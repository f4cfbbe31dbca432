//! Collection Routes
//!
//! JSON access to the record store.
//!
//! - GET /api/v1/collections/:name - Records of a collection, in insertion order
//! - POST /api/v1/collections/:name - Append a record
//! - GET /api/v1/collections/:name/:id - One record
//! - GET /api/v1/patients/search - Patients by name
//! - GET /api/v1/stats - Dashboard stats snapshot

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AppendRequest, CollectionResponse, ListQuery, SearchQuery, SearchResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::{Record, RecordId, StatsSnapshot};

/// GET /api/v1/collections/:name
///
/// Optional `?status=` and `?search=` narrow the listing.
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<CollectionResponse>> {
    let records = state.store.filter_collection(&name, &query.into())?;
    Ok(Json(records.into()))
}

/// GET /api/v1/collections/:name/:id
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((name, id)): Path<(String, RecordId)>,
) -> ApiResult<Json<Record>> {
    Ok(Json(state.store.get_record(&name, id)?))
}

/// GET /api/v1/patients/search?q=
pub async fn search_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = state.store.search_patients(&query.q);
    tracing::debug!(query = %query.q, found = results.len(), "Patient search");
    Json(SearchResponse {
        query: query.q,
        results,
    })
}

/// POST /api/v1/collections/:name
///
/// Body is a flat object of field values. Missing or uncoercible required
/// fields are rejected with 400 and the collection is left unchanged.
pub async fn append_record(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<AppendRequest>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let record = state.store.append(&name, &req.into_fields()?)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsSnapshot> {
    Json(state.store.get_stats())
}
