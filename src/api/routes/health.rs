//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::store::CollectionName;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The store is in memory and seeded at startup, so the server is ready as
/// soon as it accepts connections.
pub async fn readiness(State(_state): State<Arc<AppState>>) -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with record counts.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let records = CollectionName::all()
        .iter()
        .map(|c| (c.to_string(), state.store.len(*c)))
        .collect();

    Json(HealthResponse {
        status: "healthy".to_string(),
        records,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
