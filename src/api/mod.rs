//! Medboard HTTP API
//!
//! HTML pages and the JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Full page (`?section=&tab=&theme=&modal=`)
//! - `GET /fragments/sections/:section` - Section content
//! - `GET /fragments/reports/:tab` - Reports tab content
//! - `GET /fragments/forms/:collection` - Add form
//! - `POST /forms/:collection` - Submit an add form
//!
//! ## Records
//! - `GET /api/v1/collections/:name` - List a collection (`?status=&search=`)
//! - `POST /api/v1/collections/:name` - Append a record
//! - `GET /api/v1/collections/:name/:id` - One record
//! - `GET /api/v1/patients/search` - Patients by name (`?q=`), at most 10
//! - `GET /api/v1/stats` - Stats snapshot
//!
//! ## Rendering
//! - `GET /api/v1/sections/:section` - Section node tree
//! - `POST /api/v1/navigate` - Schedule a navigation
//! - `GET /api/v1/view` - Current content panel
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use medboard::api::{serve, AppState};
//! use medboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(AppState::seeded(), &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Record routes
        .route(
            "/collections/:name",
            get(routes::collections::get_collection).post(routes::collections::append_record),
        )
        .route("/collections/:name/:id", get(routes::collections::get_record))
        .route("/patients/search", get(routes::collections::search_patients))
        .route("/stats", get(routes::collections::get_stats))
        // Rendering routes
        .route("/sections/:section", get(routes::sections::get_section))
        .route("/navigate", post(routes::navigation::navigate))
        .route("/view", get(routes::navigation::current_view));

    let page_routes = Router::new()
        .route("/", get(routes::pages::index))
        .route(
            "/fragments/sections/:section",
            get(routes::pages::section_fragment),
        )
        .route("/fragments/reports/:tab", get(routes::pages::report_tab_fragment))
        .route("/fragments/forms/:collection", get(routes::pages::form_fragment))
        .route("/forms/:collection", post(routes::pages::submit_form));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Medboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Medboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
