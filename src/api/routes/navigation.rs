//! Navigation Routes
//!
//! - POST /api/v1/navigate - Schedule a section render
//! - GET /api/v1/view - Current content panel

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{NavigateRequest, NavigateResponse};
use crate::api::state::AppState;
use crate::navigation::View;
use crate::render::{ReportTab, Section};

/// POST /api/v1/navigate
///
/// Returns as soon as the render is scheduled; poll `/api/v1/view` for the
/// result. A newer navigation cancels this one's render.
pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NavigateRequest>,
) -> Json<NavigateResponse> {
    let generation = state.navigation.navigate(&req.section, req.tab.as_deref()).await;

    Json(NavigateResponse {
        generation,
        section: Section::parse_or_default(&req.section).to_string(),
        tab: ReportTab::parse_or_default(req.tab.as_deref()).as_str().to_string(),
        render_delay_ms: state.navigation.config().render_delay().as_millis() as u64,
    })
}

/// GET /api/v1/view
pub async fn current_view(State(state): State<Arc<AppState>>) -> Json<View> {
    Json(state.navigation.current().await)
}
