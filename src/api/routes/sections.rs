//! Section Routes
//!
//! - GET /api/v1/sections/:section - Rendered section as a JSON node tree

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::TabQuery;
use crate::api::state::AppState;
use crate::render::{self, Node};

/// GET /api/v1/sections/:section
///
/// Unknown section ids return the dashboard tree.
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
    Query(query): Query<TabQuery>,
) -> Json<Node> {
    Json(render::render_section(&state.store, &section, query.tab.as_deref()))
}
