//! Page Routes
//!
//! Server-rendered HTML: the full page, content fragments, and the
//! add-record form submission.
//!
//! - GET /?section=&tab=&theme=&modal= - Full page
//! - GET /fragments/sections/:section - Section content
//! - GET /fragments/reports/:tab - Reports tab content
//! - GET /fragments/forms/:collection - Add form
//! - POST /forms/:collection - Append a record from form fields

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::api::dto::{PageQuery, TabQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::render::layout::section_href;
use crate::render::{self, document, forms, page, reports, PageOptions, ReportTab, Section, Theme};
use crate::store::{CollectionName, FieldMap};

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let section = Section::parse_or_default(query.section.as_deref().unwrap_or_default());
    let tab = ReportTab::parse_or_default(query.tab.as_deref());
    let modal = query
        .modal
        .as_deref()
        .and_then(|m| m.parse::<CollectionName>().ok())
        .map(forms::render);

    let options = PageOptions {
        active: section,
        theme: Theme::parse_or_default(query.theme.as_deref()),
        modal,
    };
    let content = render::render(&state.store, section, tab);

    Html(document(&page(content, &options)))
}

/// GET /fragments/sections/:section
pub async fn section_fragment(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
    Query(query): Query<TabQuery>,
) -> Html<String> {
    Html(render::render_section(&state.store, &section, query.tab.as_deref()).to_html())
}

/// GET /fragments/reports/:tab
pub async fn report_tab_fragment(
    State(state): State<Arc<AppState>>,
    Path(tab): Path<String>,
) -> Html<String> {
    let tab = ReportTab::parse_or_default(Some(&tab));
    Html(reports::render_tab(&state.store, tab).to_html())
}

/// GET /fragments/forms/:collection
pub async fn form_fragment(Path(collection): Path<String>) -> ApiResult<Html<String>> {
    let collection: CollectionName = collection.parse()?;
    Ok(Html(forms::render(collection).to_html()))
}

/// POST /forms/:collection
///
/// Appends the submitted record and redirects to the section listing it.
/// A rejected record re-renders that section with the form open, holding
/// the submitted values and the validation message.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    Form(fields): Form<FieldMap>,
) -> Response {
    let collection: CollectionName = match collection.parse() {
        Ok(c) => c,
        Err(e) => return ApiError::from(e).into_response(),
    };
    let section = Section::for_collection(collection);

    match state.store.append_to(collection, &fields) {
        Ok(_) => Redirect::to(&section_href(section)).into_response(),
        Err(e) if e.is_validation() => {
            tracing::warn!(collection = %collection, error = %e, "Rejected form submission");

            let message = e.to_string();
            let options = PageOptions {
                active: section,
                modal: Some(forms::render_with(collection, &fields, Some(&message))),
                ..Default::default()
            };
            let content = render::render(&state.store, section, ReportTab::default());

            (
                StatusCode::BAD_REQUEST,
                Html(document(&page(content, &options))),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
