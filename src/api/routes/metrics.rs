//! Scrape endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::api::server::AppState;

/// Content type of the text exposition format.
const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Render the registry. Every scrape collects fresh samples; a collector
/// whose source is unreachable simply contributes none.
pub async fn exposition(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.registry.gather().await;

    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body)
}
