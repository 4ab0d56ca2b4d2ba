//! Route modules for the exposition server.

pub mod health;
pub mod metrics;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api::server::AppState;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics::exposition))
        .nest("/health", health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
