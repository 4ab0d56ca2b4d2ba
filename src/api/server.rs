//! Exposition server setup.

use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::routes;
use crate::error::Result;
use crate::metrics::Registry;

/// Listen address of the exposition endpoint. Fixed; no CLI flags.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Shared application state.
///
/// Holds no mutable data: concurrent scrapes share the registry read-only
/// and each performs its own fetch.
#[derive(Clone)]
pub struct AppState {
    /// Metrics registry rendered by `/metrics`.
    pub registry: Arc<Registry>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            start_time: Instant::now(),
        }
    }
}

/// Bind the listener and serve until the process is killed.
///
/// A bind failure propagates out and is fatal to the process.
pub async fn serve(registry: Arc<Registry>) -> Result<()> {
    let app = routes::create_router(AppState::new(registry));

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!(address = %LISTEN_ADDR, "Serving metrics");

    axum::serve(listener, app).await?;

    Ok(())
}
