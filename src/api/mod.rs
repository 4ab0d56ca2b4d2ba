//! HTTP exposition server.
//!
//! Serves the scrape endpoint (`/metrics`) and a liveness check.

pub mod routes;
pub mod server;

pub use server::{AppState, serve};
