//! Satisfactory Dedicated Server HTTPS API client.
//!
//! Speaks the server's JSON RPC surface (`/api/v1`); the exporter only
//! uses the `QueryServerState` function.

mod client;
mod models;

pub use client::{SatisfactoryClient, StateFetcher};
pub use models::{RpcRequest, RpcResponse, ServerGameState};
