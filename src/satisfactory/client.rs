//! Dedicated Server API client.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ExporterConfig;
use crate::error::Result;
use crate::satisfactory::models::{RpcRequest, RpcResponse, ServerGameState};
use crate::utils::http_client::build_exporter_client;

/// Fixed path of the Dedicated Server HTTPS API.
const API_PATH: &str = "/api/v1";

/// Queries the current server state.
///
/// One RPC call per invocation; callers decide the cadence. The exporter's
/// collector invokes this on every scrape.
#[async_trait]
pub trait StateFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ServerGameState>;
}

/// HTTPS client for the Dedicated Server RPC API.
pub struct SatisfactoryClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl SatisfactoryClient {
    /// Create a new client from the exporter config.
    ///
    /// The underlying HTTP client is built once and reused across scrapes.
    /// No request timeout is set; bounding scrape latency is left to the
    /// scraping system.
    pub fn new(config: &ExporterConfig) -> Result<Self> {
        Ok(Self {
            client: build_exporter_client(config.insecure)?,
            endpoint: format!("https://{}:{}{}", config.host, config.port, API_PATH),
            token: config.token.clone(),
        })
    }

    /// Full URL of the RPC endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StateFetcher for SatisfactoryClient {
    async fn fetch(&self) -> Result<ServerGameState> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&RpcRequest::query_server_state())
            .send()
            .await?;

        // The status code is not inspected: any response without a decodable
        // body is the same failure as an unreachable server.
        let body = response.bytes().await?;
        let decoded: RpcResponse = serde_json::from_slice(&body)?;

        Ok(decoded.data.server_game_state)
    }
}
