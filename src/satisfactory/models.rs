//! Wire types for the Dedicated Server RPC API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// RPC request envelope.
///
/// The API multiplexes functions over a single endpoint; the function name
/// selects the operation and `data` carries its parameters.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub function: String,
    pub data: HashMap<String, String>,
}

impl RpcRequest {
    /// Build the `QueryServerState` request (no parameters).
    pub fn query_server_state() -> Self {
        Self {
            function: "QueryServerState".to_string(),
            data: HashMap::new(),
        }
    }
}

/// RPC response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    pub data: RpcResponseData,
}

/// Payload of a `QueryServerState` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResponseData {
    pub server_game_state: ServerGameState,
}

/// Point-in-time state of the Dedicated Server.
///
/// Decoded fresh on every scrape and discarded once translated into
/// metric samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerGameState {
    /// Name of the currently loaded session.
    pub active_session_name: String,
    /// Players currently connected.
    pub num_connected_players: u32,
    /// Maximum number of connected players.
    pub player_limit: u32,
    /// Highest tech tier unlocked across all schematics.
    pub tech_tier: u32,
    /// Whether a save is loaded (false while waiting for session creation).
    pub is_game_running: bool,
    /// Seconds the current save has been loaded. Does not advance while paused.
    pub total_game_duration: u64,
    /// Whether the game is paused.
    pub is_game_paused: bool,
    /// Average server tick rate, in ticks per second.
    pub average_tick_rate: f64,
    /// Session name configured for autoload.
    pub auto_load_session_name: String,
}
