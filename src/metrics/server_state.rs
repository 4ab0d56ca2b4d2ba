//! Dedicated Server state collector.
//!
//! Translates one `QueryServerState` response into a fixed set of eight
//! samples. The fetch happens on every scrape; a failed fetch yields zero
//! samples for this collector and leaves other collectors untouched.

use async_trait::async_trait;
use tracing::warn;

use crate::metrics::collector::{Collector, MetricDescriptor, MetricKind, Sample};
use crate::satisfactory::StateFetcher;

pub const SESSION_NAME: &str = "satisfactory_dedicated_server_session_name";
pub const NUM_CONNECTED_PLAYERS: &str = "satisfactory_dedicated_server_num_connected_players";
pub const PLAYER_LIMIT: &str = "satisfactory_dedicated_server_player_limit";
pub const TECH_TIER: &str = "satisfactory_dedicated_server_tech_tier";
pub const IS_GAME_RUNNING: &str = "satisfactory_dedicated_server_is_game_running";
pub const TOTAL_GAME_DURATION: &str = "satisfactory_dedicated_server_total_game_duration";
pub const IS_GAME_PAUSED: &str = "satisfactory_dedicated_server_is_game_paused";
pub const AVERAGE_TICK_RATE: &str = "satisfactory_dedicated_server_average_tick_rate";

/// Collector for the Dedicated Server game state.
pub struct ServerStateCollector<F> {
    descriptors: [MetricDescriptor; 8],
    fetcher: F,
}

impl<F: StateFetcher> ServerStateCollector<F> {
    /// Create the collector with its eight fixed descriptors.
    ///
    /// `tech_tier` and `total_game_duration` are declared counters even
    /// though the remote values reset when a different save is loaded;
    /// the declared kind is kept for exposition compatibility.
    pub fn new(fetcher: F) -> Self {
        let descriptors = [
            MetricDescriptor::new(
                SESSION_NAME,
                "Name of the currently loaded game session",
                MetricKind::Gauge,
                &["active", "autoload"],
            ),
            MetricDescriptor::new(
                NUM_CONNECTED_PLAYERS,
                "Number of the players currently connected to the Dedicated Server",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                PLAYER_LIMIT,
                "Maximum number of players that can be connected to the Dedicated Server",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                TECH_TIER,
                "Maximum Tech Tier of all Schematics currently unlocked",
                MetricKind::Counter,
                &[],
            ),
            MetricDescriptor::new(
                IS_GAME_RUNNING,
                "1 if the save is currently loaded, 0 if the server is waiting for the session to be created",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                TOTAL_GAME_DURATION,
                "Total time the current save has been loaded, in seconds",
                MetricKind::Counter,
                &[],
            ),
            MetricDescriptor::new(
                IS_GAME_PAUSED,
                "1 if the game is paused. If the game is paused, total game duration does not increase",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                AVERAGE_TICK_RATE,
                "Average tick rate of the server, in ticks per second",
                MetricKind::Gauge,
                &[],
            ),
        ];

        Self {
            descriptors,
            fetcher,
        }
    }
}

fn bool_to_value(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

#[async_trait]
impl<F: StateFetcher> Collector for ServerStateCollector<F> {
    fn describe(&self) -> &[MetricDescriptor] {
        &self.descriptors
    }

    async fn collect(&self) -> Vec<Sample> {
        let state = match self.fetcher.fetch().await {
            Ok(state) => state,
            Err(error) => {
                warn!(error = %error, "Failed to query server state; emitting no samples");
                return Vec::new();
            }
        };

        vec![
            // Informational metric: the value is a constant 1 and the
            // payload lives in the labels.
            Sample::with_labels(
                SESSION_NAME,
                1.0,
                vec![state.active_session_name, state.auto_load_session_name],
            ),
            Sample::new(
                NUM_CONNECTED_PLAYERS,
                f64::from(state.num_connected_players),
            ),
            Sample::new(PLAYER_LIMIT, f64::from(state.player_limit)),
            Sample::new(TECH_TIER, f64::from(state.tech_tier)),
            Sample::new(IS_GAME_RUNNING, bool_to_value(state.is_game_running)),
            Sample::new(TOTAL_GAME_DURATION, state.total_game_duration as f64),
            Sample::new(IS_GAME_PAUSED, bool_to_value(state.is_game_paused)),
            Sample::new(AVERAGE_TICK_RATE, state.average_tick_rate),
        ]
    }
}
