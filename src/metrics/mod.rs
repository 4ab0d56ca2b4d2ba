//! Metrics module.
//!
//! Provides the Collector abstraction, the Dedicated Server state
//! collector, a process resource collector, and the Prometheus text
//! exposition registry behind the `/metrics` endpoint.
//!
//! Collection is lazy: nothing is cached or polled in the background.
//! Every scrape invokes each registered collector, and the server state
//! collector performs one RPC call per invocation.

mod collector;
mod process;
mod prometheus;
mod server_state;

pub use collector::{Collector, MetricDescriptor, MetricKind, Sample};
pub use process::ProcessCollector;
pub use prometheus::Registry;
pub use server_state::ServerStateCollector;
