//! Process resource collector.
//!
//! Reports the exporter's own resource usage next to the game metrics,
//! sampled from the OS on each scrape.

use async_trait::async_trait;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::{Error, Result};
use crate::metrics::collector::{Collector, MetricDescriptor, MetricKind, Sample};

pub const RESIDENT_MEMORY_BYTES: &str = "process_resident_memory_bytes";
pub const VIRTUAL_MEMORY_BYTES: &str = "process_virtual_memory_bytes";
pub const CPU_USAGE_PERCENT: &str = "process_cpu_usage_percent";
pub const START_TIME_SECONDS: &str = "process_start_time_seconds";

/// Collector for the exporter process itself.
pub struct ProcessCollector {
    descriptors: [MetricDescriptor; 4],
    pid: Pid,
    system: Mutex<System>,
}

impl ProcessCollector {
    /// Create the collector for the current process.
    pub fn new() -> Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| Error::Other(format!("Cannot resolve current pid: {e}")))?;

        let descriptors = [
            MetricDescriptor::new(
                RESIDENT_MEMORY_BYTES,
                "Resident memory size of the exporter process, in bytes",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                VIRTUAL_MEMORY_BYTES,
                "Virtual memory size of the exporter process, in bytes",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                CPU_USAGE_PERCENT,
                "CPU usage of the exporter process since the previous scrape, in percent",
                MetricKind::Gauge,
                &[],
            ),
            MetricDescriptor::new(
                START_TIME_SECONDS,
                "Start time of the exporter process, in seconds since the Unix epoch",
                MetricKind::Gauge,
                &[],
            ),
        ];

        Ok(Self {
            descriptors,
            pid,
            system: Mutex::new(System::new()),
        })
    }
}

#[async_trait]
impl Collector for ProcessCollector {
    fn describe(&self) -> &[MetricDescriptor] {
        &self.descriptors
    }

    async fn collect(&self) -> Vec<Sample> {
        let mut system = self.system.lock().await;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );

        let Some(process) = system.process(self.pid) else {
            warn!(pid = %self.pid, "Current process not visible; emitting no samples");
            return Vec::new();
        };

        vec![
            Sample::new(RESIDENT_MEMORY_BYTES, process.memory() as f64),
            Sample::new(VIRTUAL_MEMORY_BYTES, process.virtual_memory() as f64),
            Sample::new(CPU_USAGE_PERCENT, f64::from(process.cpu_usage())),
            Sample::new(START_TIME_SECONDS, process.start_time() as f64),
        ]
    }
}
