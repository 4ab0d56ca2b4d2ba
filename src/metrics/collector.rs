//! Collector abstraction.
//!
//! A [`Collector`] declares a fixed set of metrics up front and produces
//! current samples on each scrape. Multiple collectors register into a
//! [`Registry`](super::Registry) and are invoked uniformly.

use async_trait::async_trait;

/// Declared value kind of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Exposition format `# TYPE` keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// Description of a single metric: name, help text, kind, and the ordered
/// label names its samples carry. Immutable after construction.
#[derive(Debug, Clone)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub labels: &'static [&'static str],
}

impl MetricDescriptor {
    pub const fn new(
        name: &'static str,
        help: &'static str,
        kind: MetricKind,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            kind,
            labels,
        }
    }
}

/// One observed value for a metric.
///
/// `label_values` is ordered parallel to the descriptor's label names and
/// holds the raw, unescaped strings; escaping happens at encoding time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub value: f64,
    pub label_values: Vec<String>,
}

impl Sample {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            label_values: Vec::new(),
        }
    }

    pub fn with_labels(name: &'static str, value: f64, label_values: Vec<String>) -> Self {
        Self {
            name,
            value,
            label_values,
        }
    }
}

/// The scrape-time capability shared by all collectors.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Declared metrics. Stable across the process lifetime.
    fn describe(&self) -> &[MetricDescriptor];

    /// Produce current samples. A collector that cannot observe its
    /// subject this scrape returns an empty vec rather than an error.
    async fn collect(&self) -> Vec<Sample>;
}
