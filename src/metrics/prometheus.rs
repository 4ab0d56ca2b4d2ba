//! Prometheus metrics registry.
//!
//! Holds the registered collectors and renders their samples in the
//! Prometheus text exposition format on each scrape.

use std::fmt::Write;

use crate::metrics::collector::{Collector, MetricDescriptor, Sample};

/// Registry of collectors, invoked uniformly per scrape.
///
/// Immutable once the exporter is wired up; concurrent scrapes share it
/// read-only.
pub struct Registry {
    collectors: Vec<Box<dyn Collector>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            collectors: Vec::new(),
        }
    }

    /// Register a collector.
    pub fn register(&mut self, collector: Box<dyn Collector>) {
        self.collectors.push(collector);
    }

    /// Invoke every collector and render the combined exposition text.
    ///
    /// Collectors run independently: one producing zero samples (e.g. the
    /// remote server is unreachable) does not affect the others' output.
    pub async fn gather(&self) -> String {
        let mut output = String::new();

        for collector in &self.collectors {
            let samples = collector.collect().await;
            encode(&mut output, collector.describe(), &samples);
        }

        output
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one collector's samples.
///
/// `# HELP` / `# TYPE` headers are only emitted for metrics that produced
/// at least one sample this scrape.
fn encode(output: &mut String, descriptors: &[MetricDescriptor], samples: &[Sample]) {
    for descriptor in descriptors {
        let matching = samples.iter().filter(|s| s.name == descriptor.name);
        let mut header_written = false;

        for sample in matching {
            if !header_written {
                let _ = writeln!(output, "# HELP {} {}", descriptor.name, descriptor.help);
                let _ = writeln!(
                    output,
                    "# TYPE {} {}",
                    descriptor.name,
                    descriptor.kind.as_str()
                );
                header_written = true;
            }

            if descriptor.labels.is_empty() {
                let _ = writeln!(output, "{} {}", descriptor.name, sample.value);
            } else {
                let labels = descriptor
                    .labels
                    .iter()
                    .zip(&sample.label_values)
                    .map(|(name, value)| format!("{}=\"{}\"", name, escape_label_value(value)))
                    .collect::<Vec<_>>()
                    .join(",");
                let _ = writeln!(output, "{}{{{}}} {}", descriptor.name, labels, sample.value);
            }
        }
    }
}

/// Escape a label value per the text exposition format.
fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::collector::MetricKind;
    use async_trait::async_trait;

    struct StaticCollector {
        descriptors: Vec<MetricDescriptor>,
        samples: Vec<Sample>,
    }

    #[async_trait]
    impl Collector for StaticCollector {
        fn describe(&self) -> &[MetricDescriptor] {
            &self.descriptors
        }

        async fn collect(&self) -> Vec<Sample> {
            self.samples.clone()
        }
    }

    fn gauge(name: &'static str) -> MetricDescriptor {
        MetricDescriptor::new(name, "help text", MetricKind::Gauge, &[])
    }

    #[tokio::test]
    async fn test_gather_renders_help_type_and_value() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![gauge("players_online")],
            samples: vec![Sample::new("players_online", 3.0)],
        }));

        let output = registry.gather().await;

        assert!(output.contains("# HELP players_online help text\n"));
        assert!(output.contains("# TYPE players_online gauge\n"));
        assert!(output.contains("players_online 3\n"));
    }

    #[tokio::test]
    async fn test_counter_type_keyword() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![MetricDescriptor::new(
                "ticks_total",
                "total ticks",
                MetricKind::Counter,
                &[],
            )],
            samples: vec![Sample::new("ticks_total", 120.0)],
        }));

        let output = registry.gather().await;

        assert!(output.contains("# TYPE ticks_total counter\n"));
        assert!(output.contains("ticks_total 120\n"));
    }

    #[tokio::test]
    async fn test_labeled_sample_rendering() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![MetricDescriptor::new(
                "session_name",
                "session",
                MetricKind::Gauge,
                &["active", "autoload"],
            )],
            samples: vec![Sample::with_labels(
                "session_name",
                1.0,
                vec!["Alpha".to_string(), "Beta".to_string()],
            )],
        }));

        let output = registry.gather().await;

        assert!(output.contains("session_name{active=\"Alpha\",autoload=\"Beta\"} 1\n"));
    }

    #[tokio::test]
    async fn test_empty_label_values_render_as_empty_strings() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![MetricDescriptor::new(
                "session_name",
                "session",
                MetricKind::Gauge,
                &["active", "autoload"],
            )],
            samples: vec![Sample::with_labels(
                "session_name",
                1.0,
                vec![String::new(), String::new()],
            )],
        }));

        let output = registry.gather().await;

        assert!(output.contains("session_name{active=\"\",autoload=\"\"} 1\n"));
    }

    #[tokio::test]
    async fn test_collector_with_no_samples_emits_nothing() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![gauge("players_online")],
            samples: vec![],
        }));

        assert_eq!(registry.gather().await, "");
    }

    #[tokio::test]
    async fn test_collectors_are_independent() {
        let mut registry = Registry::new();
        registry.register(Box::new(StaticCollector {
            descriptors: vec![gauge("unreachable_remote")],
            samples: vec![],
        }));
        registry.register(Box::new(StaticCollector {
            descriptors: vec![gauge("local_metric")],
            samples: vec![Sample::new("local_metric", 1.0)],
        }));

        let output = registry.gather().await;

        assert!(!output.contains("unreachable_remote"));
        assert!(output.contains("local_metric 1\n"));
    }

    #[test]
    fn test_label_value_escaping() {
        assert_eq!(escape_label_value(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_label_value(r"a\b"), r"a\\b");
        assert_eq!(escape_label_value("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_label_value("plain"), "plain");
    }

    #[test]
    fn test_float_values_keep_precision() {
        let mut output = String::new();
        encode(
            &mut output,
            &[gauge("tick_rate")],
            &[Sample::new("tick_rate", 29.97)],
        );

        assert!(output.contains("tick_rate 29.97\n"));
    }
}
