//! Exporter configuration.
//!
//! All configuration is environment-sourced; there are no CLI flags.
//! Recognized variables:
//! - `SDSE_HOST` - Dedicated Server hostname (required)
//! - `SDSE_PORT` - Dedicated Server HTTPS API port (required)
//! - `SDSE_TOKEN` - API bearer token (required)
//! - `SDSE_INSECURE` - "1" disables TLS certificate verification

use crate::error::{Error, Result};

/// Exporter configuration.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Dedicated Server hostname.
    pub host: String,
    /// Dedicated Server HTTPS API port.
    pub port: u16,
    /// API bearer token.
    pub token: String,
    /// Skip TLS certificate verification for self-signed deployments.
    pub insecure: bool,
}

impl ExporterConfig {
    /// Load the exporter config from environment variables.
    ///
    /// Missing or empty required variables are a configuration error and
    /// abort startup.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = required(&lookup, "SDSE_HOST")?;
        let port = required(&lookup, "SDSE_PORT")?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| Error::config(format!("SDSE_PORT is not a valid port: {port}")))?;
        let token = required(&lookup, "SDSE_TOKEN")?;
        // Verification stays on unless the value is exactly "1".
        let insecure = lookup("SDSE_INSECURE").as_deref() == Some("1");

        Ok(Self {
            host,
            port,
            token,
            insecure,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!("{key} must be set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&'static str, &'static str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|value| value.to_string())
    }

    #[test]
    fn test_config_from_complete_env() {
        let config = ExporterConfig::from_lookup(lookup_from(&[
            ("SDSE_HOST", "factory.example.com"),
            ("SDSE_PORT", "7777"),
            ("SDSE_TOKEN", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.host, "factory.example.com");
        assert_eq!(config.port, 7777);
        assert_eq!(config.token, "secret");
        assert!(!config.insecure);
    }

    #[test]
    fn test_missing_host_is_configuration_error() {
        let result = ExporterConfig::from_lookup(lookup_from(&[
            ("SDSE_PORT", "7777"),
            ("SDSE_TOKEN", "secret"),
        ]));

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_empty_token_is_configuration_error() {
        let result = ExporterConfig::from_lookup(lookup_from(&[
            ("SDSE_HOST", "factory.example.com"),
            ("SDSE_PORT", "7777"),
            ("SDSE_TOKEN", "  "),
        ]));

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_non_numeric_port_is_configuration_error() {
        let result = ExporterConfig::from_lookup(lookup_from(&[
            ("SDSE_HOST", "factory.example.com"),
            ("SDSE_PORT", "not-a-port"),
            ("SDSE_TOKEN", "secret"),
        ]));

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_insecure_enabled_only_by_exact_value() {
        let base = [
            ("SDSE_HOST", "factory.example.com"),
            ("SDSE_PORT", "7777"),
            ("SDSE_TOKEN", "secret"),
        ];

        let with_insecure = |value: &'static str| {
            let mut vars = base.to_vec();
            vars.push(("SDSE_INSECURE", value));
            ExporterConfig::from_lookup(lookup_from(&vars)).unwrap()
        };

        assert!(with_insecure("1").insecure);
        assert!(!with_insecure("0").insecure);
        assert!(!with_insecure("true").insecure);
        assert!(!with_insecure("").insecure);

        let unset = ExporterConfig::from_lookup(lookup_from(&base)).unwrap();
        assert!(!unset.insecure);
    }
}
