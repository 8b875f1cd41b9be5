//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub simulate_latency: bool,
    pub latency_jitter: Duration,
    pub process_timeout: Option<Duration>,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let simulate_latency = match lookup("SIMULATE_LATENCY") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("SIMULATE_LATENCY must be a boolean, got {value:?}"))?,
            None => true,
        };

        let latency_jitter = lookup("LATENCY_JITTER_MS")
            .map(|ms| ms.parse().map(Duration::from_millis))
            .transpose()
            .context("LATENCY_JITTER_MS must be a number of milliseconds")?
            .unwrap_or(Duration::ZERO);

        let process_timeout = lookup("PROCESS_TIMEOUT_MS")
            .map(|ms| ms.parse().map(Duration::from_millis))
            .transpose()
            .context("PROCESS_TIMEOUT_MS must be a number of milliseconds")?;

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            port,
            simulate_latency,
            latency_jitter,
            process_timeout,
            otlp_endpoint,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.simulate_latency);
        assert_eq!(config.latency_jitter, Duration::ZERO);
        assert_eq!(config.process_timeout, None);
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("SIMULATE_LATENCY", "off"),
            ("LATENCY_JITTER_MS", "250"),
            ("PROCESS_TIMEOUT_MS", "5000"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(!config.simulate_latency);
        assert_eq!(config.latency_jitter, Duration::from_millis(250));
        assert_eq!(config.process_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("SIMULATE_LATENCY", "sometimes")]).is_err());
        assert!(load(&[("PROCESS_TIMEOUT_MS", "-1")]).is_err());
    }
}
