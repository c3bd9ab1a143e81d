use std::net::SocketAddr;
use thiserror::Error;

pub const HTTP_ADDR_VAR: &str = "WEEK_SCHEDULER_HTTP_ADDR";
pub const LOG_VAR: &str = "WEEK_SCHEDULER_LOG";

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid WEEK_SCHEDULER_HTTP_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the binaries, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub http_addr: SocketAddr,
    pub log_filter: String,
}

impl SchedulerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log filter alone, for drivers that never bind a socket.
    pub fn log_filter_from_env() -> String {
        Self::log_filter_from_lookup(|key| std::env::var(key).ok())
    }

    /// `RUST_LOG` is honoured when the scheduler-specific log variable is
    /// absent; blank values count as unset.
    pub fn log_filter_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Build a config from an arbitrary key lookup; unset keys fall back to
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(HTTP_ADDR_VAR).unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_filter = Self::log_filter_from_lookup(&lookup);

        Ok(Self {
            http_addr,
            log_filter,
        })
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[
            (HTTP_ADDR_VAR, "0.0.0.0:8080"),
            (LOG_VAR, "week_scheduler=debug"),
        ]))
        .unwrap();
        assert_eq!(config.http_addr.port(), 8080);
        assert_eq!(config.log_filter, "week_scheduler=debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[("RUST_LOG", "info")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn rejects_bad_address() {
        let err = SchedulerConfig::from_lookup(lookup_from(&[(HTTP_ADDR_VAR, "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }

    #[test]
    fn log_filter_ignores_a_bad_address() {
        let lookup = lookup_from(&[(HTTP_ADDR_VAR, "not-an-addr"), (LOG_VAR, "debug")]);
        assert!(SchedulerConfig::from_lookup(&lookup).is_err());
        assert_eq!(SchedulerConfig::log_filter_from_lookup(&lookup), "debug");
        assert_eq!(
            SchedulerConfig::log_filter_from_lookup(lookup_from(&[(LOG_VAR, "  ")])),
            "warn"
        );
    }
}
