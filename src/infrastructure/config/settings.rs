//! Application configuration loading and validation.
//!
//! Settings come from an optional TOML file; command-line flags and their
//! environment variables are layered on top by the CLI before
//! [`Config::validate`] runs.
//!
//! ```toml
//! cluster = "prod-eu-1"
//!
//! [statsd]
//! address = "127.0.0.1:8125"
//!
//! [fluentd]
//! url = "http://127.0.0.1:24220"
//! interval = "10s"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::dogstatsd::settings::{MAX_PACKET_SIZE, MIN_PACKET_SIZE};
use crate::adapter::outbound::dogstatsd::StatsdConfig;
use crate::adapter::outbound::fluentd::FluentdConfig;
use crate::domain::identity;
use crate::error::ConfigError;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Kubernetes cluster name, used verbatim as the `kube_cluster` tag.
    #[serde(default)]
    pub cluster: Option<String>,

    /// DogStatsD agent settings.
    #[serde(default)]
    pub statsd: StatsdConfig,

    /// Fluentd monitor agent settings.
    #[serde(default)]
    pub fluentd: FluentdConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Does not validate: required fields may still arrive from the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] or [`ConfigError::Parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or bad field types.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Check required fields and value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.statsd_address()?;
        self.cluster_name()?;

        identity::stats_url(&self.fluentd.url)?;

        if self.fluentd.interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be greater than zero".into(),
            });
        }
        if self.fluentd.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fluentd.timeout_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.fluentd.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fluentd.connect_timeout_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if !(MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(&self.statsd.max_packet_size) {
            return Err(ConfigError::InvalidValue {
                field: "statsd.max_packet_size",
                reason: format!(
                    "must be between {MIN_PACKET_SIZE} and {MAX_PACKET_SIZE}, got {}",
                    self.statsd.max_packet_size
                ),
            });
        }

        Ok(())
    }

    /// DogStatsD address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when unset or blank.
    pub fn statsd_address(&self) -> Result<&str, ConfigError> {
        non_blank(self.statsd.address.as_deref()).ok_or(ConfigError::MissingField {
            field: "statsd.address",
        })
    }

    /// Cluster name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when unset or blank.
    pub fn cluster_name(&self) -> Result<&str, ConfigError> {
        non_blank(self.cluster.as_deref()).ok_or(ConfigError::MissingField { field: "cluster" })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
