//! Fluentd endpoint configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::config::duration;

/// Where and how often to poll Fluentd.
#[derive(Debug, Clone, Deserialize)]
pub struct FluentdConfig {
    /// Base URL of the monitor agent.
    #[serde(default = "default_url")]
    pub url: String,
    /// Gap between polls, e.g. `10s` or `1m30s`.
    #[serde(default = "default_interval", with = "duration::serde_string")]
    pub interval: Duration,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

pub const DEFAULT_URL: &str = "http://127.0.0.1:24220";

fn default_url() -> String {
    DEFAULT_URL.into()
}

const fn default_interval() -> Duration {
    Duration::from_secs(10)
}

const fn default_timeout_ms() -> u64 {
    5000
}

const fn default_connect_timeout_ms() -> u64 {
    2000
}

impl Default for FluentdConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            interval: default_interval(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
