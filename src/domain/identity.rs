//! Process identity resolved once at startup.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Path of the plugin stats document served by Fluentd's monitor agent.
pub const PLUGINS_PATH: &str = "api/plugins.json";

/// Identity and polling target shared read-only by every poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeIdentity {
    hostname: String,
    cluster_name: String,
    stats_url: Url,
    interval: Duration,
}

impl RuntimeIdentity {
    /// Build the identity, joining `base_url` with the plugin stats path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the URL does not parse as
    /// http(s) or the interval is zero.
    pub fn new(
        hostname: impl Into<String>,
        cluster_name: impl Into<String>,
        base_url: &str,
        interval: Duration,
    ) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be greater than zero".into(),
            });
        }

        Ok(Self {
            hostname: hostname.into(),
            cluster_name: cluster_name.into(),
            stats_url: stats_url(base_url)?,
            interval,
        })
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    /// Full URL of the plugin stats endpoint.
    #[must_use]
    pub fn stats_url(&self) -> &Url {
        &self.stats_url
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Resolve `<base>/api/plugins.json`, tolerating a trailing slash on `base`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for unparsable or non-http(s) URLs.
pub fn stats_url(base: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field: "fluentd.url",
        reason,
    };

    let url = Url::parse(&format!("{}/{PLUGINS_PATH}", base.trim_end_matches('/')))
        .map_err(|e| invalid(format!("{base}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
