//! HTTP client for the Fluentd monitor agent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::dto;
use super::settings::FluentdConfig;
use crate::domain::StatsSnapshot;
use crate::error::FetchError;
use crate::port::outbound::stats::StatsSource;

/// Fetches plugin statistics from one monitor agent endpoint.
pub struct FluentdClient {
    http: HttpClient,
    url: Url,
}

impl FluentdClient {
    /// Create a client with reqwest's default settings.
    ///
    /// `url` is the full stats URL, see
    /// [`RuntimeIdentity::stats_url`](crate::domain::RuntimeIdentity::stats_url).
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            http: HttpClient::new(),
            url,
        }
    }

    /// Create a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend cannot initialise.
    pub fn from_config(url: Url, config: &FluentdConfig) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;

        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl StatsSource for FluentdClient {
    async fn fetch(&self) -> Result<StatsSnapshot, FetchError> {
        debug!(url = %self.url, "Fetching fluentd plugin stats");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(FetchError::Network)?;

        // The body is always drained, even for error statuses.
        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::Read)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let snapshot = dto::decode(&body)?;
        debug!(plugins = snapshot.len(), "Fetched fluentd plugin stats");

        Ok(snapshot)
    }
}
