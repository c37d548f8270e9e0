//! fluentd-dogstatsd - Fluentd buffer metrics for Datadog.
//!
//! Polls the Fluentd `monitor_agent` plugin stats endpoint on a fixed
//! interval and republishes per-output-plugin buffer and retry counters as
//! DogStatsD gauges tagged with node and cluster identity.
//!
//! # Architecture
//!
//! ```text
//! FluentdClient --(StatsSource)--> Poller --> MetricPublisher --(GaugeSink)--> DogStatsdClient
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Plugin statistics, gauges and the runtime identity
//! - [`port`] - `StatsSource` and `GaugeSink` traits
//! - [`application`] - Metric mapping and the poll loop
//! - [`adapter`] - Fluentd HTTP client, DogStatsD UDP client, CLI
//! - [`infrastructure`] - Configuration, logging and startup wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use fluentd_dogstatsd::adapter::outbound::dogstatsd::DogStatsdClient;
//! use fluentd_dogstatsd::adapter::outbound::fluentd::FluentdClient;
//! use fluentd_dogstatsd::application::Poller;
//! use fluentd_dogstatsd::domain::RuntimeIdentity;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let identity = RuntimeIdentity::new(
//!     "node-1",
//!     "prod",
//!     "http://127.0.0.1:24220",
//!     Duration::from_secs(10),
//! )?;
//! let source = FluentdClient::new(identity.stats_url().clone());
//! let sink = DogStatsdClient::connect("127.0.0.1:8125").await?;
//!
//! let poller = Poller::new(Arc::new(source), Arc::new(sink), identity);
//! poller.run(async { let _ = tokio::signal::ctrl_c().await; }).await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
