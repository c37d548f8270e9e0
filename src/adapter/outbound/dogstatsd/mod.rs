//! DogStatsD adapter.
//!
//! Gauges go to the local Datadog agent through a buffered `cadence`
//! client. Lines look like
//!
//! ```text
//! fluentd.<name>:<value>|g|#<key>:<value>,...
//! ```

pub mod client;
pub mod settings;

pub use client::DogStatsdClient;
pub use settings::StatsdConfig;

/// Prefix applied to every metric name, joined with a `.`.
pub const NAMESPACE: &str = "fluentd";
