//! Fluentd monitor agent adapter.
//!
//! Reads `GET <base>/api/plugins.json` from the `monitor_agent` input plugin
//! and decodes it into a [`StatsSnapshot`](crate::domain::StatsSnapshot).

pub mod client;
pub mod dto;
pub mod settings;

pub use client::FluentdClient;
pub use settings::FluentdConfig;
