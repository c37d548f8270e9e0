//! Command-line interface definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::infrastructure::config::duration::parse_duration;

/// Forward Fluentd buffer statistics to DogStatsD.
#[derive(Parser, Debug)]
#[command(name = "fluentd-dogstatsd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host:Port of Datadog Statsd agent
    #[arg(long, env = "STATSD_ADDR")]
    pub statsd: Option<String>,

    /// Name of kubernetes cluster
    #[arg(long, env = "CLUSTER_NAME")]
    pub cluster: Option<String>,

    /// Fluentd HTTP API endpoint [default: http://127.0.0.1:24220]
    #[arg(long, env = "FLUENTD_URL")]
    pub fluent: Option<String>,

    /// Gap between metric probes, e.g. 10s, 500ms, 1m30s [default: 10s]
    #[arg(long, env = "POLL_INTERVAL", value_parser = parse_duration)]
    pub interval: Option<Duration>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
