//! Handler for the poll-and-forward run.

use tokio::signal;
use tracing::{info, warn};

use super::command::Cli;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Merge the optional config file with command-line flags and validate.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::error::Error::Config) for unreadable
/// files or invalid settings.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    apply_overrides(&mut config, cli);
    config.validate()?;

    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref statsd) = cli.statsd {
        config.statsd.address = Some(statsd.clone());
    }
    if let Some(ref cluster) = cli.cluster {
        config.cluster = Some(cluster.clone());
    }
    if let Some(ref fluent) = cli.fluent {
        config.fluentd.url = fluent.clone();
    }
    if let Some(interval) = cli.interval {
        config.fluentd.interval = interval;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
}

/// Build the poller and run it until Ctrl-C.
///
/// # Errors
///
/// Returns startup failures only; poll failures are logged and survived.
pub async fn execute(config: Config) -> Result<()> {
    let identity = bootstrap::build_identity(&config)?;
    let poller = bootstrap::build_poller(&config, identity).await?;

    poller.run(shutdown_signal()).await;

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
