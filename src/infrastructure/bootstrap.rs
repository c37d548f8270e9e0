//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Everything here runs once before the first poll. Any failure is a
//! [`StartupError`] and stops the process.

use std::io;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::dogstatsd::DogStatsdClient;
use crate::adapter::outbound::fluentd::FluentdClient;
use crate::application::poller::Poller;
use crate::domain::RuntimeIdentity;
use crate::error::StartupError;
use crate::infrastructure::config::Config;

/// Resolve the identity shared by every cycle.
///
/// # Errors
///
/// Fails on invalid configuration or when the hostname cannot be read.
pub fn build_identity(config: &Config) -> Result<RuntimeIdentity, StartupError> {
    config.validate()?;

    let hostname = local_hostname().map_err(StartupError::Hostname)?;

    Ok(RuntimeIdentity::new(
        hostname,
        config.cluster_name()?,
        &config.fluentd.url,
        config.fluentd.interval,
    )?)
}

/// Wire the Fluentd source and DogStatsD sink into a poller.
///
/// # Errors
///
/// Fails when the statsd socket or the HTTP client cannot be created.
pub async fn build_poller(
    config: &Config,
    identity: RuntimeIdentity,
) -> Result<Poller, StartupError> {
    let address = config.statsd_address()?;
    info!(address, "Starting a buffered datadog statsd client");

    let sink = DogStatsdClient::connect_with_capacity(address, config.statsd.max_packet_size)
        .await
        .map_err(StartupError::MetricsClient)?;

    let source = FluentdClient::from_config(identity.stats_url().clone(), &config.fluentd)
        .map_err(StartupError::HttpClient)?;

    Ok(Poller::new(Arc::new(source), Arc::new(sink), identity))
}

/// Name of this machine as reported by the OS.
///
/// # Errors
///
/// Returns the OS error, or `NotFound` when the name is empty.
#[cfg(unix)]
pub fn local_hostname() -> io::Result<String> {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    non_empty(String::from_utf8_lossy(&buf[..len]).into_owned())
}

/// Name of this machine as reported by the environment.
///
/// # Errors
///
/// Returns `NotFound` when neither `COMPUTERNAME` nor `HOSTNAME` is set.
#[cfg(not(unix))]
pub fn local_hostname() -> io::Result<String> {
    let name = std::env::var("COMPUTERNAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .unwrap_or_default();
    non_empty(name)
}

fn non_empty(name: String) -> io::Result<String> {
    if name.is_empty() {
        Err(io::Error::new(io::ErrorKind::NotFound, "hostname is empty"))
    } else {
        Ok(name)
    }
}
