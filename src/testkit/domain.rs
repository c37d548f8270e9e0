//! Builders for domain values used across tests.

use std::time::Duration;

use crate::domain::{PluginStat, RuntimeIdentity, StatsSnapshot};

pub const HOSTNAME: &str = "node-1";
pub const CLUSTER: &str = "prod-eu";
pub const INTERVAL: Duration = Duration::from_secs(10);

/// Identity with fixed hostname and cluster, polling every [`INTERVAL`].
pub fn identity() -> RuntimeIdentity {
    identity_for("http://127.0.0.1:24220")
}

/// Identity pointed at `base_url`.
pub fn identity_for(base_url: &str) -> RuntimeIdentity {
    RuntimeIdentity::new(HOSTNAME, CLUSTER, base_url, INTERVAL)
        .unwrap_or_else(|e| panic!("invalid test identity for {base_url}: {e}"))
}

/// An output plugin with the given counters.
pub fn output_plugin(
    id: &str,
    plugin_type: &str,
    queue_length: f64,
    total_queued_bytes: f64,
    retry_count: f64,
) -> PluginStat {
    PluginStat {
        id: id.into(),
        plugin_type: plugin_type.into(),
        is_output: true,
        queue_length,
        total_queued_bytes,
        retry_count,
    }
}

/// A non-output plugin; its counters are irrelevant.
pub fn input_plugin(id: &str, plugin_type: &str) -> PluginStat {
    PluginStat {
        id: id.into(),
        plugin_type: plugin_type.into(),
        is_output: false,
        ..Default::default()
    }
}

/// The single `out1`/`file` plugin from the reference response body.
pub fn file_output_snapshot() -> StatsSnapshot {
    StatsSnapshot::new(vec![output_plugin("out1", "file", 5.0, 1024.0, 2.0)])
}
