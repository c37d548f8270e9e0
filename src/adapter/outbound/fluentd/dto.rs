//! Wire types for the monitor agent's `plugins.json` document.
//!
//! Decoding is lenient: unknown fields are ignored and missing or `null`
//! fields fall back to zero, empty or `false`. Only a body that is not a JSON
//! object is rejected.

use serde::de::Error as _;
use serde::Deserialize;

use crate::domain::{PluginStat, StatsSnapshot};

#[derive(Debug, Default, Deserialize)]
pub struct PluginsResponse {
    pub plugins: Option<Vec<PluginEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PluginEntry {
    pub plugin_id: Option<String>,
    #[serde(rename = "type")]
    pub plugin_type: Option<String>,
    pub output_plugin: Option<bool>,
    pub buffer_queue_length: Option<f64>,
    pub buffer_total_queued_size: Option<f64>,
    pub retry_count: Option<f64>,
}

impl From<PluginEntry> for PluginStat {
    fn from(entry: PluginEntry) -> Self {
        Self {
            id: entry.plugin_id.unwrap_or_default(),
            plugin_type: entry.plugin_type.unwrap_or_default(),
            is_output: entry.output_plugin.unwrap_or_default(),
            queue_length: entry.buffer_queue_length.unwrap_or_default(),
            total_queued_bytes: entry.buffer_total_queued_size.unwrap_or_default(),
            retry_count: entry.retry_count.unwrap_or_default(),
        }
    }
}

impl From<PluginsResponse> for StatsSnapshot {
    fn from(response: PluginsResponse) -> Self {
        response
            .plugins
            .unwrap_or_default()
            .into_iter()
            .map(PluginStat::from)
            .collect::<Vec<_>>()
            .into()
    }
}

/// Decode a `plugins.json` body.
///
/// # Errors
///
/// Fails when the body is not JSON, or is JSON but not an object, or when a
/// present field has the wrong JSON type.
pub fn decode(body: &[u8]) -> Result<StatsSnapshot, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom(
            "expected a JSON object with a `plugins` array",
        ));
    }
    let response: PluginsResponse = serde_json::from_value(value)?;
    Ok(response.into())
}
