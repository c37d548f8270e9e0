//! DogStatsD agent configuration.

use serde::Deserialize;

/// Address of the metrics agent and datagram sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsdConfig {
    /// Agent address as `host:port`. Required.
    #[serde(default)]
    pub address: Option<String>,
    /// Upper bound for one UDP payload in bytes.
    #[serde(default = "default_max_packet_size")]
    pub max_packet_size: usize,
}

/// Fits a single Ethernet frame without IP fragmentation.
pub const DEFAULT_MAX_PACKET_SIZE: usize = 1432;

pub const MIN_PACKET_SIZE: usize = 512;

pub const MAX_PACKET_SIZE: usize = 65_467;

const fn default_max_packet_size() -> usize {
    DEFAULT_MAX_PACKET_SIZE
}

impl Default for StatsdConfig {
    fn default() -> Self {
        Self {
            address: None,
            max_packet_size: default_max_packet_size(),
        }
    }
}
