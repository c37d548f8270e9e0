//! Plugin statistics source port.

use async_trait::async_trait;

use crate::domain::StatsSnapshot;
use crate::error::FetchError;

/// Source of per-plugin buffer statistics.
///
/// One call is one request; implementations never retry. The poll loop
/// decides when to ask again.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch the current statistics for every plugin.
    async fn fetch(&self) -> Result<StatsSnapshot, FetchError>;
}
