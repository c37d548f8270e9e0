//! Gauge sink port.

use async_trait::async_trait;

use crate::domain::Gauge;
use crate::error::PublishError;

/// Destination for gauge emissions.
///
/// Delivery is best effort. A failed batch is reported to the caller and
/// dropped; implementations must not queue it for a later call.
#[async_trait]
pub trait GaugeSink: Send + Sync {
    /// Send one cycle's gauges.
    async fn submit(&self, gauges: &[Gauge]) -> Result<(), PublishError>;
}
