//! Fixed-interval fetch and publish loop.
//!
//! ```text
//!        tick                       fetch ok, publish ok/err
//!  Idle ──────▶ Polling ──────────────────────────────────▶ Idle
//!                  │ fetch err                               ▲
//!                  └─────────────────────────────────────────┘
//! ```
//!
//! Cycles never overlap: a slow cycle pushes the next tick back instead of
//! running alongside it. Failures are logged and the loop carries on. The
//! loop only ends when the shutdown future passed to [`Poller::run`]
//! completes, and never in the middle of a cycle.

use std::future::Future;
use std::sync::Arc;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::publisher::{MetricPublisher, PublishSummary};
use crate::domain::RuntimeIdentity;
use crate::error::{FetchError, PublishError};
use crate::port::outbound::gauge::GaugeSink;
use crate::port::outbound::stats::StatsSource;

/// Result of a single poll cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    Published(PublishSummary),
    FetchFailed(FetchError),
    PublishFailed(PublishError),
}

impl CycleOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

/// Drives fetch→publish cycles for one Fluentd endpoint.
pub struct Poller {
    source: Arc<dyn StatsSource>,
    publisher: MetricPublisher,
    identity: RuntimeIdentity,
}

impl Poller {
    pub fn new(
        source: Arc<dyn StatsSource>,
        sink: Arc<dyn GaugeSink>,
        identity: RuntimeIdentity,
    ) -> Self {
        Self {
            source,
            publisher: MetricPublisher::new(sink),
            identity,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &RuntimeIdentity {
        &self.identity
    }

    /// Run exactly one fetch→publish cycle, logging any failure.
    pub async fn poll_once(&self) -> CycleOutcome {
        let snapshot = match self.source.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    url = %self.identity.stats_url(),
                    kind = ?e.kind(),
                    error = %e,
                    "Failed to fetch fluentd plugin stats"
                );
                return CycleOutcome::FetchFailed(e);
            }
        };

        match self.publisher.publish(&snapshot, &self.identity).await {
            Ok(summary) => {
                debug!(
                    plugins = snapshot.len(),
                    emitted = summary.emitted_plugins,
                    skipped = summary.skipped_plugins,
                    gauges = summary.gauges,
                    "Forwarded fluentd metrics"
                );
                CycleOutcome::Published(summary)
            }
            Err(e) => {
                error!(error = %e, "Error forwarding metrics to statsd");
                CycleOutcome::PublishFailed(e)
            }
        }
    }

    /// Poll immediately, then once per interval, until `shutdown` completes.
    ///
    /// Returns the number of cycles run.
    pub async fn run<F>(&self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.identity.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            url = %self.identity.stats_url(),
            interval_ms = self.identity.interval().as_millis() as u64,
            hostname = self.identity.hostname(),
            cluster = self.identity.cluster_name(),
            "Poll loop started"
        );

        let mut cycles = 0u64;
        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    info!(cycles, "Poll loop shutting down");
                    break;
                }

                _ = ticker.tick() => {
                    self.poll_once().await;
                    cycles += 1;
                }
            }
        }

        cycles
    }
}
