//! Maps plugin statistics to tagged gauges and hands them to the sink.

use std::sync::Arc;

use crate::domain::{Gauge, PluginStat, RuntimeIdentity, StatsSnapshot, Tag};
use crate::error::PublishError;
use crate::port::outbound::gauge::GaugeSink;

pub const BUFFER_QUEUE_LEN: &str = "buffer_queue_len";
pub const BUFFER_TOTAL_QUEUED_SIZE: &str = "buffer_total_queued_size";
pub const RETRY_COUNT: &str = "retry_count";

pub const TAG_NODENAME: &str = "nodename";
pub const TAG_KUBE_CLUSTER: &str = "kube_cluster";
pub const TAG_PLUGIN_ID: &str = "plugin_id";
pub const TAG_PLUGIN_TYPE: &str = "plugin_type";

/// Counts from one publish call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    /// Plugins that produced gauges.
    pub emitted_plugins: usize,
    /// Plugins dropped by the output/type filter.
    pub skipped_plugins: usize,
    /// Gauges handed to the sink.
    pub gauges: usize,
}

/// Tags identifying one plugin on one node.
fn plugin_tags(plugin: &PluginStat, identity: &RuntimeIdentity) -> [Tag; 4] {
    [
        Tag::new(TAG_NODENAME, identity.hostname()),
        Tag::new(TAG_KUBE_CLUSTER, identity.cluster_name()),
        Tag::new(TAG_PLUGIN_ID, plugin.id.as_str()),
        Tag::new(TAG_PLUGIN_TYPE, plugin.plugin_type.as_str()),
    ]
}

/// The three gauges for one publishable plugin.
#[must_use]
pub fn plugin_gauges(plugin: &PluginStat, identity: &RuntimeIdentity) -> [Gauge; 3] {
    let tags = plugin_tags(plugin, identity);
    [
        Gauge::new(BUFFER_QUEUE_LEN, plugin.queue_length).with_tags(tags.clone()),
        Gauge::new(BUFFER_TOTAL_QUEUED_SIZE, plugin.total_queued_bytes).with_tags(tags.clone()),
        Gauge::new(RETRY_COUNT, plugin.retry_count).with_tags(tags),
    ]
}

/// Gauges for every publishable plugin in `snapshot`, in response order.
#[must_use]
pub fn snapshot_gauges(
    snapshot: &StatsSnapshot,
    identity: &RuntimeIdentity,
) -> (Vec<Gauge>, PublishSummary) {
    let gauges: Vec<Gauge> = snapshot
        .publishable()
        .flat_map(|plugin| plugin_gauges(plugin, identity))
        .collect();

    let emitted_plugins = snapshot.publishable().count();
    let summary = PublishSummary {
        emitted_plugins,
        skipped_plugins: snapshot.len() - emitted_plugins,
        gauges: gauges.len(),
    };

    (gauges, summary)
}

/// Publishes a snapshot's gauges through a [`GaugeSink`].
pub struct MetricPublisher {
    sink: Arc<dyn GaugeSink>,
}

impl MetricPublisher {
    pub fn new(sink: Arc<dyn GaugeSink>) -> Self {
        Self { sink }
    }

    /// Build and send this cycle's gauges as one batch.
    ///
    /// Nothing is sent when no plugin qualifies.
    ///
    /// # Errors
    ///
    /// Returns the sink's [`PublishError`]; the batch is not retried.
    pub async fn publish(
        &self,
        snapshot: &StatsSnapshot,
        identity: &RuntimeIdentity,
    ) -> Result<PublishSummary, PublishError> {
        let (gauges, summary) = snapshot_gauges(snapshot, identity);

        if !gauges.is_empty() {
            self.sink.submit(&gauges).await?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn identity() -> RuntimeIdentity {
        RuntimeIdentity::new(
            "node-1",
            "prod",
            "http://127.0.0.1:24220",
            Duration::from_secs(10),
        )
        .unwrap()
    }

    fn output(id: &str, plugin_type: &str) -> PluginStat {
        PluginStat {
            id: id.into(),
            plugin_type: plugin_type.into(),
            is_output: true,
            queue_length: 5.0,
            total_queued_bytes: 1024.0,
            retry_count: 2.0,
        }
    }

    #[test]
    fn each_gauge_reads_its_own_field() {
        let plugin = PluginStat {
            queue_length: 1.0,
            total_queued_bytes: 2.0,
            retry_count: 3.0,
            ..output("out1", "file")
        };

        let values: Vec<_> = plugin_gauges(&plugin, &identity())
            .iter()
            .map(|g| (g.name, g.value))
            .collect();

        assert_eq!(
            values,
            [
                (BUFFER_QUEUE_LEN, 1.0),
                (BUFFER_TOTAL_QUEUED_SIZE, 2.0),
                (RETRY_COUNT, 3.0),
            ]
        );
    }

    #[test]
    fn gauges_carry_four_tags_in_order() {
        for gauge in plugin_gauges(&output("out1", "file"), &identity()) {
            let rendered: Vec<_> = gauge.tags.iter().map(ToString::to_string).collect();
            assert_eq!(
                rendered,
                [
                    "nodename:node-1",
                    "kube_cluster:prod",
                    "plugin_id:out1",
                    "plugin_type:file"
                ]
            );
            assert_eq!(gauge.sample_rate, 1.0);
        }
    }

    #[test]
    fn summary_counts_filtered_plugins() {
        let snapshot = StatsSnapshot::new(vec![
            output("a", "forward"),
            PluginStat {
                is_output: false,
                ..output("b", "tail")
            },
            output("c", "null"),
        ]);

        let (gauges, summary) = snapshot_gauges(&snapshot, &identity());

        assert_eq!(gauges.len(), 3);
        assert_eq!(
            summary,
            PublishSummary {
                emitted_plugins: 1,
                skipped_plugins: 2,
                gauges: 3,
            }
        );
    }
}
