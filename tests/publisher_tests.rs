mod support;

use std::io;
use std::sync::Arc;

use fluentd_dogstatsd::adapter::outbound::fluentd::dto;
use fluentd_dogstatsd::application::publisher::{
    MetricPublisher, BUFFER_QUEUE_LEN, BUFFER_TOTAL_QUEUED_SIZE, RETRY_COUNT,
};
use fluentd_dogstatsd::domain::{PluginStat, StatsSnapshot};
use fluentd_dogstatsd::error::PublishError;
use fluentd_dogstatsd::testkit::domain::{
    self, input_plugin, output_plugin, CLUSTER, HOSTNAME,
};
use fluentd_dogstatsd::testkit::sink::RecordingSink;

use support::assertions::{assert_plugin_tags, gauge_for};

fn publisher() -> (MetricPublisher, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (MetricPublisher::new(sink.clone()), sink)
}

#[tokio::test]
async fn reference_body_yields_three_tagged_gauges() {
    let body = br#"{"plugins":[{"plugin_id":"out1","type":"file","output_plugin":true,"buffer_queue_length":5,"buffer_total_queued_size":1024,"retry_count":2}]}"#;
    let snapshot = dto::decode(body).unwrap();
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    let gauges = sink.gauges();
    assert_eq!(gauges.len(), 3);
    assert_eq!(gauge_for(&gauges, BUFFER_QUEUE_LEN, "out1").value, 5.0);
    assert_eq!(gauge_for(&gauges, BUFFER_TOTAL_QUEUED_SIZE, "out1").value, 1024.0);
    assert_eq!(gauge_for(&gauges, RETRY_COUNT, "out1").value, 2.0);
    for gauge in &gauges {
        assert_plugin_tags(gauge, HOSTNAME, CLUSTER, "out1", "file");
        assert_eq!(gauge.sample_rate, 1.0);
    }
}

#[tokio::test]
async fn gauges_do_not_share_a_source_field() {
    // Distinct values per counter so a gauge reading the wrong field shows up.
    let snapshot = StatsSnapshot::new(vec![output_plugin("out1", "s3", 7.0, 65_536.0, 11.0)]);
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    let gauges = sink.gauges();
    assert_eq!(gauge_for(&gauges, BUFFER_QUEUE_LEN, "out1").value, 7.0);
    assert_eq!(gauge_for(&gauges, BUFFER_TOTAL_QUEUED_SIZE, "out1").value, 65_536.0);
    assert_eq!(gauge_for(&gauges, RETRY_COUNT, "out1").value, 11.0);
}

#[tokio::test]
async fn empty_plugin_list_emits_nothing() {
    let snapshot = dto::decode(br#"{"plugins":[]}"#).unwrap();
    let (publisher, sink) = publisher();

    let summary = publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    assert_eq!(summary.gauges, 0);
    assert_eq!(sink.attempts(), 0);
}

#[tokio::test]
async fn input_plugins_never_emit() {
    let snapshot = StatsSnapshot::new(vec![
        input_plugin("in_tail", "tail"),
        input_plugin("in_forward", "forward"),
    ]);
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    assert!(sink.gauges().is_empty());
}

#[tokio::test]
async fn null_output_never_emits() {
    let snapshot = StatsSnapshot::new(vec![output_plugin("discard", "null", 3.0, 3.0, 3.0)]);
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    assert!(sink.gauges().is_empty());
}

#[tokio::test]
async fn filtered_plus_emitted_equals_total() {
    let mut plugins = Vec::new();
    for i in 0..24 {
        let id = format!("p{i}");
        let plugin = match i % 4 {
            0 => output_plugin(&id, "forward", 1.0, 2.0, 3.0),
            1 => input_plugin(&id, "tail"),
            2 => output_plugin(&id, "null", 1.0, 2.0, 3.0),
            _ => PluginStat {
                is_output: false,
                ..output_plugin(&id, "null", 0.0, 0.0, 0.0)
            },
        };
        plugins.push(plugin);
    }
    let snapshot = StatsSnapshot::new(plugins);
    let (publisher, sink) = publisher();

    let summary = publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    assert_eq!(summary.emitted_plugins + summary.skipped_plugins, 24);
    assert_eq!(summary.emitted_plugins, 6);
    assert_eq!(sink.gauges().len(), 6 * 3);
    assert!(sink
        .gauges()
        .iter()
        .all(|g| g.tag("plugin_type") == Some("forward")));
}

#[tokio::test]
async fn tag_values_are_copied_verbatim() {
    let snapshot = StatsSnapshot::new(vec![
        output_plugin("出力-ü", "elasticsearch", 1.0, 1.0, 1.0),
        output_plugin("", "", 2.0, 2.0, 2.0),
    ]);
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    let gauges = sink.gauges();
    assert_eq!(gauges.len(), 6);
    for gauge in &gauges[..3] {
        assert_plugin_tags(gauge, HOSTNAME, CLUSTER, "出力-ü", "elasticsearch");
    }
    for gauge in &gauges[3..] {
        assert_plugin_tags(gauge, HOSTNAME, CLUSTER, "", "");
    }
}

#[tokio::test]
async fn one_batch_per_publish() {
    let snapshot = StatsSnapshot::new(vec![
        output_plugin("a", "forward", 1.0, 1.0, 1.0),
        output_plugin("b", "file", 1.0, 1.0, 1.0),
    ]);
    let (publisher, sink) = publisher();

    publisher.publish(&snapshot, &domain::identity()).await.unwrap();

    assert_eq!(sink.batches().len(), 1);
    assert_eq!(sink.batches()[0].len(), 6);
}

#[tokio::test]
async fn sink_failure_is_returned_and_not_retried() {
    let (publisher, sink) = publisher();
    sink.fail_next(1, io::ErrorKind::ConnectionRefused);

    let result = publisher
        .publish(&domain::file_output_snapshot(), &domain::identity())
        .await;

    assert!(matches!(result, Err(PublishError::Send(_))));
    assert_eq!(sink.attempts(), 1);
    assert!(sink.gauges().is_empty());
}
