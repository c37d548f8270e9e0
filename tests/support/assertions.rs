use fluentd_dogstatsd::domain::Gauge;

pub const TAG_KEYS: [&str; 4] = ["nodename", "kube_cluster", "plugin_id", "plugin_type"];

/// Assert that `gauge` carries exactly the four identity tags with these values.
pub fn assert_plugin_tags(gauge: &Gauge, node: &str, cluster: &str, id: &str, plugin_type: &str) {
    let keys: Vec<_> = gauge.tags.iter().map(|t| t.key).collect();
    assert_eq!(keys, TAG_KEYS, "unexpected tag keys on {}", gauge.name);

    assert_eq!(gauge.tag("nodename"), Some(node));
    assert_eq!(gauge.tag("kube_cluster"), Some(cluster));
    assert_eq!(gauge.tag("plugin_id"), Some(id));
    assert_eq!(gauge.tag("plugin_type"), Some(plugin_type));
}

/// Find the gauge named `name` for plugin `id`.
pub fn gauge_for<'a>(gauges: &'a [Gauge], name: &str, id: &str) -> &'a Gauge {
    gauges
        .iter()
        .find(|g| g.name == name && g.tag("plugin_id") == Some(id))
        .unwrap_or_else(|| panic!("no {name} gauge for plugin {id}"))
}
