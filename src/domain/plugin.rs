//! Per-plugin statistics reported by Fluentd's monitor agent.

/// Plugin type used by Fluentd for the discard-everything output.
pub const NULL_PLUGIN_TYPE: &str = "null";

/// Buffer and retry counters for one plugin in a single poll response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginStat {
    /// Plugin identifier, unique within one response only.
    pub id: String,
    /// Plugin type name (`file`, `forward`, `elasticsearch`, ...).
    pub plugin_type: String,
    /// Whether the plugin is an output plugin.
    pub is_output: bool,
    /// Number of chunks waiting in the buffer queue.
    pub queue_length: f64,
    /// Total size of queued buffer data in bytes.
    pub total_queued_bytes: f64,
    /// Retry attempts since the plugin started.
    pub retry_count: f64,
}

impl PluginStat {
    /// True when this plugin's buffer counters are worth publishing.
    ///
    /// Only output plugins have buffers, and the `null` output never holds data.
    #[must_use]
    pub fn is_publishable(&self) -> bool {
        self.is_output && self.plugin_type != NULL_PLUGIN_TYPE
    }
}

/// All plugin records decoded from one poll, in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    plugins: Vec<PluginStat>,
}

impl StatsSnapshot {
    #[must_use]
    pub fn new(plugins: Vec<PluginStat>) -> Self {
        Self { plugins }
    }

    #[must_use]
    pub fn plugins(&self) -> &[PluginStat] {
        &self.plugins
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugins that pass the output/type filter.
    pub fn publishable(&self) -> impl Iterator<Item = &PluginStat> {
        self.plugins.iter().filter(|p| p.is_publishable())
    }
}

impl From<Vec<PluginStat>> for StatsSnapshot {
    fn from(plugins: Vec<PluginStat>) -> Self {
        Self::new(plugins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin(plugin_type: &str, is_output: bool) -> PluginStat {
        PluginStat {
            id: format!("{plugin_type}-1"),
            plugin_type: plugin_type.into(),
            is_output,
            ..Default::default()
        }
    }

    #[test]
    fn output_plugins_are_publishable() {
        assert!(plugin("file", true).is_publishable());
    }

    #[test]
    fn input_plugins_are_not_publishable() {
        assert!(!plugin("tail", false).is_publishable());
    }

    #[test]
    fn null_output_is_not_publishable() {
        assert!(!plugin("null", true).is_publishable());
    }

    #[test]
    fn publishable_keeps_response_order() {
        let snapshot = StatsSnapshot::new(vec![
            plugin("forward", true),
            plugin("tail", false),
            plugin("null", true),
            plugin("file", true),
        ]);

        let types: Vec<_> = snapshot
            .publishable()
            .map(|p| p.plugin_type.as_str())
            .collect();
        assert_eq!(types, ["forward", "file"]);
        assert_eq!(snapshot.len(), 4);
    }
}
