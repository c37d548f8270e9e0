//! Gauge emissions produced for the metrics agent.

use std::fmt;

/// A `key:value` label attached to a gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub value: String,
}

impl Tag {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// One instantaneous metric value with its tags.
///
/// `name` excludes the namespace prefix; the sink applies it on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub name: &'static str,
    pub value: f64,
    pub tags: Vec<Tag>,
    pub sample_rate: f64,
}

impl Gauge {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            tags: Vec::new(),
            sample_rate: 1.0,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Value of the first tag named `key`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}
