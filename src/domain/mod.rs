//! Domain types shared by the fetch and publish sides.
//!
//! Nothing here performs I/O: plugin records decoded from Fluentd, the gauges
//! derived from them, and the process identity used to tag every emission.

pub mod gauge;
pub mod identity;
pub mod plugin;

pub use gauge::{Gauge, Tag};
pub use identity::RuntimeIdentity;
pub use plugin::{PluginStat, StatsSnapshot};
