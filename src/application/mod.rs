//! Application services: metric mapping and the poll loop.

pub mod poller;
pub mod publisher;

pub use poller::{CycleOutcome, Poller};
pub use publisher::{MetricPublisher, PublishSummary};
