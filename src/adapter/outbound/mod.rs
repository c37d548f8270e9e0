//! Outbound adapters (driven side).

pub mod dogstatsd;
pub mod fluentd;
