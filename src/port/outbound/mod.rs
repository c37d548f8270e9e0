//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod gauge;
pub mod stats;
