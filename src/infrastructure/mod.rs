//! Configuration and startup wiring.

pub mod bootstrap;
pub mod config;
