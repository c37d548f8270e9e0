//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - [`ScriptedSource`](source::ScriptedSource), a
//!   [`StatsSource`](crate::port::StatsSource) that replays canned results.
//! - [`sink`] - [`RecordingSink`](sink::RecordingSink), a
//!   [`GaugeSink`](crate::port::GaugeSink) that keeps what it was given.
//! - [`domain`] - Builders for identities, plugins and snapshots.

pub mod domain;
pub mod sink;
pub mod source;
