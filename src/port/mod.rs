//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!  ┌──────────────┐      ┌──────────────────┐      ┌──────────────┐
//!  │ StatsSource  │ ───▶ │   Application    │ ───▶ │  GaugeSink   │
//!  │ (Fluentd)    │      │ (poller/publish) │      │ (DogStatsD)  │
//!  └──────────────┘      └──────────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::gauge::GaugeSink;
pub use outbound::stats::StatsSource;
