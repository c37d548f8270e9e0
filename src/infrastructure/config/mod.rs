//! Configuration loading, defaults and logging setup.

pub mod duration;
pub mod logging;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::Config;
