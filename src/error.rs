use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures that stop the process before the first poll.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to resolve local hostname: {0}")]
    Hostname(#[source] std::io::Error),

    #[error("failed to start statsd client: {0}")]
    MetricsClient(#[source] cadence::MetricError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Coarse classification of a [`FetchError`], used in log fields and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Status,
    Read,
    Decode,
}

/// Errors from a single request to the Fluentd plugin stats endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to fluentd failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("fluentd responded with HTTP {status}")]
    Status { status: u16 },

    #[error("failed to read fluentd response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode fluentd response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network(_) => FetchErrorKind::Network,
            Self::Status { .. } => FetchErrorKind::Status,
            Self::Read(_) => FetchErrorKind::Read,
            Self::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

/// Errors from handing gauges to the metrics agent.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to send metrics to statsd: {0}")]
    Send(#[source] cadence::MetricError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Startup(#[from] StartupError),
}

pub type Result<T> = std::result::Result<T, Error>;
