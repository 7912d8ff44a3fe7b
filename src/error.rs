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

/// Market data fetch failures.
///
/// These never leave the fetcher: they are logged and turned into an empty
/// result.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("market data request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("market data request timed out")]
    Timeout,

    #[error("market data provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode market data: {0}")]
    Parse(String),
}

impl FetchError {
    /// Classify a reqwest error raised while sending or reading a response.
    #[must_use]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

/// Outbound message delivery failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("rejected by messaging API: {0}")]
    Rejected(String),

    #[error("{0}")]
    Other(String),
}

/// Job scheduling errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("job registry is shut down")]
    RegistryClosed,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("send failed: {0}")]
    Send(#[from] SendError),

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error("Telegram rejected the bot token: {0}")]
    CredentialRejected(String),

    #[error("another instance is already running (PID {pid})")]
    AlreadyRunning { pid: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
