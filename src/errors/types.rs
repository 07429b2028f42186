use thiserror::Error;

/// Failure of a single API request. Every variant is recoverable: the caller
/// degrades to an empty result and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Timeout after {timeout_secs}s requesting {endpoint}")]
    Timeout { endpoint: String, timeout_secs: u64 },

    #[error("HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },

    #[error("Invalid JSON response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl FetchError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Status { .. } => "status",
            Self::Network { .. } => "network",
            Self::Decode { .. } => "decode",
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Timeout { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Network { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Internal error: {0}")]
    Internal(String),
}
