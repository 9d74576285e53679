//! API-specific error types
//!
//! Classifies failures by where they were detected: in the transport, in the
//! HTTP status, before the request was sent, or while decoding the body.

use discuit_domain::DiscuitError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Connection, TLS or I/O failure while talking to the server
    Transport,
    /// Server answered with a non-2xx status
    Http,
    /// Client-side check failed (bad input, missing credentials)
    Precondition,
    /// Response body did not match the expected shape
    Decode,
    /// Client could not be configured
    Config,
}

/// API operation errors
///
/// None of these are retried by the client; the caller decides.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) => ApiErrorCategory::Transport,
            Self::Http { .. } => ApiErrorCategory::Http,
            Self::Validation(_) | Self::Initialization(_) => ApiErrorCategory::Precondition,
            Self::Parse(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status code, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before or instead of talking to the server
    pub fn is_precondition(&self) -> bool {
        self.category() == ApiErrorCategory::Precondition
    }
}

impl From<DiscuitError> for ApiError {
    fn from(err: DiscuitError) -> Self {
        match err {
            DiscuitError::InvalidInput(message) => Self::Validation(message),
            DiscuitError::Config(message) => Self::Config(message),
            DiscuitError::Serialization(message) => Self::Parse(message),
        }
    }
}
