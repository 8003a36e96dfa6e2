//! Error types used throughout the client
//!
//! `GeekbotError` is split into three families:
//! - API failures: the server answered with a non-2xx status. Each variant
//!   carries the status code and the message derived from the response.
//! - Decode/encode failures: the payload did not match the expected shape.
//! - Transport failures: the request never produced an HTTP response.
//!
//! Retry decisions are driven by [`GeekbotError::is_retryable`] and
//! [`GeekbotError::category`].

use thiserror::Error;

/// Coarse classification of a [`GeekbotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 401 - credential rejected
    Authentication,
    /// 404
    NotFound,
    /// 422 - request rejected by server-side validation
    Validation,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// Any other non-2xx status
    Api,
    /// Response body did not match the expected shape
    Decode,
    /// Request body could not be serialised
    Encode,
    /// Connection, DNS, reset or timeout
    Transport,
    /// Configuration or local argument problems
    Config,
}

/// Main error type for the Geekbot client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeekbotError {
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Not found ({status}): {message}")]
    NotFound { status: u16, message: String },

    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Rate limit exceeded ({status}): {message}")]
    RateLimit { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GeekbotError {
    /// Build the API-family error for a non-success HTTP status.
    ///
    /// 401 → `Auth`, 404 → `NotFound`, 422 → `Validation`, 429 → `RateLimit`,
    /// ≥500 → `Server`, anything else → `Api`.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Auth { status, message },
            404 => Self::NotFound { status, message },
            422 => Self::Validation { status, message },
            429 => Self::RateLimit { status, message },
            s if s >= 500 => Self::Server { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// HTTP status for API-family errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Server { status, .. }
            | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Auth { .. } => ErrorCategory::Authentication,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::RateLimit { .. } => ErrorCategory::RateLimit,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Api { .. } => ErrorCategory::Api,
            Self::Decode(_) => ErrorCategory::Decode,
            Self::Encode(_) => ErrorCategory::Encode,
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Config(_) | Self::InvalidInput(_) => ErrorCategory::Config,
        }
    }

    /// True when the server produced a non-2xx response.
    pub fn is_api_error(&self) -> bool {
        self.status().is_some()
    }

    /// Whether a fresh attempt of the same request may succeed.
    ///
    /// Only server errors, rate limiting and transport failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Server | ErrorCategory::RateLimit | ErrorCategory::Transport
        )
    }
}

impl From<serde_json::Error> for GeekbotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for Geekbot operations
pub type Result<T> = std::result::Result<T, GeekbotError>;
