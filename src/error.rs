// src/error.rs

//! Unified error handling for the feed pipeline.

use thiserror::Error;

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Unified application error type.
///
/// The first three variants form the fetch taxonomy: exactly one of them
/// (or a record list) is delivered per fetch attempt, and none is retried
/// internally.
#[derive(Error, Debug)]
pub enum FeedError {
    /// No response was obtained at all (DNS, connection refused, timeout).
    /// Wraps the underlying cause for caller inspection.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response arrived but its HTTP status is outside [200, 399].
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be parsed as well-formed XML.
    #[error("feed parse error: {0}")]
    Parse(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}

impl FeedError {
    /// Create a transport error from any underlying cause.
    pub fn transport(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(cause))
    }

    /// Create a parse error.
    pub fn parse(message: impl std::fmt::Display) -> Self {
        Self::Parse(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code() {
        match FeedError::Status(400) {
            FeedError::Status(code) => assert_eq!(code, 400),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn parse_error_message() {
        let err = FeedError::parse("unexpected EOF");
        assert_eq!(err.to_string(), "feed parse error: unexpected EOF");
    }
}
