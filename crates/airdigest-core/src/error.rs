//! Unified error types for airdigest.

use thiserror::Error;

/// Result type alias using DigestError.
pub type Result<T> = std::result::Result<T, DigestError>;

#[derive(Error, Debug)]
pub enum DigestError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Per-channel fetch errors, recovered by omission at the aggregator
    #[error("Fetch failed for {channel}: {reason}")]
    Fetch { channel: String, reason: String },

    /// Every configured channel failed; nothing to format.
    #[error("no schedule data returned for any channel")]
    AggregateEmpty,

    // Notification errors
    #[error("Notification dispatch failed: {0}")]
    Dispatch(String),

    // General errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("{0}")]
    Other(String),
}

impl DigestError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn fetch(channel: &str, reason: impl Into<String>) -> Self {
        Self::Fetch {
            channel: channel.to_string(),
            reason: reason.into(),
        }
    }

    pub fn dispatch(msg: impl Into<String>) -> Self {
        Self::Dispatch(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DigestError::fetch("Channel 1", "HTTP 503");
        assert!(err.to_string().contains("Channel 1"));
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_error_constructors() {
        let e1 = DigestError::config("test");
        assert!(matches!(e1, DigestError::Config(_)));

        let e2 = DigestError::fetch("Channel 2", "test");
        assert!(matches!(e2, DigestError::Fetch { .. }));

        let e3 = DigestError::dispatch("test");
        assert!(matches!(e3, DigestError::Dispatch(_)));

        let e4 = DigestError::http("test");
        assert!(matches!(e4, DigestError::Http(_)));
    }
}
