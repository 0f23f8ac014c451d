//! Chat-completion errors

use thiserror::Error;

use crate::retry::Retryable;

/// Errors that can occur during a chat-completion call
#[derive(Debug, Error)]
pub enum ChatError {
    /// Failed to connect to the completion server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the completion server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response parsing failed or no choices returned
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during completion
    #[error("Completion timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

impl Retryable for ChatError {
    // The completion call is retried on any failure; the attempt cap is
    // what bounds the loop.
    fn is_retryable(&self) -> bool {
        true
    }
}
