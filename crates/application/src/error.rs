//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Speech-to-text failed
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Chat completion failed
    #[error("Chat completion error: {0}")]
    ChatCompletion(String),

    /// Portrait generation failed
    #[error("Image generation error: {0}")]
    ImageGeneration(String),

    /// Rate limit exceeded upstream
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Operation invalid for the given input
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
