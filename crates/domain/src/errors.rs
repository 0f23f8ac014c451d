//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A required field is missing from an input document
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Input document could not be parsed
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl DomainError {
    /// Create a validation error from any displayable cause
    pub fn validation(cause: impl std::fmt::Display) -> Self {
        Self::ValidationError(cause.to_string())
    }
}
