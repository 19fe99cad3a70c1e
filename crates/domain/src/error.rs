//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tenant slug contains characters outside its allowed alphabet.
    #[error("invalid tenant slug: {0}")]
    InvalidSlug(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
