//! Application error types

use thiserror::Error;

use crate::ports::{AuthGatewayError, CredentialError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A credential-store operation failed.
    #[error("credential store error: {0}")]
    Credentials(#[from] CredentialError),

    /// The login gateway reported a failure.
    #[error("gateway error: {0}")]
    Gateway(#[from] AuthGatewayError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
