//! Gateway error types.

use thiserror::Error;
use tijara_application::ports::CredentialError;

/// Errors produced by the gateway client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request's authorization (401/403). The
    /// inbound interceptor has already cleared the credential store and,
    /// inside a portal area, recorded a login redirect.
    #[error("authorization rejected ({status})")]
    Unauthorized {
        /// HTTP status, 401 or 403.
        status: u16,
        /// Backend-provided message, if the rejection payload carried one.
        message: Option<String>,
    },

    /// Any other non-success response, passed through to the caller.
    #[error("API error ({status})")]
    Api {
        /// HTTP status.
        status: u16,
        /// Backend-provided message, if the payload carried one.
        message: Option<String>,
    },

    /// The response body did not decode as the expected payload.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The credential store failed while attaching or clearing tokens.
    #[error("credential store error: {0}")]
    Credentials(#[from] CredentialError),
}

impl GatewayError {
    /// Whether this is a backend not-found response, surfaced per page as
    /// a not-found view.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Backend-provided message carried by the error, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
