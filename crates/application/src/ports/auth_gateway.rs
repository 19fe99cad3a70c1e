//! Auth gateway port
//!
//! Abstracts the backend login endpoints so the login use cases stay
//! independent of the HTTP client implementation.

use async_trait::async_trait;
use tijara_domain::TokenScope;

use crate::use_cases::Credentials;

/// Errors a login exchange can produce.
#[derive(Debug, thiserror::Error)]
pub enum AuthGatewayError {
    /// The backend rejected the credentials; `message` is the backend's
    /// own description when the payload carried one.
    #[error("login rejected")]
    Rejected {
        /// Backend-provided message, if any.
        message: Option<String>,
    },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Port for the scope-specific login endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for the scope's login response payload.
    ///
    /// Returns the raw JSON payload; the caller tolerates historical
    /// token-field naming drift, so no typed response is imposed here.
    async fn login(
        &self,
        scope: TokenScope,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, AuthGatewayError>;
}
