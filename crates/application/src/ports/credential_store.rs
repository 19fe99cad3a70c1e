//! Credential store port
//!
//! Defines the interface for session-token persistence. The adapter writes
//! each token to two places at once (a durable key-value location and a
//! cookie mirror readable by edge routing) and clears both on sign-out.

use async_trait::async_trait;
use tijara_domain::{SessionToken, TokenScope};

/// Errors that can occur during credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// I/O error in the durable location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for the dual-location credential store.
///
/// Expiry is not this component's concern: the cookie mirror enforces its
/// own `max-age` passively, and the durable location never expires. The two
/// can therefore disagree near the 24-hour mark; the edge guard reads the
/// cookie, so a durable-only token just bounces to login.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Writes a scope's token to both locations.
    async fn set_token(
        &self,
        scope: TokenScope,
        token: SessionToken,
    ) -> Result<(), CredentialError>;

    /// Reads a scope's token from the durable location.
    async fn get_token(&self, scope: TokenScope) -> Result<Option<SessionToken>, CredentialError>;

    /// Removes both scopes' tokens from both locations, unconditionally.
    ///
    /// Deliberately scope-ambiguous: an authorization failure on one
    /// scope's request clears the sibling scope too.
    async fn clear_all(&self) -> Result<(), CredentialError>;

    /// Whether a token is present for the scope.
    async fn is_authenticated(&self, scope: TokenScope) -> Result<bool, CredentialError> {
        Ok(self.get_token(scope).await?.is_some())
    }
}
