//! The injectable session context.

use std::sync::Arc;

use tijara_domain::{SessionToken, TokenScope};

use crate::ports::{CredentialError, CredentialStore};

/// Session state handed to the gateway client at construction.
///
/// Rather than letting the request interceptor read storage keys out of
/// ambient global state, this object makes the two tokens an explicit
/// constructor dependency so the precedence rule has one home and a test
/// seam.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
}

impl SessionContext {
    /// Wraps a credential store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Token to attach to an outbound request, if any.
    ///
    /// Admin takes precedence when both scopes hold a token. This is a
    /// fixed tie-break: a single call cannot be authorized as both
    /// identities, and the admin console is the surface that may hold both.
    ///
    /// # Errors
    ///
    /// Propagates credential-store failures.
    pub async fn bearer_token(&self) -> Result<Option<SessionToken>, CredentialError> {
        for scope in TokenScope::ALL {
            if let Some(token) = self.store.get_token(scope).await? {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    /// Commits a freshly issued token for a scope (both locations).
    ///
    /// # Errors
    ///
    /// Propagates credential-store failures.
    pub async fn commit(
        &self,
        scope: TokenScope,
        token: SessionToken,
    ) -> Result<(), CredentialError> {
        self.store.set_token(scope, token).await
    }

    /// Destroys both scopes' sessions in both locations.
    ///
    /// # Errors
    ///
    /// Propagates credential-store failures.
    pub async fn sign_out(&self) -> Result<(), CredentialError> {
        self.store.clear_all().await
    }

    /// Whether a token is present for the scope.
    ///
    /// # Errors
    ///
    /// Propagates credential-store failures.
    pub async fn is_authenticated(&self, scope: TokenScope) -> Result<bool, CredentialError> {
        self.store.is_authenticated(scope).await
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
