//! Dual-location credential store.

use async_trait::async_trait;
use tijara_application::ports::{CredentialError, CredentialStore};
use tijara_domain::{SessionCookie, SessionToken, TokenScope};

use super::{EdgeCookieJar, FileTokenRepository};

/// The "persist to both, clear from both" credential store.
///
/// Every write lands in the durable file and in the cookie jar; every
/// clear removes both scopes from both locations. The redundancy bridges
/// client-side logic (which reads the durable file) and edge routing
/// (which reads the jar). The two locations expire independently: only
/// the jar honors `max-age`, so near the 24-hour mark the jar can go
/// empty while the file still answers.
#[derive(Debug, Clone)]
pub struct DualCredentialStore {
    durable: FileTokenRepository,
    jar: EdgeCookieJar,
}

impl DualCredentialStore {
    /// Composes the two locations.
    #[must_use]
    pub const fn new(durable: FileTokenRepository, jar: EdgeCookieJar) -> Self {
        Self { durable, jar }
    }

    /// The cookie jar consulted by edge routing.
    #[must_use]
    pub const fn jar(&self) -> &EdgeCookieJar {
        &self.jar
    }
}

#[async_trait]
impl CredentialStore for DualCredentialStore {
    async fn set_token(
        &self,
        scope: TokenScope,
        token: SessionToken,
    ) -> Result<(), CredentialError> {
        self.durable.store(scope, token.as_str()).await?;
        self.jar
            .apply(&SessionCookie::session(scope, token.as_str()))
            .await;
        Ok(())
    }

    async fn get_token(&self, scope: TokenScope) -> Result<Option<SessionToken>, CredentialError> {
        Ok(self.durable.fetch(scope).await?.map(SessionToken::new))
    }

    async fn clear_all(&self) -> Result<(), CredentialError> {
        self.durable.clear().await?;
        for scope in TokenScope::ALL {
            self.jar.apply(&SessionCookie::removal(scope)).await;
        }
        Ok(())
    }
}
