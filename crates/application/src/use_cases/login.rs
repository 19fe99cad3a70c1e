//! Login flows (session bootstrap).
//!
//! Two near-identical flows, admin and tenant: exchange credentials for a
//! token at the scope's login endpoint, commit it to the credential store,
//! and hand back the protected-area path to navigate into.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tijara_domain::{SessionToken, TenantSlug, TokenScope};

use crate::error::ApplicationResult;
use crate::ports::{AuthGateway, AuthGatewayError};
use crate::session::SessionContext;

/// Shown when the login response carried no recognizable token field.
pub const LOGIN_NO_TOKEN_MESSAGE: &str = "فشل تسجيل الدخول: لم يتم استلام رمز الوصول";

/// Shown when the login request failed without a backend message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "بيانات الدخول غير صحيحة";

/// Login form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Result of a login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token committed; navigate into the protected area.
    Authenticated {
        /// Path of the protected area to enter.
        redirect: String,
    },
    /// No token committed, no navigation; show the message.
    Rejected {
        /// Localized, user-visible message.
        message: String,
    },
}

/// First non-empty field among the token names the backend has used over
/// time. Tolerates field-naming drift without a contract change.
fn extract_token(payload: &Value) -> Option<SessionToken> {
    ["accessToken", "access_token", "token"]
        .into_iter()
        .filter_map(|field| payload.get(field).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(SessionToken::new)
}

async fn login(
    gateway: &dyn AuthGateway,
    session: &SessionContext,
    scope: TokenScope,
    credentials: &Credentials,
    redirect: String,
) -> ApplicationResult<LoginOutcome> {
    match gateway.login(scope, credentials).await {
        Ok(payload) => match extract_token(&payload) {
            Some(token) => {
                tracing::info!(%scope, token = %token.preview(), "login succeeded");
                session.commit(scope, token).await?;
                Ok(LoginOutcome::Authenticated { redirect })
            }
            None => Ok(LoginOutcome::Rejected {
                message: LOGIN_NO_TOKEN_MESSAGE.to_string(),
            }),
        },
        Err(AuthGatewayError::Rejected { message }) => Ok(LoginOutcome::Rejected {
            message: message.unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string()),
        }),
        Err(AuthGatewayError::Transport(reason)) => {
            tracing::warn!(%scope, %reason, "login transport failure");
            Ok(LoginOutcome::Rejected {
                message: LOGIN_FALLBACK_MESSAGE.to_string(),
            })
        }
    }
}

/// Admin console login; lands on `/admin`.
///
/// # Errors
///
/// Returns an error only if committing the token to the credential store
/// fails; login rejections are part of [`LoginOutcome`].
pub async fn admin_login(
    gateway: &dyn AuthGateway,
    session: &SessionContext,
    credentials: &Credentials,
) -> ApplicationResult<LoginOutcome> {
    login(
        gateway,
        session,
        TokenScope::Admin,
        credentials,
        "/admin".to_string(),
    )
    .await
}

/// Tenant portal login; lands on the tenant's dashboard.
///
/// # Errors
///
/// Returns an error only if committing the token to the credential store
/// fails; login rejections are part of [`LoginOutcome`].
pub async fn tenant_login(
    gateway: &dyn AuthGateway,
    session: &SessionContext,
    slug: &TenantSlug,
    credentials: &Credentials,
) -> ApplicationResult<LoginOutcome> {
    login(
        gateway,
        session,
        TokenScope::Tenant,
        credentials,
        format!("/t/{slug}/dashboard"),
    )
    .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::sync::RwLock;

    use crate::ports::{CredentialError, CredentialStore};

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        tokens: RwLock<std::collections::HashMap<TokenScope, SessionToken>>,
    }

    #[async_trait]
    impl CredentialStore for MemoryStore {
        async fn set_token(
            &self,
            scope: TokenScope,
            token: SessionToken,
        ) -> Result<(), CredentialError> {
            self.tokens.write().await.insert(scope, token);
            Ok(())
        }

        async fn get_token(
            &self,
            scope: TokenScope,
        ) -> Result<Option<SessionToken>, CredentialError> {
            Ok(self.tokens.read().await.get(&scope).cloned())
        }

        async fn clear_all(&self) -> Result<(), CredentialError> {
            self.tokens.write().await.clear();
            Ok(())
        }
    }

    /// Gateway returning a canned response.
    struct CannedGateway(Result<Value, AuthGatewayError>);

    #[async_trait]
    impl AuthGateway for CannedGateway {
        async fn login(
            &self,
            _scope: TokenScope,
            _credentials: &Credentials,
        ) -> Result<Value, AuthGatewayError> {
            match &self.0 {
                Ok(value) => Ok(value.clone()),
                Err(AuthGatewayError::Rejected { message }) => Err(AuthGatewayError::Rejected {
                    message: message.clone(),
                }),
                Err(AuthGatewayError::Transport(reason)) => {
                    Err(AuthGatewayError::Transport(reason.clone()))
                }
            }
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "owner@acme.example".to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn session() -> SessionContext {
        SessionContext::new(Arc::new(MemoryStore::default()))
    }

    #[tokio::test]
    async fn test_access_token_field_commits_and_redirects() {
        let gateway = CannedGateway(Ok(json!({"accessToken": "X"})));
        let session = session();

        let outcome = admin_login(&gateway, &session, &credentials())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                redirect: "/admin".to_string()
            }
        );
        let stored = session
            .store()
            .get_token(TokenScope::Admin)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.as_str(), "X");
    }

    #[tokio::test]
    async fn test_snake_case_and_bare_token_fields_accepted() {
        for payload in [json!({"access_token": "Y"}), json!({"token": "Z"})] {
            let gateway = CannedGateway(Ok(payload));
            let outcome = admin_login(&gateway, &session(), &credentials())
                .await
                .unwrap();
            assert!(matches!(outcome, LoginOutcome::Authenticated { .. }));
        }
    }

    #[tokio::test]
    async fn test_empty_payload_rejects_without_commit() {
        let gateway = CannedGateway(Ok(json!({})));
        let session = session();

        let outcome = admin_login(&gateway, &session, &credentials())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: LOGIN_NO_TOKEN_MESSAGE.to_string()
            }
        );
        assert!(!session
            .is_authenticated(TokenScope::Admin)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_empty_token_value_is_treated_as_absent() {
        let gateway = CannedGateway(Ok(json!({"accessToken": "", "token": "fallback"})));
        let session = session();

        let outcome = admin_login(&gateway, &session, &credentials())
            .await
            .unwrap();

        assert!(matches!(outcome, LoginOutcome::Authenticated { .. }));
        let stored = session
            .store()
            .get_token(TokenScope::Admin)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.as_str(), "fallback");
    }

    #[tokio::test]
    async fn test_backend_message_is_surfaced() {
        let gateway = CannedGateway(Err(AuthGatewayError::Rejected {
            message: Some("الحساب موقوف".to_string()),
        }));

        let outcome = admin_login(&gateway, &session(), &credentials())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: "الحساب موقوف".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fixed_fallback() {
        let gateway = CannedGateway(Err(AuthGatewayError::Transport(
            "connection refused".to_string(),
        )));

        let outcome = admin_login(&gateway, &session(), &credentials())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: LOGIN_FALLBACK_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_tenant_login_lands_on_dashboard() {
        let gateway = CannedGateway(Ok(json!({"token": "T"})));
        let session = session();
        let slug: TenantSlug = "acme".parse().unwrap();

        let outcome = tenant_login(&gateway, &session, &slug, &credentials())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                redirect: "/t/acme/dashboard".to_string()
            }
        );
        assert!(session
            .is_authenticated(TokenScope::Tenant)
            .await
            .unwrap());
    }
}
