//! Explicit logout (session teardown).

use tijara_domain::route;

use crate::error::ApplicationResult;
use crate::session::SessionContext;

/// Destroys both sessions and returns the login page to land on.
///
/// The target follows the area the user logged out from: the admin login
/// under `/admin`, the tenant's login under `/t/{slug}`, and the site root
/// anywhere else.
///
/// # Errors
///
/// Propagates credential-store failures.
pub async fn logout(session: &SessionContext, current_path: &str) -> ApplicationResult<String> {
    session.sign_out().await?;
    Ok(route::login_redirect_for(current_path).unwrap_or_else(|| "/".to_string()))
}
