//! Authorization-failure recovery.
//!
//! Handled once at the transport boundary: any 401/403 response destroys
//! both sessions, and if the user is inside the admin or a tenant area, a
//! one-shot message is stashed and the navigation is forced back to that
//! area's login page. Pages never handle authorization failures
//! themselves.

use tijara_domain::route;

use crate::ports::{CredentialError, Navigator};
use crate::session::{FlashSlot, SessionContext};

/// Message shown once on the login page after a forced sign-out.
pub const AUTH_FAILURE_MESSAGE: &str = "غير مصرح لك بالوصول. يرجى تسجيل الدخول مرة أخرى.";

/// Runs the inbound-interceptor recovery for a 401/403 response.
///
/// Clears both scopes' tokens from both locations, then classifies the
/// navigator's current path: inside the admin area or a tenant area, a
/// message is stashed and a redirect to that area's login page is
/// recorded; anywhere else nothing is redirected and the caller receives
/// the rejection as-is.
///
/// Clearing both scopes on a single scope's failure is deliberate; the
/// handler cannot tell which scope the rejected request carried.
///
/// # Errors
///
/// Propagates credential-store failures from the clear.
pub async fn recover_unauthorized(
    session: &SessionContext,
    flash: &FlashSlot,
    navigator: &dyn Navigator,
) -> Result<(), CredentialError> {
    // TODO: clear only the failing scope once responses carry which scope
    // was rejected; today an admin 401 also logs the tenant session out.
    session.sign_out().await?;

    let current = navigator.current_path();
    if let Some(target) = route::login_redirect_for(&current) {
        tracing::debug!(location = %current, %target, "authorization failure, redirecting to login");
        flash.stash(AUTH_FAILURE_MESSAGE).await;
        navigator.redirect(&target);
    } else {
        tracing::debug!(location = %current, "authorization failure outside portal areas");
    }
    Ok(())
}
