//! Route guard middleware.
//!
//! Runs once per incoming navigation, before any handler. The decision is
//! the pure guard function over the request path and the presence of the
//! two session cookies in the edge jar; presence is the only thing
//! checked, never token contents.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tijara_domain::route::{guard, GuardDecision};
use tijara_domain::TokenScope;

use crate::state::AppState;

/// Applies the guard decision table to one navigation request.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let has_admin = state.jar.present(TokenScope::Admin.cookie_name()).await;
    let has_tenant = state.jar.present(TokenScope::Tenant.cookie_name()).await;

    match guard(&path, has_admin, has_tenant) {
        GuardDecision::Continue => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(%path, %target, "guard redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}
