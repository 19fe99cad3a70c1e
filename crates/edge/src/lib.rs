//! Tijara Edge - Portal server
//!
//! Builds the route surface, applies the guard middleware in front of it,
//! and serves the portal. Every navigation passes the guard before any
//! handler runs.

pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use config::EdgeConfig;
pub use state::AppState;

/// Builds the portal router with the guard applied to every route.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/admin", get(handlers::admin::home))
        .route(
            "/admin/login",
            get(handlers::admin::login_page).post(handlers::admin::login),
        )
        .route("/admin/logout", post(handlers::admin::sign_out))
        .route("/admin/tenants", get(handlers::admin::tenants_index))
        .route(
            "/admin/tenants/new",
            get(handlers::admin::tenant_new_page).post(handlers::admin::tenant_create),
        )
        .route("/admin/tenants/{id}", get(handlers::admin::tenant_detail))
        .route("/t/{slug}", get(handlers::tenant::landing))
        .route(
            "/t/{slug}/login",
            get(handlers::tenant::login_page).post(handlers::tenant::login),
        )
        .route("/t/{slug}/logout", post(handlers::tenant::sign_out))
        .route("/t/{slug}/dashboard", get(handlers::tenant::dashboard))
        .route(
            "/t/{slug}/customers",
            get(handlers::tenant::customers_index).post(handlers::tenant::customers_create),
        )
        .route("/t/{slug}/invoices", get(handlers::tenant::invoices_index))
        .route(
            "/t/{slug}/invoices/new",
            get(handlers::tenant::invoice_new_page).post(handlers::tenant::invoice_create),
        )
        .route(
            "/t/{slug}/invoices/{id}",
            get(handlers::tenant::invoice_detail),
        )
        .route(
            "/t/{slug}/payments",
            get(handlers::tenant::payments_index).post(handlers::tenant::payments_create),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::route_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// Binds and serves the portal until shutdown.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "portal edge listening");
    axum::serve(listener, router(state)).await
}
