//! Admin console handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::{json, Value};
use tijara_application::use_cases::{admin_login, logout, Credentials, LoginOutcome};
use tijara_domain::{NewTenant, Tenant, TenantListPage, TenantListQuery};

use crate::error::{EdgeError, GENERIC_ERROR_MESSAGE};
use crate::state::AppState;

use super::bound_gateway;

/// Admin login page data; reads and clears the one-shot message.
pub async fn login_page(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.flash.take().await }))
}

/// Admin login submission.
pub async fn login(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Response {
    let (gateway, _navigator) = bound_gateway(&state, "/admin/login");
    match admin_login(&gateway, &state.session, &credentials).await {
        Ok(LoginOutcome::Authenticated { redirect }) => Redirect::to(&redirect).into_response(),
        Ok(LoginOutcome::Rejected { message }) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": message })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "admin login failed to commit session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": GENERIC_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// Admin landing page; a static menu, no backend call.
pub async fn home() -> Json<Value> {
    Json(json!({
        "title": "لوحة التحكم الرئيسية",
        "sections": [{ "title": "الشركات", "href": "/admin/tenants" }],
    }))
}

/// Paged tenant list.
pub async fn tenants_index(
    State(state): State<AppState>,
    Query(query): Query<TenantListQuery>,
) -> Result<Json<TenantListPage>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, "/admin/tenants");
    gateway
        .admin_tenants(&query)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Single tenant detail.
pub async fn tenant_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tenant>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/admin/tenants/{id}"));
    gateway
        .admin_tenant(&id)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// New-tenant form page.
pub async fn tenant_new_page() -> Json<Value> {
    Json(json!({}))
}

/// Creates a tenant, then lands back on the list.
pub async fn tenant_create(
    State(state): State<AppState>,
    Form(tenant): Form<NewTenant>,
) -> Result<Redirect, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, "/admin/tenants/new");
    gateway
        .create_tenant(&tenant)
        .await
        .map(|_| Redirect::to("/admin/tenants"))
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Signs the operator out of everything and lands on the admin login.
pub async fn sign_out(State(state): State<AppState>) -> Result<Redirect, EdgeError> {
    match logout(&state.session, "/admin").await {
        Ok(target) => Ok(Redirect::to(&target)),
        Err(err) => {
            tracing::error!(%err, "logout failed");
            Err(EdgeError::internal())
        }
    }
}
