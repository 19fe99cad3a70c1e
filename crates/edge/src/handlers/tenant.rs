//! Tenant portal handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::{json, Value};
use tijara_application::use_cases::{logout, tenant_login, Credentials, LoginOutcome};
use tijara_domain::{
    Customer, DashboardSummary, Invoice, NewCustomer, NewInvoice, NewPayment, Payment, Tenant,
    TenantSlug,
};

use crate::error::{EdgeError, GENERIC_ERROR_MESSAGE};
use crate::state::AppState;

use super::bound_gateway;

/// Public tenant landing page data; renders without a session.
pub async fn landing(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Tenant>, EdgeError> {
    let slug: TenantSlug = slug.parse().map_err(|_| EdgeError::not_found())?;
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}"));
    gateway
        .tenant_by_slug(&slug)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Tenant login page data; reads and clears the one-shot message.
pub async fn login_page(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.flash.take().await }))
}

/// Tenant login submission.
pub async fn login(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(credentials): Form<Credentials>,
) -> Response {
    let Ok(slug) = slug.parse::<TenantSlug>() else {
        return EdgeError::not_found().into_response();
    };
    let (gateway, _navigator) = bound_gateway(&state, &format!("/t/{slug}/login"));
    match tenant_login(&gateway, &state.session, &slug, &credentials).await {
        Ok(LoginOutcome::Authenticated { redirect }) => Redirect::to(&redirect).into_response(),
        Ok(LoginOutcome::Rejected { message }) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": message })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "tenant login failed to commit session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": GENERIC_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// Dashboard summary figures.
pub async fn dashboard(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DashboardSummary>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/dashboard"));
    gateway
        .dashboard_summary()
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Customer list.
pub async fn customers_index(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Customer>>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/customers"));
    gateway
        .customers()
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Creates a customer.
pub async fn customers_create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(customer): Json<NewCustomer>,
) -> Result<Json<Value>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/customers"));
    gateway
        .create_customer(&customer)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Invoice list.
pub async fn invoices_index(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Invoice>>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/invoices"));
    gateway
        .invoices()
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// New-invoice form page.
pub async fn invoice_new_page() -> Json<Value> {
    Json(json!({}))
}

/// Creates an invoice, then lands back on the list.
pub async fn invoice_create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(invoice): Json<NewInvoice>,
) -> Result<Redirect, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/invoices/new"));
    gateway
        .create_invoice(&invoice)
        .await
        .map(|_| Redirect::to(&format!("/t/{slug}/invoices")))
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Single invoice detail.
pub async fn invoice_detail(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Json<Invoice>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/invoices/{id}"));
    gateway
        .invoice(&id)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Payment list.
pub async fn payments_index(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Payment>>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/payments"));
    gateway
        .payments()
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Records a payment.
pub async fn payments_create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payment): Json<NewPayment>,
) -> Result<Json<Value>, EdgeError> {
    let (gateway, navigator) = bound_gateway(&state, &format!("/t/{slug}/payments"));
    gateway
        .create_payment(&payment)
        .await
        .map(Json)
        .map_err(|e| EdgeError::from_gateway(&navigator, &e))
}

/// Signs out and lands on this tenant's login page.
pub async fn sign_out(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Redirect, EdgeError> {
    match logout(&state.session, &format!("/t/{slug}/dashboard")).await {
        Ok(target) => Ok(Redirect::to(&target)),
        Err(err) => {
            tracing::error!(%err, "logout failed");
            Err(EdgeError::internal())
        }
    }
}
