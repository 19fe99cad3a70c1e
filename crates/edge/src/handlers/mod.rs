//! Request handlers.
//!
//! Handlers return data, not markup; page rendering is out of scope for
//! this layer. Each handler that talks to the backend binds the shared
//! gateway to its own navigation context first, so an authorization
//! failure redirects relative to where the user actually is.

pub mod admin;
pub mod tenant;

use std::sync::Arc;

use axum::Json;
use serde_json::json;
use tijara_application::ports::RecordingNavigator;
use tijara_infrastructure::GatewayClient;

use crate::state::AppState;

/// Gateway clone bound to the current navigation path.
fn bound_gateway(state: &AppState, path: &str) -> (GatewayClient, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new(path));
    let gateway = state.gateway.with_navigator(navigator.clone());
    (gateway, navigator)
}

/// Public site root.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Tijara",
        "adminLogin": "/admin/login",
    }))
}
