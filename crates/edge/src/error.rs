//! Edge error responses.
//!
//! Authorization failures are handled globally: the gateway has already
//! cleared the store and recorded a login redirect by the time the error
//! reaches a handler, so the handler just emits that redirect. Every other
//! failure becomes a localized, user-visible message; nothing is fatal.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;
use tijara_application::ports::RecordingNavigator;
use tijara_application::session::AUTH_FAILURE_MESSAGE;
use tijara_infrastructure::GatewayError;

/// Shown for backend not-found responses.
pub const NOT_FOUND_MESSAGE: &str = "الشركة غير موجودة";

/// Generic fallback for network and unexpected backend failures.
pub const GENERIC_ERROR_MESSAGE: &str = "حدث خطأ غير متوقع";

/// A handler failure, rendered as a redirect or a localized message.
#[derive(Debug)]
pub struct EdgeError {
    redirect: Option<String>,
    status: StatusCode,
    message: String,
}

impl EdgeError {
    /// Maps a gateway failure, honoring any redirect the inbound
    /// interceptor recorded on the request's navigator.
    #[must_use]
    pub fn from_gateway(navigator: &RecordingNavigator, err: &GatewayError) -> Self {
        if let Some(target) = navigator.taken_redirect() {
            return Self {
                redirect: Some(target),
                status: StatusCode::TEMPORARY_REDIRECT,
                message: String::new(),
            };
        }

        let (status, message) = match err {
            GatewayError::Unauthorized { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::UNAUTHORIZED),
                AUTH_FAILURE_MESSAGE.to_string(),
            ),
            GatewayError::Api { .. } if err.is_not_found() => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            GatewayError::Api { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message
                    .clone()
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            ),
            _ => (StatusCode::BAD_GATEWAY, GENERIC_ERROR_MESSAGE.to_string()),
        };
        Self {
            redirect: None,
            status,
            message,
        }
    }

    /// A plain not-found error (bad slug, unknown resource).
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            redirect: None,
            status: StatusCode::NOT_FOUND,
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// A generic internal failure.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            redirect: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        if let Some(target) = self.redirect {
            return Redirect::temporary(&target).into_response();
        }
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}
