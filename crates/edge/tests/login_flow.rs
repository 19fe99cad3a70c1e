//! End-to-end session bootstrap and recovery tests.
//!
//! A fake backend is served on an ephemeral port; the portal router runs
//! against it through the real gateway client, so these tests cover token
//! exchange, dual-location commit, bearer attachment, and the global
//! 401 recovery path.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::Json;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tijara_application::session::AUTH_FAILURE_MESSAGE;
use tijara_domain::{SessionToken, TokenScope};
use tijara_edge::{router, AppState};
use tijara_infrastructure::GatewayConfig;
use tower::ServiceExt;

const GOOD_PASSWORD: &str = "hunter2";
const ISSUED_TOKEN: &str = "tenant-tok-1";

async fn tenant_login(Json(body): Json<Value>) -> Response {
    if body.get("password").and_then(Value::as_str) == Some(GOOD_PASSWORD) {
        Json(json!({ "access_token": ISSUED_TOKEN })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "بيانات الدخول غير صحيحة" })),
        )
            .into_response()
    }
}

async fn dashboard(headers: HeaderMap) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if bearer == Some(&format!("Bearer {ISSUED_TOKEN}")) {
        Json(json!({ "customersCount": 3 })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response()
    }
}

/// Echoes the authorization header back as the sole customer's id.
async fn customers(headers: HeaderMap) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none");
    Json(json!([{ "id": bearer, "name": "echo" }])).into_response()
}

/// Always rejects, exercising the recovery path.
async fn invoices() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response()
}

async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/auth/login", post(tenant_login))
        .route("/dashboard", get(dashboard))
        .route("/customers", get(customers))
        .route("/invoices", get(invoices));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn portal_state(dir: &std::path::Path, backend: SocketAddr) -> AppState {
    let config = GatewayConfig::resolve(Some(&format!("http://{backend}"))).unwrap();
    AppState::new(&config, dir).unwrap()
}

async fn send_get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_form(app: axum::Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_successful_login_commits_token_and_opens_dashboard() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let state = portal_state(dir.path(), backend);

    let response = send_form(
        router(state.clone()),
        "/t/acme/login",
        &format!("email=owner%40acme.example&password={GOOD_PASSWORD}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/t/acme/dashboard"
    );

    // Token landed in both locations.
    let stored = state
        .session
        .store()
        .get_token(TokenScope::Tenant)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.as_str(), ISSUED_TOKEN);
    assert!(state.jar.present("tenant_token").await);

    // The dashboard loads with the token attached.
    let response = send_get(router(state), "/t/acme/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["customersCount"], 3);
}

#[tokio::test]
async fn test_rejected_login_surfaces_backend_message_without_commit() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let state = portal_state(dir.path(), backend);

    let response = send_form(
        router(state.clone()),
        "/t/acme/login",
        "email=owner%40acme.example&password=wrong",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "بيانات الدخول غير صحيحة");
    assert!(state
        .session
        .store()
        .get_token(TokenScope::Tenant)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_admin_token_takes_precedence_on_outbound_requests() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let state = portal_state(dir.path(), backend);
    state
        .session
        .commit(TokenScope::Admin, SessionToken::new("admin-tok"))
        .await
        .unwrap();
    state
        .session
        .commit(TokenScope::Tenant, SessionToken::new("tenant-tok"))
        .await
        .unwrap();

    let response = send_get(router(state), "/t/acme/customers").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["id"], "Bearer admin-tok");
}

#[tokio::test]
async fn test_unauthorized_response_clears_sessions_and_redirects_with_message() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let state = portal_state(dir.path(), backend);
    state
        .session
        .commit(TokenScope::Admin, SessionToken::new("a"))
        .await
        .unwrap();
    state
        .session
        .commit(TokenScope::Tenant, SessionToken::new(ISSUED_TOKEN))
        .await
        .unwrap();

    // The backend rejects the invoice list; the portal clears both
    // sessions and bounces to this tenant's login.
    let response = send_get(router(state.clone()), "/t/acme/invoices").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/t/acme/login"
    );

    for scope in TokenScope::ALL {
        assert!(state
            .session
            .store()
            .get_token(scope)
            .await
            .unwrap()
            .is_none());
        assert!(!state.jar.present(scope.cookie_name()).await);
    }

    // The stashed message shows once on the login page, then clears.
    let body = json_body(send_get(router(state.clone()), "/t/acme/login").await).await;
    assert_eq!(body["message"], AUTH_FAILURE_MESSAGE);
    let body = json_body(send_get(router(state), "/t/acme/login").await).await;
    assert_eq!(body["message"], Value::Null);
}
