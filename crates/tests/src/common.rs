use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use server::db::AppState;
use server::repo::MemoryDirectory;
use std::sync::Arc;
use tower::ServiceExt;

/// Signing secret shared by every test in this crate.
pub const TEST_SECRET: &str = "integration-test-session-secret";

/// Demo catalog plus the accounts the dispatch tests need:
/// an authorized non-admin role, an authorized email with no user record,
/// and an admin record whose email is not on the allow-list.
pub fn test_directory() -> MemoryDirectory {
    MemoryDirectory::demo()
        .with_authorized("modeler@herbarium.test", None)
        .with_user(3, "modeler@herbarium.test", "modeler")
        .with_authorized("ghost@herbarium.test", None)
        .with_user(9, "outsider@elsewhere.test", "admin")
}

/// Router over the seeded in-memory directory.
pub fn test_app() -> Router {
    test_app_with(test_directory())
}

/// Router over a caller-supplied directory, behind the session middleware.
pub fn test_app_with(directory: MemoryDirectory) -> Router {
    std::env::set_var("SESSION_SECRET", TEST_SECRET);

    let state = AppState::new(Arc::new(directory));
    server::rest::api_router()
        .layer(middleware::from_fn(
            server::auth::middleware::session_middleware,
        ))
        .with_state(state)
}

/// Mint a valid session token for the given user.
pub fn session_token(user_id: i64, email: &str) -> String {
    std::env::set_var("SESSION_SECRET", TEST_SECRET);
    server::auth::jwt::create_session_token(user_id, email).expect("Failed to mint token")
}

/// GET without any session.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    (status, body)
}

/// GET carrying `token` in the session cookie.
pub async fn get_with_cookie(app: &Router, uri: &str, token: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(
            header::COOKIE,
            format!("{}={}", server::auth::cookies::SESSION_COOKIE, token),
        )
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET carrying `token` as a Bearer header.
pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    (status, body)
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}
