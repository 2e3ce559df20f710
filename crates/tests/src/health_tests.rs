use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn health_reports_directory_connected() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["directory"], "connected");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_reports_unavailable_directory() {
    let app = common::test_app_with(server::repo::MemoryDirectory::unavailable());

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["directory"]
        .as_str()
        .unwrap_or_default()
        .starts_with("error:"));
}
