use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn prefix_matches_specimen_names() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/suggestions?q=qu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Quercus alba"]));
}

#[tokio::test]
async fn match_is_case_insensitive_and_shortest_first() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/suggestions?q=A").await;
    assert_eq!(
        body,
        json!([
            "Quercus alba",
            "Cypripedium acaule",
            "Sarracenia purpurea",
            "Phalaenopsis amabilis"
        ])
    );
}

#[tokio::test]
async fn blank_query_returns_nothing() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/suggestions?q=%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = common::get(&app, "/api/suggestions").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn overlong_query_is_rejected() {
    let app = common::test_app();
    let uri = format!("/api/suggestions?q={}", "x".repeat(101));

    let (status, body) = common::get(&app, &uri).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]["q"].is_string());
}

#[tokio::test]
async fn directory_failure_is_a_server_error() {
    let app = common::test_app_with(server::repo::MemoryDirectory::unavailable());

    let (status, body) = common::get(&app, "/api/suggestions?q=qu").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "DatabaseError");
}
