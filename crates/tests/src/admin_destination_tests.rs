use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

const URI: &str = "/api/admin/destination";

#[tokio::test]
async fn no_session_is_unauthorized() {
    let app = common::test_app();

    let (status, body) = common::get(&app, URI).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "outcome": "unauthorized" }));
}

#[tokio::test]
async fn admin_is_sent_to_management() {
    let app = common::test_app();
    let token = common::session_token(1, "curator@herbarium.test");

    let (status, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "outcome": "redirect", "to": "/admin/management" }));
}

#[tokio::test]
async fn student_is_sent_to_student_view() {
    let app = common::test_app();
    let token = common::session_token(2, "student@herbarium.test");

    let (_, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(body, json!({ "outcome": "redirect", "to": "/admin/student" }));
}

#[tokio::test]
async fn email_off_the_allow_list_is_unauthorized() {
    let app = common::test_app();
    // User 9 holds the admin role but its email was never authorized.
    let token = common::session_token(9, "outsider@elsewhere.test");

    let (_, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(body["outcome"], "unauthorized");
}

#[tokio::test]
async fn other_role_is_unauthorized() {
    let app = common::test_app();
    let token = common::session_token(3, "modeler@herbarium.test");

    let (_, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(body["outcome"], "unauthorized");
}

#[tokio::test]
async fn authorized_email_without_record_is_unauthorized() {
    let app = common::test_app();
    let token = common::session_token(404, "ghost@herbarium.test");

    let (_, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(body["outcome"], "unauthorized");
}

#[tokio::test]
async fn bearer_token_is_accepted() {
    let app = common::test_app();
    let token = common::session_token(1, "curator@herbarium.test");

    let (status, body) = common::get_with_bearer(&app, URI, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["to"], "/admin/management");
}

#[tokio::test]
async fn unavailable_directory_still_answers_unauthorized() {
    let app = common::test_app_with(server::repo::MemoryDirectory::unavailable());
    let token = common::session_token(1, "curator@herbarium.test");

    let (status, _, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "unauthorized");
}
