use axum::http::header;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use server::auth::Session;

use crate::common;

const URI: &str = "/api/admin/destination";

fn expired_token(user_id: i64, email: &str) -> String {
    let issued = Utc::now() - Duration::hours(3);
    let session = Session {
        sub: user_id,
        email: email.to_string(),
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(1)).timestamp(),
        jti: None,
    };
    encode(
        &Header::default(),
        &session,
        &EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn expired_token_counts_as_no_session() {
    let app = common::test_app();
    let token = expired_token(1, "curator@herbarium.test");

    let (_, headers, body) = common::get_with_cookie(&app, URI, &token).await;
    assert_eq!(body["outcome"], "unauthorized");
    assert!(headers.get(header::SET_COOKIE).is_some());
}

#[tokio::test]
async fn garbage_token_counts_as_no_session_and_clears_cookie() {
    let app = common::test_app();

    let (_, headers, body) = common::get_with_cookie(&app, URI, "not-a-jwt").await;
    assert_eq!(body["outcome"], "unauthorized");

    let cleared = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cleared.starts_with("catalog_session="));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = common::test_app();
    let session = Session {
        sub: 1,
        email: "curator@herbarium.test".to_string(),
        iat: Utc::now().timestamp(),
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
        jti: None,
    };
    let forged = encode(
        &Header::default(),
        &session,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let (_, _, body) = common::get_with_cookie(&app, URI, &forged).await;
    assert_eq!(body["outcome"], "unauthorized");
}

#[tokio::test]
async fn valid_token_leaves_cookie_alone() {
    let app = common::test_app();
    let token = common::session_token(2, "student@herbarium.test");

    let (_, headers, _) = common::get_with_cookie(&app, URI, &token).await;
    assert!(headers.get(header::SET_COOKIE).is_none());
}
