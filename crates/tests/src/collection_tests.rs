use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common;

fn uids(body: &Value) -> Vec<&str> {
    body.as_array()
        .map(|rows| rows.iter().filter_map(|r| r["uid"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn contributors_are_distinct_and_sorted() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/contributors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "modeled_by": ["Jane Doe", "Luis Ortega"],
            "annotated_by": ["Ada Park", "Wen Li"]
        })
    );
}

#[tokio::test]
async fn no_term_lists_whole_catalog() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/collections").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(uids(&body), vec!["m-002", "m-001", "m-003", "m-004"]);
}

#[tokio::test]
async fn modeler_filter_is_exact() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/collections?modeler=Jane%20Doe").await;
    assert_eq!(uids(&body), vec!["m-002", "m-001"]);

    let (_, body) = common::get(&app, "/api/collections?modeler=Jane").await;
    assert_eq!(uids(&body), Vec::<&str>::new());
}

#[tokio::test]
async fn term_and_annotator_combine() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/collections?q=a&annotator=Ada%20Park").await;
    assert_eq!(uids(&body), vec!["m-001", "m-003"]);

    let (_, body) = common::get(&app, "/api/collections?q=quercus&annotator=Ada%20Park").await;
    assert_eq!(uids(&body), vec!["m-003"]);
}

#[tokio::test]
async fn empty_filters_mean_no_filter() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/collections?q=&modeler=&annotator=").await;
    assert_eq!(uids(&body).len(), 4);
}

#[tokio::test]
async fn unannotated_models_omit_annotator() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/collections?q=cypripedium").await;
    assert_eq!(body[0]["specimen_name"], "Cypripedium acaule");
    assert!(body[0].get("annotated_by").is_none());
}
