//! Field validation behavior of the create and update endpoints.
//!
//! Invalid payloads must be rejected with per-field messages before any
//! store interaction, so nothing is persisted or mutated.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};

fn field_messages(json: &serde_json::Value) -> Vec<(String, String)> {
    json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                f["field"].as_str().unwrap().to_string(),
                f["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn create_with_empty_title_returns_400_and_persists_nothing() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/bookmarks",
        serde_json::json!({"title": "", "url": "https://example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        field_messages(&json),
        vec![("title".to_string(), "Title is required".to_string())]
    );

    let json = body_json(get(app, "/api/bookmarks").await).await;
    assert_eq!(json["total_items"], 0);
}

#[tokio::test]
async fn create_with_empty_url_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/bookmarks",
        serde_json::json!({"title": "No URL", "url": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        field_messages(&json),
        vec![("url".to_string(), "URL is required".to_string())]
    );
}

#[tokio::test]
async fn create_with_both_fields_empty_reports_both() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/bookmarks",
        serde_json::json!({"title": "", "url": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields: Vec<_> = field_messages(&json);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].0, "title");
    assert_eq!(fields[1].0, "url");
}

#[tokio::test]
async fn create_with_missing_title_behaves_like_empty() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/bookmarks",
        serde_json::json!({"url": "https://example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        field_messages(&json),
        vec![("title".to_string(), "Title is required".to_string())]
    );

    let json = body_json(get(app, "/api/bookmarks").await).await;
    assert_eq!(json["total_items"], 0);
}

#[tokio::test]
async fn update_with_missing_url_behaves_like_empty() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/bookmarks",
            serde_json::json!({"title": "Stay Put", "url": "https://example.com"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/bookmarks/{id}"),
        serde_json::json!({"title": "New Title"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        field_messages(&json),
        vec![("url".to_string(), "URL is required".to_string())]
    );
}

#[tokio::test]
async fn whitespace_only_title_counts_as_empty() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/bookmarks",
        serde_json::json!({"title": "   ", "url": "https://example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_empty_title_returns_400_without_mutating() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/bookmarks",
            serde_json::json!({"title": "Keep Me", "url": "https://example.com"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/bookmarks/{id}"),
        serde_json::json!({"title": "", "url": "https://example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Record is unchanged, updated_at still unset.
    let json = body_json(get(app, &format!("/api/bookmarks/{id}")).await).await;
    assert_eq!(json["title"], "Keep Me");
    assert!(json["updated_at"].is_null());
}
