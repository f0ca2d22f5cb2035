//! Post, Reaction, and Search API Tests
//!
//! Exercises boundary validation on the post endpoints. Persistence-level
//! behavior (pagination contents, reaction counters) is covered by unit
//! tests next to the repositories and services.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_create_post_with_empty_title_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/posts/",
            r#"{"title": "", "content": "body", "author": "alice"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_list_posts_rejects_zero_limit() {
    let app = TestApp::new();

    let response = app.get("/posts/?limit=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_posts_rejects_oversized_limit() {
    let app = TestApp::new();

    let response = app.get("/posts/?limit=101").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_posts_rejects_unknown_order() {
    let app = TestApp::new();

    let response = app.get("/posts/?order=sideways").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_post_with_non_numeric_id_fails() {
    let app = TestApp::new();

    let response = app.get("/posts/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_without_query_fails() {
    let app = TestApp::new();

    let response = app.get("/search/").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_with_empty_query_fails() {
    let app = TestApp::new();

    let response = app.get("/search/?query=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_react_with_empty_reaction_type_fails() {
    let app = TestApp::new();

    let response = app
        .post_json("/posts/1/react", r#"{"reaction_type": ""}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreact_with_empty_reaction_type_fails() {
    let app = TestApp::new();

    let response = app
        .delete_json("/posts/1/react", r#"{"reaction_type": ""}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_without_post_id_fails() {
    let app = TestApp::new();

    let response = app.post_json("/upload/", "{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
