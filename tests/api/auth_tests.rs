//! Authentication API Tests
//!
//! Exercises boundary validation and the bearer-token middleware. Flows
//! that need a live database (actual registration, login round-trips) are
//! covered by unit tests of the token/password primitives instead.

use axum::http::StatusCode;

use blog_server::application::services::create_token;
use blog_server::config::JwtSettings;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_protected_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get("/protected/").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_non_bearer_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .get_with_header("/protected/", "Basic dXNlcjpwYXNz")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_garbage_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get_auth("/protected/", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_protected_with_expired_token_is_unauthorized() {
    let app = TestApp::new();

    // Signed with the right secret, but already expired
    let expired_settings = JwtSettings {
        access_token_expiry_minutes: -5,
        ..app.settings.jwt.clone()
    };
    let token = create_token("alice@example.com", &expired_settings).unwrap();

    let response = app.get_auth("/protected/", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Token expired");
}

#[tokio::test]
async fn test_protected_with_wrong_secret_token_is_unauthorized() {
    let app = TestApp::new();

    let other_settings = JwtSettings {
        secret: "some-entirely-different-signing-key!".to_string(),
        access_token_expiry_minutes: 30,
    };
    let token = create_token("alice@example.com", &other_settings).unwrap();

    let response = app.get_auth("/protected/", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_with_invalid_email_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register/",
            r#"{"email": "not-an-email", "password": "ValidPassword123!"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_with_short_password_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register/",
            r#"{"email": "test@example.com", "password": "short"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_invalid_email_fails_validation() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/login/",
            r#"{"email": "not-an-email", "password": "ValidPassword123!"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
