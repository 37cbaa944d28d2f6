use auth_service::domain::UserId;
use auth_service::services::TokenService;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::helpers::{get_random_email, TestApp, TEST_SECRET};

#[tokio::test]
async fn should_return_200_with_identity_for_valid_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let token = app.register_and_login("alice", &email, "pw1").await;

    let response = app.verify_token(&json!({ "token": token })).await;

    assert_eq!(response.status().as_u16(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], email.as_str());
    assert!(json["user_id"].is_i64());
}

#[tokio::test]
async fn verification_is_repeatable() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("alice", &get_random_email(), "pw1")
        .await;

    let first: Value = app
        .verify_token(&json!({ "token": token }))
        .await
        .json()
        .await
        .unwrap();
    let second: Value = app
        .verify_token(&json!({ "token": token }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_return_401_if_token_missing() {
    let app = TestApp::new().await;

    for body in [json!({}), json!({ "token": "" }), json!({ "token": null })] {
        let response = app.verify_token(&body).await;
        assert_eq!(response.status().as_u16(), 401, "input: {}", body);
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["message"], "Token is missing");
    }
}

#[tokio::test]
async fn should_return_401_if_body_absent() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/verify-token", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Token is missing");
}

#[tokio::test]
async fn should_return_401_if_token_invalid() {
    let app = TestApp::new().await;

    let response = app.verify_token(&json!({ "token": "invalid_token" })).await;

    assert_eq!(response.status().as_u16(), 401);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Invalid token");
}

#[tokio::test]
async fn should_return_401_if_token_expired() {
    let app = TestApp::new().await;
    app.register_and_login("alice", &get_random_email(), "pw1")
        .await;

    let tokens = TokenService::from_secret(TEST_SECRET.as_bytes(), 3600);
    let stale = tokens
        .issue_at(UserId::new(1), Utc::now() - Duration::hours(2))
        .unwrap();

    let response = app.verify_token(&json!({ "token": stale.as_ref() })).await;

    assert_eq!(response.status().as_u16(), 401);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Token is expired");
}

#[tokio::test]
async fn should_return_401_if_subject_unknown() {
    let app = TestApp::new().await;

    let tokens = TokenService::from_secret(TEST_SECRET.as_bytes(), 3600);
    let orphan = tokens.issue(UserId::new(999)).unwrap();

    let response = app.verify_token(&json!({ "token": orphan.as_ref() })).await;

    assert_eq!(response.status().as_u16(), 401);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Invalid token");
}
