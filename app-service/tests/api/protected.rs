use std::sync::Arc;

use app_service::errors::AuthorityError;
use auth_contract::MessageBody;
use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::{claims, FakeVerifier, TestApp};

#[tokio::test]
async fn should_return_401_when_token_missing() {
    let verifier = Arc::new(FakeVerifier::default());
    let app = TestApp::new(verifier.clone()).await;

    let response = app.get_protected(None).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "Token is missing");
    assert_eq!(verifier.calls(), 0);
}

#[tokio::test]
async fn should_return_identity_for_verified_bearer_token() {
    let verifier = FakeVerifier::default().with("good", Ok(claims(1, "alice", "a@x.com")));
    let app = TestApp::new(Arc::new(verifier)).await;

    let response = app.get_protected(Some("good")).await;

    assert_eq!(response.status().as_u16(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["user_id"], 1);
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "a@x.com");
}

#[tokio::test]
async fn should_render_html_for_query_token() {
    let verifier = FakeVerifier::default().with("good", Ok(claims(1, "alice", "a@x.com")));
    let app = TestApp::new(Arc::new(verifier)).await;

    let response = app.get_path("/protected?token=good").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("alice"));
    assert!(!body.contains("good"));
}

#[tokio::test]
async fn should_accept_form_token_on_post() {
    let verifier = FakeVerifier::default().with("good", Ok(claims(2, "bob", "b@x.com")));
    let app = TestApp::new(Arc::new(verifier)).await;

    let response = app.post_form("/protected", &[("token", "good")]).await;

    assert_eq!(response.status().as_u16(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["username"], "bob");
}

#[tokio::test]
async fn should_pass_authority_rejection_through() {
    let verifier = FakeVerifier::default().with(
        "stale",
        Err(AuthorityError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            message: "Token is expired".to_owned(),
        }),
    );
    let app = TestApp::new(Arc::new(verifier)).await;

    let response = app.get_protected(Some("stale")).await;
    assert_eq!(response.status().as_u16(), 401);
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "Token is expired");

    let response = app.get_protected(Some("unknown")).await;
    assert_eq!(response.status().as_u16(), 401);
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "Invalid token");
}

#[tokio::test]
async fn should_return_500_when_authority_unavailable() {
    let verifier =
        FakeVerifier::default().with("any", Err(AuthorityError::VerificationUnavailable));
    let app = TestApp::new(Arc::new(verifier)).await;

    let response = app.get_protected(Some("any")).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "Failed to verify token");
}

#[tokio::test]
async fn every_request_is_verified() {
    let verifier =
        Arc::new(FakeVerifier::default().with("good", Ok(claims(1, "alice", "a@x.com"))));
    let app = TestApp::new(verifier.clone()).await;

    for _ in 0..3 {
        assert_eq!(app.get_protected(Some("good")).await.status().as_u16(), 200);
    }
    assert_eq!(verifier.calls(), 3);
}
