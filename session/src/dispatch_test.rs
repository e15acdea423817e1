use serde_json::json;

use super::*;
use crate::test_support::{BASE, MockTransport, user, user_json};
use crate::types::User;

fn dispatcher(mock: &std::sync::Arc<MockTransport>) -> RequestDispatcher {
    RequestDispatcher::new(format!("{BASE}/"), Box::new(mock.clone()))
}

// =============================================================
// Header management
// =============================================================

#[tokio::test]
async fn no_authorization_header_without_token() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/auth/me", 200, user_json(&user(1, "A")));
    let d = dispatcher(&mock);

    let _: User = d.get("/auth/me").await.unwrap();
    let sent = mock.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header(AUTHORIZATION), None);
}

#[tokio::test]
async fn set_token_attaches_bearer_then_clear_removes_it() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/auth/me", 200, user_json(&user(1, "A")));
    let d = dispatcher(&mock);

    d.set_token(Some(&Token::new("T1")));
    assert_eq!(d.authorization().as_deref(), Some("Bearer T1"));
    let _: User = d.get("/auth/me").await.unwrap();

    d.set_token(None);
    assert_eq!(d.authorization(), None);
    let _: User = d.get("auth/me").await.unwrap();

    let sent = mock.requests();
    assert_eq!(sent[0].header("authorization"), Some("Bearer T1"));
    assert_eq!(sent[1].header(AUTHORIZATION), None);
}

#[tokio::test]
async fn post_sends_json_body_and_content_type() {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/auth/login", 200, json!({"token": "T", "user": {"id": 1}}));
    let d = dispatcher(&mock);

    let _: serde_json::Value = d.post("/auth/login", &json!({"email": "a@example.com"})).await.unwrap();
    let sent = &mock.requests()[0];
    assert_eq!(sent.url, format!("{BASE}/auth/login"));
    assert_eq!(sent.header("content-type"), Some("application/json"));
    assert_eq!(sent.body, Some(json!({"email": "a@example.com"})));
}

// =============================================================
// Response classification
// =============================================================

#[tokio::test]
async fn rejection_surfaces_server_message() {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/auth/login", 400, json!({"message": "Invalid credentials"}));
    let d = dispatcher(&mock);

    let err = d.post::<_, serde_json::Value>("/auth/login", &json!({})).await.unwrap_err();
    assert_eq!(err, SessionError::Rejected { status: 400, message: "Invalid credentials".into() });
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn status_401_maps_to_unauthorized() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/auth/me", 401, json!({"msg": "Token has expired"}));
    let d = dispatcher(&mock);

    let err = d.get::<User>("/auth/me").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Token has expired");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/auth/me", 200, json!({"unexpected": true}));
    let d = dispatcher(&mock);

    let err = d.get::<User>("/auth/me").await.unwrap_err();
    assert!(matches!(err, SessionError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    let mock = MockTransport::new();
    mock.fail(Method::Get, "/auth/me", "connection refused");
    let d = dispatcher(&mock);

    let err = d.get::<User>("/auth/me").await.unwrap_err();
    assert_eq!(err, SessionError::Network("connection refused".into()));
    assert_eq!(err.status(), None);
}

#[test]
fn rejection_without_message_is_empty_and_takes_fallback() {
    let err = rejection(500, "<html>oops</html>");
    assert_eq!(err, SessionError::Rejected { status: 500, message: String::new() });
    assert_eq!(err.or_message("Failed to login").to_string(), "Failed to login");
}
