//! End-to-end session flow tests against a mocked HTTP backend.
//!
//! These exercise the real `InterviewClient` wire format together with the
//! `SessionState` driver: history hydration, the optimistic send path,
//! completion latching, and the best-effort end-session call.

#![allow(clippy::unwrap_used)]

use ivc_cli::api::{ChatTransport, Direction, InterviewClient, Language};
use ivc_cli::session::{Delivery, Role, SendOutcome, SessionState};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_hydrate_from_history_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interview/sessions/42/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversationHistory": [
                {"role": "user", "content": "Hello", "timestamp": "2026-01-05T10:00:00Z"}
            ]
        })))
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let mut state = SessionState::new(42);

    let count = state.hydrate(&client).await.unwrap();

    assert_eq!(count, 1);
    let message = &state.messages()[0];
    assert_eq!(message.role, Role::User);
    assert_eq!(message.content, "Hello");
    assert_eq!(message.direction, Direction::Ltr);
    assert_eq!(message.language, Language::En);
}

#[tokio::test]
async fn test_hydrate_failure_leaves_transcript_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interview/sessions/42/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let mut state = SessionState::new(42);

    assert!(state.hydrate(&client).await.is_err());
    assert!(state.messages().is_empty());
}

#[tokio::test]
async fn test_send_message_posts_language_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/chat"))
        .and(body_json(json!({
            "sessionId": 42,
            "message": "שלום",
            "language": "he"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": 42,
            "assistantMessage": "Thank you",
            "sessionStatus": "active",
            "isInterviewComplete": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let mut state = SessionState::new(42);

    let outcome = state.send_message(&client, "שלום").await;
    assert!(matches!(outcome, SendOutcome::Replied { complete: false }));

    let messages = state.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].direction, Direction::Rtl);
    assert_eq!(messages[0].language, Language::He);
    assert_eq!(messages[1].content, "Thank you");
    assert_eq!(messages[1].direction, Direction::Ltr);
    assert!(!state.is_complete());
}

#[tokio::test]
async fn test_completion_response_ends_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": 42,
            "assistantMessage": "That concludes the interview.",
            "sessionStatus": "completed",
            "isInterviewComplete": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let mut state = SessionState::new(42);

    let outcome = state.send_message(&client, "I think we're done").await;
    assert!(matches!(outcome, SendOutcome::Replied { complete: true }));
    assert!(state.is_complete());

    // Further sends are no-ops; expect(1) above verifies no second call.
    let outcome = state.send_message(&client, "hello again").await;
    assert!(matches!(outcome, SendOutcome::Ignored));
    assert_eq!(state.messages().len(), 2);
}

#[tokio::test]
async fn test_failed_send_marks_optimistic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/chat"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let mut state = SessionState::new(42);

    let outcome = state.send_message(&client, "hello").await;
    assert!(matches!(outcome, SendOutcome::Failed(_)));

    let messages = state.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].delivery, Delivery::Failed);
}

#[tokio::test]
async fn test_api_key_is_sent_as_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interview/sessions/7/history"))
        .and(header("Authorization", "Bearer secret-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"conversationHistory": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), Some("secret-key".to_string()));
    let mut state = SessionState::new(7);

    let count = state.hydrate(&client).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_end_session_posts_to_end_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/sessions/42/end"))
        .and(body_json(json!({"sessionId": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let state = SessionState::new(42);

    state.end(&client).await.unwrap();
}

#[tokio::test]
async fn test_end_session_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/sessions/42/end"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let state = SessionState::new(42);

    // The caller treats this as non-blocking, but the error is surfaced.
    assert!(state.end(&client).await.is_err());
}

#[tokio::test]
async fn test_arabic_language_hint_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/chat"))
        .and(body_json(json!({
            "sessionId": 3,
            "message": "مرحبا",
            "language": "ar"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assistantMessage": "Welcome",
            "isInterviewComplete": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = InterviewClient::new(server.uri(), None);
    let reply = client.send(3, "مرحبا", Language::Ar).await.unwrap();

    assert_eq!(reply.assistant_message, "Welcome");
    assert!(!reply.is_interview_complete);
}
