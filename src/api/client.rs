use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::bidi::Language;

/// One message as stored by the remote session store.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    pub content: String,
    pub timestamp: String,
}

/// The evaluator's reply to a candidate message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(default)]
    pub session_id: Option<i64>,
    pub assistant_message: String,
    #[serde(default)]
    pub session_status: Option<String>,
    pub is_interview_complete: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryResponse {
    conversation_history: Vec<HistoryMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    session_id: i64,
    message: &'a str,
    language: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EndRequest {
    session_id: i64,
}

/// The remote operations the chat session depends on.
///
/// The session driver is written against this trait so it can be exercised
/// without a network; [`InterviewClient`] is the HTTP implementation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fetches the persisted transcript for a session.
    async fn history(&self, session_id: i64) -> Result<Vec<HistoryMessage>>;

    /// Sends one candidate message and returns the evaluator's reply.
    async fn send(&self, session_id: i64, message: &str, language: Language) -> Result<ChatReply>;

    /// Closes the session on the backend. Best-effort from the client side.
    async fn end(&self, session_id: i64) -> Result<()>;
}

/// HTTP client for the interview backend.
pub struct InterviewClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl InterviewClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }
}

#[async_trait]
impl ChatTransport for InterviewClient {
    async fn history(&self, session_id: i64) -> Result<Vec<HistoryMessage>> {
        let url = self.url(&format!("/api/interview/sessions/{session_id}/history"));

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("History request failed with status {status}: {body}");
        }

        let history: HistoryResponse = response
            .json()
            .await
            .context("Failed to parse session history response")?;

        Ok(history.conversation_history)
    }

    async fn send(&self, session_id: i64, message: &str, language: Language) -> Result<ChatReply> {
        let url = self.url("/api/interview/chat");

        let request = ChatRequest {
            session_id,
            message,
            language: language.code(),
        };

        let response = self
            .authorize(self.client.post(&url).json(&request))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat request failed with status {status}: {body}");
        }

        response.json().await.context("Failed to parse chat response")
    }

    async fn end(&self, session_id: i64) -> Result<()> {
        let url = self.url(&format!("/api/interview/sessions/{session_id}/end"));

        let response = self
            .authorize(self.client.post(&url).json(&EndRequest { session_id }))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("End-session request failed with status {status}");
        }

        Ok(())
    }
}
