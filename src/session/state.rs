//! Transcript state for one interview session.
//!
//! The state is deliberately decoupled from the terminal UI and from HTTP:
//! it drives a [`ChatTransport`] and owns the transcript, the completion
//! latch, and the single-send-in-flight guard. The REPL in
//! [`super::session`] renders it.

use anyhow::Result;
use chrono::Utc;

use crate::api::{ChatTransport, Direction, Language, detect_text_direction};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Whether an optimistically appended user message reached the backend.
///
/// A failed message stays in the transcript but is rendered distinctly, so
/// the candidate can tell it was never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed,
}

/// One entry in the transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    pub direction: Direction,
    pub language: Language,
    pub delivery: Delivery,
}

impl ChatMessage {
    /// Builds a message, deriving direction and language from `content`.
    ///
    /// Direction and language are computed exactly once here; hydration
    /// from history goes through the same path so classification is
    /// identical either way.
    fn new(role: Role, content: String, timestamp: String) -> Self {
        let (direction, language) = detect_text_direction(&content);
        Self {
            role,
            content,
            timestamp,
            direction,
            language,
            delivery: Delivery::Delivered,
        }
    }
}

/// Result of a [`SessionState::send_message`] call.
#[derive(Debug)]
pub enum SendOutcome {
    /// The input was empty, a send was already in flight, or the interview
    /// is complete. Nothing changed and no network call was made.
    Ignored,
    /// The evaluator replied; `complete` is true when this reply ended the
    /// interview.
    Replied { complete: bool },
    /// The transport failed. The optimistic user message was kept and
    /// marked [`Delivery::Failed`].
    Failed(anyhow::Error),
}

/// The transcript and control flags for one session.
pub struct SessionState {
    session_id: i64,
    messages: Vec<ChatMessage>,
    is_complete: bool,
    is_sending: bool,
}

impl SessionState {
    pub const fn new(session_id: i64) -> Self {
        Self {
            session_id,
            messages: Vec::new(),
            is_complete: false,
            is_sending: false,
        }
    }

    pub const fn session_id(&self) -> i64 {
        self.session_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Loads the persisted transcript from the backend, replacing any local
    /// messages. Fetched once per session; callers fall back to an empty
    /// transcript when this fails.
    pub async fn hydrate(&mut self, transport: &dyn ChatTransport) -> Result<usize> {
        let history = transport.history(self.session_id).await?;

        self.messages = history
            .into_iter()
            .map(|m| {
                let role = if m.role == "assistant" {
                    Role::Assistant
                } else {
                    Role::User
                };
                ChatMessage::new(role, m.content, m.timestamp)
            })
            .collect();

        Ok(self.messages.len())
    }

    /// Sends one candidate message and appends the evaluator's reply.
    ///
    /// The user message is appended before the network call and is never
    /// removed; on failure it is marked [`Delivery::Failed`] instead.
    /// Guards make this a no-op for blank input, while a send is in
    /// flight, and after the interview completed, so transcript order is
    /// deterministic.
    pub async fn send_message(&mut self, transport: &dyn ChatTransport, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() || self.is_sending || self.is_complete {
            return SendOutcome::Ignored;
        }

        let (_, language) = detect_text_direction(text);
        self.messages.push(ChatMessage::new(
            Role::User,
            text.to_string(),
            Utc::now().to_rfc3339(),
        ));

        self.is_sending = true;
        let result = transport.send(self.session_id, text, language).await;
        self.is_sending = false;

        match result {
            Ok(reply) => {
                self.messages.push(ChatMessage::new(
                    Role::Assistant,
                    reply.assistant_message,
                    Utc::now().to_rfc3339(),
                ));
                if reply.is_interview_complete {
                    self.is_complete = true;
                }
                SendOutcome::Replied {
                    complete: reply.is_interview_complete,
                }
            }
            Err(e) => {
                if let Some(last) = self.messages.last_mut() {
                    last.delivery = Delivery::Failed;
                }
                SendOutcome::Failed(e)
            }
        }
    }

    /// Closes the session on the backend. The backend is the source of
    /// truth for whether the session actually closed; callers treat a
    /// failure here as non-blocking.
    pub async fn end(&self, transport: &dyn ChatTransport) -> Result<()> {
        transport.end(self.session_id).await
    }
}
