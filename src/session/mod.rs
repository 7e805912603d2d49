//! Interactive interview chat session.
//!
//! Provides a REPL-style interface with slash commands, plus the
//! transport-agnostic transcript state that drives it.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod state;
pub(crate) mod ui;

pub use session::{ChatSession, SessionConfig};
pub use state::{ChatMessage, Delivery, Role, SendOutcome, SessionState};
