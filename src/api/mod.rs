mod bidi;
mod client;

pub use bidi::{Direction, Language, detect_text_direction};
pub use client::{ChatReply, ChatTransport, HistoryMessage, InterviewClient};
