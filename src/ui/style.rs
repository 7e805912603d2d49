//! Semantic styling for CLI output.
//!
//! Every helper returns plain text when color is disabled (see
//! [`crate::output::is_no_color`]), so callers never branch on the flag.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.bold())
    }

    /// Labels/keys (e.g., "session", "endpoint")
    pub fn label<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.dimmed())
    }

    /// Primary values (e.g., session ids, candidate names)
    pub fn value<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.cyan())
    }

    /// Secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.dimmed())
    }

    /// Success messages
    pub fn success<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.green())
    }

    /// Error messages
    pub fn error<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.red().bold())
    }

    /// Slash commands and the interviewer label (e.g., "/config")
    pub fn command<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.green())
    }

    /// Version info
    pub fn version<T: Display>(text: T) -> String {
        let text = text.to_string();
        if output::is_no_color() {
            return text;
        }
        format!("{}", text.dimmed())
    }
}
