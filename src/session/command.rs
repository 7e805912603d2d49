//! Prompt input classification for the chat loop.

use inquire::autocompletion::{Autocomplete, Replacement};

/// Slash commands available inside the chat prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    End,
    Quit,
}

impl SlashCommand {
    /// Display order for help and autocomplete.
    pub const ALL: [Self; 4] = [Self::Config, Self::Help, Self::End, Self::Quit];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Config => "/config",
            Self::Help => "/help",
            Self::End => "/end",
            Self::Quit => "/quit",
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::Config => "Show current configuration",
            Self::Help => "Show available commands",
            Self::End => "End the interview session and exit",
            Self::Quit => "Leave without ending the session",
        }
    }

    /// Resolves a command word (without the leading slash), including
    /// the `/quit` aliases.
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "config" => Some(Self::Config),
            "help" => Some(Self::Help),
            "end" => Some(Self::End),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Classified prompt input.
#[derive(Debug)]
pub enum Input {
    /// A candidate answer to send to the interviewer.
    Text(String),
    Command(SlashCommand),
    /// A slash prefix that matched no known command.
    Unknown(String),
    Empty,
}

pub fn parse_input(raw: &str) -> Input {
    let raw = raw.trim();

    if raw.is_empty() {
        return Input::Empty;
    }

    let Some(rest) = raw.strip_prefix('/') else {
        return Input::Text(raw.to_string());
    };

    let word = rest.split_whitespace().next().unwrap_or("");

    SlashCommand::from_word(word)
        .map_or_else(|| Input::Unknown(rest.trim().to_string()), Input::Command)
}

/// Autocompleter over [`SlashCommand::ALL`].
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SlashCommand::ALL
            .iter()
            .filter(|cmd| cmd.name().starts_with(input))
            .map(|cmd| format!("{}  {}", cmd.name(), cmd.describe()))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .as_deref()
            .and_then(|s| s.split_whitespace().next())
            .map(str::to_string))
    }
}
