use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::state::{SendOutcome, SessionState};
use super::ui;
use crate::api::InterviewClient;
use crate::ui::Spinner;
use crate::warn;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The backend session id issued at session creation.
    pub session_id: i64,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// Candidate display name (cosmetic, from config file).
    pub candidate: Option<String>,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub const fn new(
        session_id: i64,
        endpoint: String,
        api_key: Option<String>,
        candidate: Option<String>,
    ) -> Self {
        Self {
            session_id,
            endpoint,
            api_key,
            candidate,
        }
    }
}

/// An interactive interview chat session.
///
/// Provides a REPL-style interface over the backend chat endpoint.
pub struct ChatSession {
    config: SessionConfig,
    client: InterviewClient,
    state: SessionState,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = InterviewClient::new(config.endpoint.clone(), config.api_key.clone());
        let state = SessionState::new(config.session_id);
        Self {
            config,
            client,
            state,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.config.session_id);

        // A failed history fetch is not fatal: the session continues from
        // an empty transcript and the failure goes to stderr only.
        match self.state.hydrate(&self.client).await {
            Ok(_) => {
                for message in self.state.messages() {
                    ui::print_message(message);
                }
            }
            Err(e) => {
                warn!("Could not load session history: {e:#}");
            }
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            if self.state.is_complete() {
                ui::print_complete();
                break;
            }

            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type your answer, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.send_and_print(&text).await;
                    }
                    Input::Unknown(word) => {
                        ui::print_error(&format!("Unknown command: /{word}"));
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session loop should exit.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::End => {
                self.end_session().await;
                false
            }
            SlashCommand::Quit => false,
        }
    }

    async fn send_and_print(&mut self, text: &str) {
        let spinner = Spinner::new("Waiting for the interviewer...");

        let outcome = self.state.send_message(&self.client, text).await;
        spinner.stop();

        match outcome {
            SendOutcome::Ignored => {}
            SendOutcome::Replied { .. } => {
                // The user message was already echoed by the prompt; only
                // the reply needs rendering.
                if let Some(reply) = self.state.messages().last() {
                    ui::print_message(reply);
                }
            }
            SendOutcome::Failed(e) => {
                ui::print_error(&format!("Message was not delivered: {e:#}"));
            }
        }
    }

    /// Ends the session on the backend, best-effort. A failure is logged
    /// but never keeps the candidate in the chat.
    async fn end_session(&self) {
        if let Err(e) = self.state.end(&self.client).await {
            warn!("Could not end session cleanly: {e:#}");
        }
    }
}
