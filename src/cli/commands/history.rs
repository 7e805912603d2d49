use anyhow::Result;

use crate::api::InterviewClient;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{SessionState, ui};
use crate::ui::Spinner;

pub struct HistoryOptions {
    pub session_id: i64,
    pub endpoint: Option<String>,
}

/// Prints a session's persisted transcript and exits.
pub async fn run_history(options: HistoryOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint.clone(),
            candidate: None,
        },
        &file_config,
    )?;

    let client = InterviewClient::new(resolved.endpoint, resolved.api_key);
    let mut state = SessionState::new(options.session_id);

    let spinner = Spinner::new("Fetching transcript...");
    let count = state.hydrate(&client).await;
    spinner.stop();

    let count = count?;
    if count == 0 {
        crate::status!("Session {} has no messages yet.", options.session_id);
        return Ok(());
    }

    for message in state.messages() {
        ui::print_message(message);
    }

    Ok(())
}
