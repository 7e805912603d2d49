use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{ChatSession, SessionConfig};

pub struct ChatOptions {
    pub session_id: i64,
    pub endpoint: Option<String>,
    pub candidate: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(&options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: &ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint.clone(),
            candidate: options.candidate.clone(),
        },
        &file_config,
    )?;

    Ok(SessionConfig::new(
        options.session_id,
        resolved.endpoint,
        resolved.api_key,
        resolved.candidate,
    ))
}
