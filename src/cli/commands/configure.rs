//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{AuthConfig, ConfigFile, ConfigManager, IvcConfig};
use crate::ui::{Style, swallow_prompt_cancellation};

/// Runs the configure command to edit default settings.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }
    swallow_prompt_cancellation(run_configure_inner())
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    print_current(&config);
    println!(
        "{}",
        Style::secondary(format!("Config file: {}", manager.config_path().display()))
    );
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current(&config);

    let endpoint = prompt_endpoint(config.ivc.endpoint.as_deref())?;
    let candidate = prompt_optional(
        "Candidate name:",
        "Shown in /config; leave empty to skip",
        config.ivc.candidate.as_deref(),
    )?;
    let api_key_env = prompt_optional(
        "API key environment variable:",
        "Name of the env var holding the API key; leave empty to skip",
        config.auth.api_key_env.as_deref(),
    )?;

    config.ivc = IvcConfig {
        endpoint: Some(endpoint),
        candidate,
    };
    config.auth = AuthConfig {
        api_key: config.auth.api_key.take(),
        api_key_env,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config
            .ivc
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("candidate"),
        config
            .ivc
            .candidate
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("api key env"),
        config
            .auth
            .api_key_env
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let mut prompt =
        Text::new("Backend endpoint:").with_help_message("Base URL of the interview API");

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let endpoint = prompt.prompt()?;

    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.trim().trim_end_matches('/').to_string())
}

fn prompt_optional(label: &str, help: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new(label).with_help_message(help);

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let value = prompt.prompt()?;
    let value = value.trim();

    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}
