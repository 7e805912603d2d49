//! Chat mode UI components.

use crate::ui::Style;

use super::command::SlashCommand;
use super::session::SessionConfig;
use super::state::{ChatMessage, Delivery, Role};
use crate::api::Direction;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// Unicode directional isolates keep RTL message content from reordering
// the surrounding LTR labels in the terminal.
const RLI: char = '\u{2067}';
const PDI: char = '\u{2069}';

pub fn print_header(session_id: i64) {
    println!(
        "{} {} - Interview Session #{session_id}",
        Style::header("ivc"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_complete() {
    println!();
    println!(
        "{}",
        Style::success("The interview is complete. Thank you for your time!")
    );
}

/// Renders one transcript entry, isolating RTL content.
pub fn print_message(message: &ChatMessage) {
    let label = match message.role {
        Role::User => Style::value("you"),
        Role::Assistant => Style::command("interviewer"),
    };

    let content = match message.direction {
        Direction::Rtl => format!("{RLI}{}{PDI}", message.content),
        Direction::Ltr => message.content.clone(),
    };

    match message.delivery {
        Delivery::Delivered => println!("{label}  {content}"),
        Delivery::Failed => {
            println!("{label}  {content} {}", Style::error("(not delivered)"));
        }
    }
    println!();
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("session"),
        Style::value(config.session_id)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("candidate"),
        config
            .candidate
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SlashCommand::ALL
        .iter()
        .map(|cmd| cmd.name().len())
        .max()
        .unwrap_or(0);
    for cmd in SlashCommand::ALL {
        // Pad before styling so ANSI escapes do not skew the column.
        println!(
            "  {}  {}",
            Style::command(format!("{:width$}", cmd.name())),
            Style::secondary(cmd.describe())
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
