use anyhow::Result;
use clap::Parser;

use ivc_cli::cli::commands::{chat, configure, history};
use ivc_cli::cli::{Args, Command};
use ivc_cli::output;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(args.quiet, args.no_color);

    match args.command {
        Command::Chat {
            session_id,
            endpoint,
            candidate,
        } => {
            let options = chat::ChatOptions {
                session_id,
                endpoint,
                candidate,
            };
            chat::run_chat(options).await?;
        }
        Command::History {
            session_id,
            endpoint,
        } => {
            let options = history::HistoryOptions {
                session_id,
                endpoint,
            };
            history::run_history(options).await?;
        }
        Command::Configure { show } => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}
