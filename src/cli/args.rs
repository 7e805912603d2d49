use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ivc")]
#[command(about = "Chat-style client for AI-assisted interview sessions")]
#[command(version)]
pub struct Args {
    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join an interview session in interactive chat mode
    Chat {
        /// Session id issued by the backend
        session_id: i64,

        /// API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Candidate display name
        #[arg(short = 'c', long)]
        candidate: Option<String>,
    },
    /// Print a session's transcript and exit
    History {
        /// Session id issued by the backend
        session_id: i64,

        /// API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// Configure ivc settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
