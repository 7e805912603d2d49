//! # ivc - Interview Chat CLI
//!
//! `ivc` is a terminal client for chat-style AI-assisted interview sessions.
//! It drives one candidate's conversation against a remote interview backend:
//! the transcript, completion state, and per-message text direction detection
//! live here; all persistence belongs to the backend.
//!
//! ## Quick Start
//!
//! ```bash
//! # Join session 42 interactively
//! ivc chat 42
//!
//! # Print a session's transcript
//! ivc history 42
//!
//! # Set up the backend endpoint
//! ivc configure
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/ivc/config.toml`:
//!
//! ```toml
//! [ivc]
//! endpoint = "https://interviews.example.com"
//! candidate = "Ada"
//!
//! [auth]
//! api_key_env = "IVC_API_KEY"
//! ```

/// Backend API client and text direction detection.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interview chat session state and interactive mode.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
