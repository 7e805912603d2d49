//! CLI output policy.
//!
//! Transcript content goes to stdout so it can be piped; status lines,
//! warnings, and errors go to stderr. `--quiet` drops status lines, and
//! `--no-color` (or the `NO_COLOR` environment variable, per
//! <https://no-color.org/>) strips ANSI styling from [`crate::ui::Style`].

use std::sync::OnceLock;

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

/// Resolved output flags, recorded once at startup.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Suppress non-essential stderr output.
    pub quiet: bool,
    /// Emit plain text instead of ANSI-styled text.
    pub no_color: bool,
}

impl OutputConfig {
    /// Merges the CLI flags with the `NO_COLOR` environment variable.
    fn resolve(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::resolve(false, false)
    }
}

/// Records the CLI output flags. The first call wins; later calls are
/// ignored, so library code can never override what `main` decided.
pub fn init(quiet: bool, no_color: bool) {
    let _ = OUTPUT.set(OutputConfig::resolve(quiet, no_color));
}

fn config() -> OutputConfig {
    *OUTPUT.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_quiet_flag() {
        assert!(OutputConfig::resolve(true, false).quiet);
        assert!(!OutputConfig::resolve(false, false).quiet);
    }

    #[test]
    fn test_resolve_cli_flag_disables_color() {
        assert!(OutputConfig::resolve(false, true).no_color);
    }

    #[test]
    fn test_default_is_not_quiet() {
        // no_color may be on if the test environment exports NO_COLOR
        assert!(!OutputConfig::default().quiet);
    }
}
