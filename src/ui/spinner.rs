use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner shown while a reply from the backend is pending.
///
/// Cleared on [`stop`](Self::stop) or on drop, so an early return never
/// leaves a stray status line in the terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        // The template is a compile-time constant, so the unwrap cannot fire.
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap()
            .tick_strings(&["●∙∙", "∙●∙", "∙∙●", "∙●∙"]);

        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);

        Self { bar }
    }

    /// Stops and clears the spinner. Safe to call more than once.
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
