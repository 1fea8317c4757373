//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::CreateTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: CreateTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.red} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: CreateTheme::detect(),
        }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: CreateTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}
