//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, Alert, CreateTheme, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt,
    PromptResult, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: CreateTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: CreateTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.term.clear_screen().ok();
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_alert(&mut self, alert: &Alert) {
        let style = self.theme.alert_style(alert.kind);
        let border = &self.theme.border;
        writeln!(self.term).ok();
        writeln!(
            self.term,
            "{} {}",
            border.apply_to("┌─"),
            style.apply_to(&alert.title).bold()
        )
        .ok();
        for line in &alert.lines {
            if line.is_empty() {
                writeln!(self.term, "{}", border.apply_to("│")).ok();
            } else {
                writeln!(self.term, "{} {}", border.apply_to("│"), line).ok();
            }
        }
        writeln!(
            self.term,
            "{}",
            border.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
