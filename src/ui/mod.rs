//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use eightshift_create::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Eightshift");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{set_colors_enabled, should_use_colors, CreateTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a boxed alert with a title and body lines.
    fn show_alert(&mut self, alert: &Alert);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Whether prompts can be answered without a user, e.g. from
    /// `EIGHTSHIFT_CREATE_PROMPT_<KEY>` variables.
    fn has_prompt_answers(&self) -> bool {
        false
    }
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for env overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Yes/no question.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// Free-form text question.
    pub fn input(key: &str, question: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    /// Single choice from `options`, given as `(label, value)` pairs.
    pub fn select(key: &str, question: &str, options: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select {
                options: options
                    .iter()
                    .map(|(label, value)| PromptOption {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            },
            default: options.first().map(|(_, value)| value.to_string()),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input or select.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Parse a textual answer to a confirm prompt.
pub(crate) fn parse_bool_answer(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// Severity of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
}

/// A titled block of text shown at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Alert {
    /// Create an alert without body lines.
    pub fn new(kind: AlertKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Body lines joined with newlines.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}
