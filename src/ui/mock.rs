//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use eightshift_create::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("project_name", "Acme");
//!
//! // Use ui in code under test...
//! let answer = ui.prompt(&Prompt::input("project_name", "Project name?", None)).unwrap();
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert_eq!(answer.as_string(), "Acme");
//! assert!(ui.has_success("Done!"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use crate::error::{CreateError, Result};

use super::{
    parse_bool_answer, Alert, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    alerts: Vec<Alert>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<(String, SpinnerStatus)>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    failing_prompts: HashSet<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a MockUI that reports itself as interactive.
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::new()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Make the prompt with `key` fail as if the input stream closed.
    pub fn fail_prompt(&mut self, key: &str) {
        self.failing_prompts.insert(key.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured alerts.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Spinner labels with the status they finished with.
    pub fn spinner_results(&self) -> Vec<(String, SpinnerStatus)> {
        self.spinner_results.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any alert title or line contains `text`.
    pub fn has_alert(&self, text: &str) -> bool {
        self.alerts
            .iter()
            .any(|a| a.title.contains(text) || a.lines.iter().any(|l| l.contains(text)))
    }

    fn answer(prompt: &Prompt, response: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool_answer(response)),
            _ => PromptResult::String(response.to_string()),
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if self.failing_prompts.contains(&prompt.key) {
            return Err(CreateError::PromptFailed {
                key: prompt.key.clone(),
                message: "input stream closed".to_string(),
            });
        }

        // Check queued responses first (for keys asked multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(Self::answer(prompt, &response));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::answer(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        // Return type-appropriate empty for last resort
        Ok(Self::answer(prompt, ""))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            label: message.to_string(),
            results: Rc::clone(&self.spinner_results),
            ..Default::default()
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_alert(&mut self, alert: &Alert) {
        self.alerts.push(alert.clone());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that reports how it finished back to its [`MockUI`].
#[derive(Debug, Default)]
pub struct MockSpinner {
    label: String,
    results: Rc<RefCell<Vec<(String, SpinnerStatus)>>>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    fn finish(&mut self, status: SpinnerStatus) {
        self.results.borrow_mut().push((self.label.clone(), status));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, _msg: &str) {
        self.finish(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, _msg: &str) {
        self.finish(SpinnerStatus::Error);
    }
}
