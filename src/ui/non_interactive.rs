//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{CreateError, Result};

use super::theme::CreateTheme;
use super::{
    parse_bool_answer, Alert, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "EIGHTSHIFT_CREATE_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `EIGHTSHIFT_CREATE_PROMPT_<KEY>` variables,
/// then from the prompt default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(prompt: &Prompt, value: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool_answer(value)),
            _ => PromptResult::String(value.to_string()),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(Self::answer(prompt, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        Err(CreateError::PromptFailed {
            key: prompt.key.clone(),
            message: "cannot prompt in non-interactive mode (no default value)".to_string(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner {
            visible: self.mode.shows_spinners(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_alert(&mut self, alert: &Alert) {
        println!();
        println!("┌─ {}", alert.title);
        for line in &alert.lines {
            if line.is_empty() {
                println!("│");
            } else {
                println!("│ {}", line);
            }
        }
        println!("└────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn has_prompt_answers(&self) -> bool {
        !self.env_overrides.is_empty()
    }
}

/// Spinner that only prints the final status line.
struct NoopSpinner {
    visible: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("{}", CreateTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", CreateTheme::plain().format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("libs_version", "Libs version?", Some("2.3.0"));

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "2.3.0");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("project_name", "Project name?", None);

        let result = ui.prompt(&prompt);
        assert!(matches!(result, Err(CreateError::PromptFailed { .. })));
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "EIGHTSHIFT_CREATE_PROMPT_PROJECT_NAME".to_string(),
            "Acme".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::input("project_name", "Project name?", Some("default"));

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "Acme");
    }

    #[test]
    fn confirm_override_is_parsed_as_bool() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "EIGHTSHIFT_CREATE_PROMPT_DEACTIVATE_OTHERS".to_string(),
            "no".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::confirm("deactivate_others", "Deactivated?", true);

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
    }

    #[test]
    fn confirm_default_is_parsed_as_bool() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::confirm("deactivate_others", "Deactivated?", true);

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn prompt_answers_follow_overrides() {
        let empty = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!empty.has_prompt_answers());

        let mut overrides = HashMap::new();
        overrides.insert(
            "EIGHTSHIFT_CREATE_PROMPT_SETUP_TYPE".to_string(),
            "manual".to_string(),
        );
        let scripted = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        assert!(scripted.has_prompt_answers());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner { visible: false };
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
