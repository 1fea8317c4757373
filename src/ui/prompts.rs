//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{CreateError, Result};

use super::{parse_bool_answer, Prompt, PromptOption, PromptResult, PromptType};

fn map_dialoguer_err(key: &str, e: dialoguer::Error) -> CreateError {
    CreateError::PromptFailed {
        key: key.to_string(),
        message: e.to_string(),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_deref()
        .map(parse_bool_answer)
        .unwrap_or(true);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(|e| map_dialoguer_err(&prompt.key, e))?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(|e| map_dialoguer_err(&prompt.key, e))?
    } else {
        input
            .interact_on(term)
            .map_err(|e| map_dialoguer_err(&prompt.key, e))?
    };

    Ok(PromptResult::String(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(|e| map_dialoguer_err(&prompt.key, e))?;

    options
        .get(selection)
        .map(|o| PromptResult::String(o.value.clone()))
        .ok_or_else(|| CreateError::PromptFailed {
            key: prompt.key.clone(),
            message: format!("selection {} is out of range", selection),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_carry_the_prompt_key() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = map_dialoguer_err("project_name", dialoguer::Error::IO(io));

        match err {
            CreateError::PromptFailed { key, message } => {
                assert_eq!(key, "project_name");
                assert!(message.contains("stdin closed"));
            }
            other => panic!("Expected PromptFailed, got {:?}", other),
        }
    }
}
