//! The question tree.
//!
//! Each question is data: a prompt builder, a predicate over the answers
//! collected so far, and a function folding the answer into the choice.
//! Nothing here performs I/O.

use crate::error::{CreateError, Result};
use crate::install::TargetKind;
use crate::setup::choice::{FrontendLibsType, SetupChoice, SetupType};
use crate::ui::{Prompt, PromptResult};

/// Values the prompts draw their wording and defaults from.
#[derive(Debug, Clone, Copy)]
pub struct QuestionContext<'a> {
    pub kind: TargetKind,
    /// Libs branch given on the command line, offered as the default.
    pub libs_branch: Option<&'a str>,
    /// Frontend libs branch given on the command line, offered as the default.
    pub frontend_libs_branch: Option<&'a str>,
}

/// What applying an answer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Accepted,
    /// The answer is unusable; ask again after showing the reason.
    Rejected(String),
}

/// One node of the question tree.
pub struct Question {
    pub key: &'static str,
    pub prompt: fn(&QuestionContext<'_>) -> Prompt,
    pub asked_when: fn(&SetupChoice) -> bool,
    pub apply: fn(&mut SetupChoice, &PromptResult) -> Result<Answer>,
}

/// The questions in the order they are asked.
pub static QUESTIONS: [Question; 6] = [
    Question {
        key: "deactivate_others",
        prompt: deactivate_prompt,
        asked_when: always,
        apply: apply_deactivate,
    },
    Question {
        key: "setup_type",
        prompt: setup_type_prompt,
        asked_when: always,
        apply: apply_setup_type,
    },
    Question {
        key: "frontend_libs_type",
        prompt: frontend_libs_type_prompt,
        asked_when: not_manual,
        apply: apply_frontend_libs_type,
    },
    Question {
        key: "project_name",
        prompt: project_name_prompt,
        asked_when: not_manual,
        apply: apply_project_name,
    },
    Question {
        key: "libs_version",
        prompt: libs_version_prompt,
        asked_when: extended,
        apply: apply_libs_version,
    },
    Question {
        key: "frontend_libs_version",
        prompt: frontend_libs_version_prompt,
        asked_when: extended,
        apply: apply_frontend_libs_version,
    },
];

fn always(_: &SetupChoice) -> bool {
    true
}

fn not_manual(choice: &SetupChoice) -> bool {
    choice.setup_type != SetupType::Manual
}

fn extended(choice: &SetupChoice) -> bool {
    choice.setup_type == SetupType::Extended
}

fn deactivate_prompt(ctx: &QuestionContext<'_>) -> Prompt {
    Prompt::confirm(
        "deactivate_others",
        &format!(
            "Have you deactivated all other {}s in this project?",
            ctx.kind
        ),
        true,
    )
}

fn setup_type_prompt(_: &QuestionContext<'_>) -> Prompt {
    let options: Vec<_> = SetupType::ALL
        .iter()
        .map(|t| (t.label(), t.value()))
        .collect();
    Prompt::select("setup_type", "How do you want to set up the project?", &options)
}

fn frontend_libs_type_prompt(_: &QuestionContext<'_>) -> Prompt {
    let options: Vec<_> = FrontendLibsType::ALL
        .iter()
        .map(|t| (t.label(), t.value()))
        .collect();
    Prompt::select(
        "frontend_libs_type",
        "Which frontend libs do you want to use?",
        &options,
    )
}

fn project_name_prompt(ctx: &QuestionContext<'_>) -> Prompt {
    Prompt::input(
        "project_name",
        &format!("What is the name of your {}?", ctx.kind),
        None,
    )
}

fn libs_version_prompt(ctx: &QuestionContext<'_>) -> Prompt {
    Prompt::input(
        "libs_version",
        "Which eightshift-libs version do you want? (empty for latest)",
        ctx.libs_branch,
    )
}

fn frontend_libs_version_prompt(ctx: &QuestionContext<'_>) -> Prompt {
    Prompt::input(
        "frontend_libs_version",
        "Which eightshift-frontend-libs version do you want? (empty for latest)",
        ctx.frontend_libs_branch,
    )
}

fn unexpected(key: &str, answer: &PromptResult) -> CreateError {
    CreateError::PromptFailed {
        key: key.to_string(),
        message: format!("unexpected answer '{}'", answer.as_string()),
    }
}

fn apply_deactivate(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    choice.precondition_confirmed = answer
        .as_bool()
        .ok_or_else(|| unexpected("deactivate_others", answer))?;
    Ok(Answer::Accepted)
}

fn apply_setup_type(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    choice.setup_type = SetupType::from_value(&answer.as_string())
        .ok_or_else(|| unexpected("setup_type", answer))?;
    Ok(Answer::Accepted)
}

fn apply_frontend_libs_type(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    choice.frontend_libs_type = Some(
        FrontendLibsType::from_value(&answer.as_string())
            .ok_or_else(|| unexpected("frontend_libs_type", answer))?,
    );
    Ok(Answer::Accepted)
}

fn apply_project_name(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    let name = answer.as_string().trim().to_string();
    if name.is_empty() {
        return Ok(Answer::Rejected(
            "The project name can't be empty.".to_string(),
        ));
    }
    choice.project_name = Some(name);
    Ok(Answer::Accepted)
}

fn optional_version(answer: &PromptResult) -> Option<String> {
    let version = answer.as_string().trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

fn apply_libs_version(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    choice.libs_version = optional_version(answer);
    Ok(Answer::Accepted)
}

fn apply_frontend_libs_version(choice: &mut SetupChoice, answer: &PromptResult) -> Result<Answer> {
    choice.frontend_libs_version = optional_version(answer);
    Ok(Answer::Accepted)
}
