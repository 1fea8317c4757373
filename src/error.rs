//! Error types for scaffolding operations.
//!
//! This module defines [`CreateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Components return `CreateError` values; only `main` turns them into an
//!   exit code
//! - Environment problems (missing root, existing install, missing tools) are
//!   detected before anything is cloned
//! - Use `anyhow::Error` (via `CreateError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for scaffolding operations.
#[derive(Debug, Error)]
pub enum CreateError {
    /// No ancestor of the start directory contains the sentinel file.
    #[error("Unable to find project root (no {sentinel} above {start})")]
    ProjectRootNotFound { start: PathBuf, sentinel: String },

    /// The output path is already taken and the conflict policy refuses to
    /// touch it.
    #[error(
        "It looks like you already have a setup {kind} in your project on path {path}. Please remove it and try again."
    )]
    SetupExists { kind: String, path: PathBuf },

    /// A required host tool is not installed.
    #[error("{requirement} is not installed. {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// A fatal step failed.
    #[error("'{step}' was a required step: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<CreateError>,
    },

    /// A step was built without anything to do.
    #[error("Missing action for step '{step}', don't know what needs to be done at this step")]
    MissingStepAction { step: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}{}", stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Shell command ran past its deadline and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// Reading an answer from the user failed.
    #[error("Prompt '{key}' failed: {message}")]
    PromptFailed { key: String, message: String },

    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Settings parsed but hold unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CreateError {
    /// Whether the UI already showed this error when it happened.
    ///
    /// The step runner prints a fatal step's cause and the "required step"
    /// notice itself, so the top level must not print it again.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::StepFailed { .. })
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, CreateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_not_found_displays_start_and_sentinel() {
        let err = CreateError::ProjectRootNotFound {
            start: PathBuf::from("/srv/www"),
            sentinel: "wp-config.php".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/www"));
        assert!(msg.contains("wp-config.php"));
    }

    #[test]
    fn setup_exists_displays_kind_and_path() {
        let err = CreateError::SetupExists {
            kind: "theme".into(),
            path: PathBuf::from("/wp/wp-content/themes/eightshift-boilerplate"),
        };
        let msg = err.to_string();
        assert!(msg.contains("setup theme"));
        assert!(msg.contains("themes/eightshift-boilerplate"));
    }

    #[test]
    fn requirement_missing_displays_requirement_and_message() {
        let err = CreateError::RequirementMissing {
            requirement: "Composer".into(),
            message: "Please install Composer LTS version.".into(),
        };
        assert_eq!(
            err.to_string(),
            "Composer is not installed. Please install Composer LTS version."
        );
    }

    #[test]
    fn step_failed_wraps_source() {
        let err = CreateError::StepFailed {
            step: "Cloning".into(),
            source: Box::new(CreateError::CommandTimedOut {
                command: "git clone x".into(),
                seconds: 45,
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("'Cloning' was a required step"));
        assert!(msg.contains("timed out after 45s"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn only_step_failures_are_already_reported() {
        let step = CreateError::StepFailed {
            step: "Cloning".into(),
            source: Box::new(CreateError::CommandTimedOut {
                command: "git clone x".into(),
                seconds: 45,
            }),
        };
        assert!(step.is_reported());

        let missing = CreateError::MissingStepAction {
            step: "Activating".into(),
        };
        assert!(!missing.is_reported());
        assert!(!CreateError::ConfigNotFound {
            path: PathBuf::from("settings.yml")
        }
        .is_reported());
    }

    #[test]
    fn command_failed_includes_stderr_when_present() {
        let err = CreateError::CommandFailed {
            command: "git clone".into(),
            code: Some(128),
            stderr: "fatal: repository not found\n".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("128"));
        assert!(msg.ends_with("fatal: repository not found"));
    }

    #[test]
    fn command_failed_without_stderr_is_single_line() {
        let err = CreateError::CommandFailed {
            command: "composer require".into(),
            code: Some(1),
            stderr: "   ".into(),
        };
        assert!(!err.to_string().contains('\n'));
    }

    #[test]
    fn missing_step_action_displays_step() {
        let err = CreateError::MissingStepAction {
            step: "Activating".into(),
        };
        assert!(err.to_string().contains("'Activating'"));
    }

    #[test]
    fn prompt_failed_displays_key() {
        let err = CreateError::PromptFailed {
            key: "setup_type".into(),
            message: "input closed".into(),
        };
        assert!(err.to_string().contains("setup_type"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CreateError = io_err.into();
        assert!(matches!(err, CreateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CreateError::ConfigNotFound {
                path: PathBuf::from("settings.yml"),
            })
        }
        assert!(returns_error().is_err());
    }
}
