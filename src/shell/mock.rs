//! Scripted command runner for tests.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are matched by command prefix; every call is recorded for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use eightshift_create::shell::{CommandOptions, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().on_failure("wp theme activate", 1, "Error: no WordPress");
//!
//! let result = runner.run("wp theme activate x", &CommandOptions::captured()).unwrap();
//! assert!(!result.success);
//! assert!(runner.was_called("wp theme"));
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CreateError, Result};

use super::command::{CommandOptions, CommandResult};
use super::runner::CommandRunner;

/// Scripted outcome for a matching command.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Exit 0 with the given output.
    Success { stdout: String, stderr: String },
    /// Exit with the given code and stderr.
    Failure { code: i32, stderr: String },
    /// Run past the deadline.
    TimedOut,
    /// The command could not be started.
    SpawnError(String),
}

/// A command the mock was asked to run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

/// Command runner returning scripted responses.
///
/// The first registered prefix that matches wins. Commands matching no
/// prefix succeed with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Vec<(String, MockResponse)>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for commands starting with `prefix`.
    pub fn respond(mut self, prefix: &str, response: MockResponse) -> Self {
        self.responses.push((prefix.to_string(), response));
        self
    }

    /// Commands starting with `prefix` succeed with `stdout`.
    pub fn on_success(self, prefix: &str, stdout: &str) -> Self {
        self.respond(
            prefix,
            MockResponse::Success {
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        )
    }

    /// Commands starting with `prefix` exit 0 but write `stderr`.
    pub fn on_stderr(self, prefix: &str, stderr: &str) -> Self {
        self.respond(
            prefix,
            MockResponse::Success {
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        )
    }

    /// Commands starting with `prefix` exit with `code`.
    pub fn on_failure(self, prefix: &str, code: i32, stderr: &str) -> Self {
        self.respond(
            prefix,
            MockResponse::Failure {
                code,
                stderr: stderr.to_string(),
            },
        )
    }

    /// Commands starting with `prefix` time out.
    pub fn on_timeout(self, prefix: &str) -> Self {
        self.respond(prefix, MockResponse::TimedOut)
    }

    /// Commands starting with `prefix` cannot be started.
    pub fn on_spawn_error(self, prefix: &str, message: &str) -> Self {
        self.respond(prefix, MockResponse::SpawnError(message.to_string()))
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// All recorded command lines, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }

    /// Check whether any recorded command starts with `prefix`.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| c.command.starts_with(prefix))
    }

    /// First recorded call starting with `prefix`.
    pub fn call(&self, prefix: &str) -> Option<RecordedCall> {
        self.calls
            .borrow()
            .iter()
            .find(|c| c.command.starts_with(prefix))
            .cloned()
    }

    fn response_for(&self, command: &str) -> Option<&MockResponse> {
        self.responses
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map(|(_, response)| response)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            command: command.to_string(),
            cwd: options.cwd.clone(),
            timeout: options.timeout,
        });

        let result = match self.response_for(command) {
            None => CommandResult::success(String::new(), String::new(), Duration::ZERO),
            Some(MockResponse::Success { stdout, stderr }) => {
                CommandResult::success(stdout.clone(), stderr.clone(), Duration::ZERO)
            }
            Some(MockResponse::Failure { code, stderr }) => {
                CommandResult::failure(Some(*code), String::new(), stderr.clone(), Duration::ZERO)
            }
            Some(MockResponse::TimedOut) => CommandResult::timed_out(
                String::new(),
                String::new(),
                options.timeout.unwrap_or_default(),
            ),
            Some(MockResponse::SpawnError(message)) => {
                return Err(CreateError::CommandFailed {
                    command: command.to_string(),
                    code: None,
                    stderr: message.clone(),
                })
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_commands_succeed() {
        let runner = MockRunner::new();
        let result = runner.run("git --version", &CommandOptions::captured()).unwrap();
        assert!(result.success);
        assert_eq!(runner.commands(), vec!["git --version"]);
    }

    #[test]
    fn first_matching_prefix_wins() {
        let runner = MockRunner::new()
            .on_failure("git clone", 128, "fatal")
            .on_success("git", "git version 2.43.0");

        let clone = runner.run("git clone url", &CommandOptions::captured()).unwrap();
        let version = runner.run("git --version", &CommandOptions::captured()).unwrap();

        assert_eq!(clone.exit_code, Some(128));
        assert!(version.stdout.contains("2.43.0"));
    }

    #[test]
    fn timeout_response_uses_requested_timeout() {
        let runner = MockRunner::new().on_timeout("git clone");
        let options = CommandOptions::captured().with_timeout(Duration::from_secs(45));

        let result = runner.run("git clone url dest", &options).unwrap();

        assert!(result.timed_out);
        assert_eq!(result.duration, Duration::from_secs(45));
    }

    #[test]
    fn spawn_error_is_returned_as_err() {
        let runner = MockRunner::new().on_spawn_error("composer", "No such file");
        let err = runner
            .run("composer -v", &CommandOptions::captured())
            .unwrap_err();
        assert!(matches!(err, CreateError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn records_cwd_and_timeout() {
        let runner = MockRunner::new();
        let options = CommandOptions::captured()
            .in_dir("/tmp/project")
            .with_timeout(Duration::from_secs(5));

        runner.run("composer require x", &options).unwrap();

        let call = runner.call("composer").unwrap();
        assert_eq!(call.cwd, Some(PathBuf::from("/tmp/project")));
        assert_eq!(call.timeout, Some(Duration::from_secs(5)));
        assert!(runner.call("git").is_none());
    }
}
