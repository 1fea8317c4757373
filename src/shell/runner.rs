//! Command runner abstraction.
//!
//! Everything that spawns an external tool goes through [`CommandRunner`],
//! so installers and checks can be exercised with
//! [`MockRunner`](super::MockRunner) instead of a real `git` or `composer`.

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult};

/// Runs one shell command per call.
pub trait CommandRunner {
    /// Run `command` and report how it went.
    ///
    /// Non-zero exits and timeouts are reported in the [`CommandResult`];
    /// `Err` is reserved for commands that could not be started.
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runner backed by the platform shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        execute(command, options)
    }
}
