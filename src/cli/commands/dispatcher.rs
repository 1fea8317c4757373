//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::install::TargetKind;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::setup::SetupCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures travel as errors; a result only carries the exit code.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    start_dir: PathBuf,
    settings: Settings,
    runner: &'a dyn CommandRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher that searches for the project from `start_dir`.
    pub fn new(start_dir: PathBuf, settings: Settings, runner: &'a dyn CommandRunner) -> Self {
        Self {
            start_dir,
            settings,
            runner,
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (kind, args) = match &cli.command {
            Commands::Theme(args) => (TargetKind::Theme, args),
            Commands::Plugin(args) => (TargetKind::Plugin, args),
        };
        tracing::debug!("Dispatching {} setup from {}", kind, self.start_dir.display());

        SetupCommand::new(kind, args.clone(), &self.settings, self.runner, &self.start_dir)
            .execute(ui)
    }

    /// Dispatch, report any error through `ui`, and return the exit code.
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> u8 {
        match self.dispatch(cli, ui) {
            Ok(result) => result.exit_code,
            Err(e) => {
                if !e.is_reported() {
                    ui.error(&format!("Error: {}", e));
                }
                tracing::debug!("Exiting after error: {:?}", e);
                1
            }
        }
    }
}
