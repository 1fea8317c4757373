//! The `theme` and `plugin` commands.

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::install::{Orchestrator, TargetKind, TargetOptions};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Installs one boilerplate kind.
pub struct SetupCommand<'a> {
    kind: TargetKind,
    args: SetupArgs,
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
    start_dir: PathBuf,
}

impl<'a> SetupCommand<'a> {
    /// Create the command for `kind`, searching for the project from `start_dir`.
    pub fn new(
        kind: TargetKind,
        args: SetupArgs,
        settings: &'a Settings,
        runner: &'a dyn CommandRunner,
        start_dir: &Path,
    ) -> Self {
        Self {
            kind,
            args,
            settings,
            runner,
            start_dir: start_dir.to_path_buf(),
        }
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let orchestrator = Orchestrator::new(
            self.settings,
            self.runner,
            self.kind,
            TargetOptions::from(&self.args),
            &self.start_dir,
        );
        let report = orchestrator.run(ui)?;

        for step in report.failed_steps() {
            ui.warning(&format!("'{}' failed, you can finish it manually.", step));
        }
        ui.success(&format!(
            "Boilerplate {} installed at {}",
            self.kind,
            report.target.output_path.display()
        ));

        Ok(CommandResult::success())
    }
}
