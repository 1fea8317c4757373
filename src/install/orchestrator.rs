//! The install pipeline.
//!
//! `Locate root -> Banner -> Check conflict -> Verify requirements ->
//! Clone -> Activate (non-fatal) -> Install dependencies -> Follow-up`.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
use crate::detection::{remove_existing, resolve_conflict, ConflictResolution};
use crate::error::Result;
use crate::install::actions;
use crate::install::message::follow_up_alert;
use crate::install::target::{InstallTarget, TargetKind, TargetOptions};
use crate::requirements::RequirementChecker;
use crate::setup::{ConfigurationResolver, QuestionContext, SetupPlan};
use crate::shell::CommandRunner;
use crate::steps::{Step, StepOutcome, StepRunner};
use crate::ui::UserInterface;

/// Banner title.
pub const BANNER: &str = "Eightshift DevKit";

/// How the run ended its follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// The static two-command message was shown.
    Message,
    /// The interactive resolver produced a plan.
    Resolved(SetupPlan),
    /// The interactive resolver was aborted.
    Aborted,
}

/// What a successful run did.
#[derive(Debug)]
pub struct InstallReport {
    pub target: InstallTarget,
    pub conflict: ConflictResolution,
    /// Step descriptions with their outcomes, in run order.
    pub steps: Vec<(String, StepOutcome)>,
    pub follow_up: FollowUp,
}

impl InstallReport {
    /// Descriptions of non-fatal steps that failed.
    pub fn failed_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|(_, outcome)| !outcome.is_completed())
            .map(|(description, _)| description.as_str())
            .collect()
    }
}

/// Runs the install pipeline for one target kind.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
    kind: TargetKind,
    options: TargetOptions,
    start_dir: PathBuf,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        settings: &'a Settings,
        runner: &'a dyn CommandRunner,
        kind: TargetKind,
        options: TargetOptions,
        start_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            settings,
            runner,
            kind,
            options,
            start_dir: start_dir.into(),
        }
    }

    /// Run every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first environment error (`ProjectRootNotFound`,
    /// `SetupExists`) or the `StepFailed` of the first fatal step that
    /// failed. Nothing after that point runs.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallReport> {
        let target = InstallTarget::resolve(
            self.kind,
            &self.options,
            &self.start_dir,
            &self.settings.sentinel,
        )?;
        tracing::debug!("Resolved target: {:?}", target);

        ui.show_header(BANNER);
        ui.message("Thank you for using Eightshift DevKit!");

        let conflict = resolve_conflict(
            &target.output_path,
            self.kind.as_str(),
            self.settings.on_conflict,
        )?;
        if conflict == ConflictResolution::Replace {
            ui.warning(&format!(
                "The existing {} at {} will be replaced",
                self.kind,
                target.output_path.display()
            ));
        }

        let mut steps = Vec::new();
        let mut run_step = |step: Step<'_>, ui: &mut dyn UserInterface| -> Result<()> {
            let description = step.description.clone();
            let outcome = StepRunner::run(step, ui)?;
            steps.push((description, outcome));
            Ok(())
        };

        let checker = RequirementChecker::new(self.runner, self.settings.requirement_check);
        run_step(
            Step::new("Checking minimal requirements", || {
                for (requirement, status) in checker.verify_all()? {
                    tracing::debug!("{}: {:?}", requirement, status);
                }
                Ok(())
            }),
            ui,
        )?;

        run_step(
            Step::new(
                format!("Cloning the boilerplate {} setup repository", self.kind),
                || {
                    if conflict == ConflictResolution::Replace {
                        remove_existing(&target.output_path)?;
                    }
                    actions::clone_repository(
                        self.runner,
                        &target.repo_url,
                        &target.repo_branch,
                        &target.output_path,
                        Duration::from_secs(self.settings.clone_timeout),
                    )
                },
            ),
            ui,
        )?;

        run_step(
            Step::non_fatal(format!("Activating your setup {}", self.kind), || {
                actions::activate(
                    self.runner,
                    self.kind,
                    &target.artifact_name,
                    &target.project_root,
                )
            }),
            ui,
        )?;

        run_step(
            Step::new("Installing boilerplate setup Composer packages", || {
                actions::install_dependencies(
                    self.runner,
                    &self.settings.libs_package,
                    target.libs_branch(),
                    &target.output_path,
                )
            }),
            ui,
        )?;

        let scripted = !ui.is_interactive() && ui.has_prompt_answers();
        let follow_up = if ui.is_interactive() || scripted {
            let resolver = ConfigurationResolver::new(
                QuestionContext {
                    kind: self.kind,
                    libs_branch: target.libs_branch(),
                    frontend_libs_branch: target.frontend_libs_branch(),
                },
                &self.settings.follow_up_command,
            );
            match resolver.run(ui) {
                Some(plan) => FollowUp::Resolved(plan),
                None if scripted => {
                    ui.show_alert(&follow_up_alert(&target, &self.settings.follow_up_command));
                    FollowUp::Message
                }
                None => FollowUp::Aborted,
            }
        } else {
            ui.show_alert(&follow_up_alert(&target, &self.settings.follow_up_command));
            FollowUp::Message
        };

        Ok(InstallReport {
            target,
            conflict,
            steps,
            follow_up,
        })
    }
}
