//! Step execution with progress and failure policy.

use std::time::Instant;

use crate::error::{CreateError, Result};
use crate::steps::step::Step;
use crate::ui::UserInterface;

/// How a step that did not halt the pipeline ended.
#[derive(Debug)]
pub enum StepOutcome {
    /// The action succeeded.
    Completed,
    /// The action failed but the step was non-fatal.
    FailedNonFatal {
        /// The swallowed error.
        error: CreateError,
    },
}

impl StepOutcome {
    /// Whether the action succeeded.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Runs steps one at a time against a UI.
pub struct StepRunner;

impl StepRunner {
    /// Run a single step.
    ///
    /// # Errors
    ///
    /// Returns `MissingStepAction` for a step without an action, whatever
    /// its `fatal` flag. Returns `StepFailed` wrapping the action's error
    /// when a fatal step fails.
    pub fn run(step: Step<'_>, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
        let Step {
            description,
            action,
            fatal,
        } = step;

        let mut spinner = ui.start_spinner(&description);

        let Some(action) = action else {
            spinner.finish_error(&description);
            return Err(CreateError::MissingStepAction { step: description });
        };

        let start = Instant::now();
        match action() {
            Ok(()) => {
                spinner.finish_success(&description);
                tracing::info!("{} finished in {:?}", description, start.elapsed());
                Ok(StepOutcome::Completed)
            }
            Err(error) => {
                spinner.finish_error(&description);
                ui.error(&error.to_string());

                if fatal {
                    ui.error(&format!("'{}' was a required step, exiting.", description));
                    Err(CreateError::StepFailed {
                        step: description,
                        source: Box::new(error),
                    })
                } else {
                    tracing::warn!("{} failed, continuing: {}", description, error);
                    Ok(StepOutcome::FailedNonFatal { error })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, SpinnerStatus};
    use std::cell::Cell;

    fn failing() -> Result<()> {
        Err(CreateError::CommandFailed {
            command: "git clone".to_string(),
            code: Some(128),
            stderr: "fatal: repository not found".to_string(),
        })
    }

    #[test]
    fn successful_step_completes() {
        let mut ui = MockUI::new();
        let ran = Cell::new(false);

        let outcome = StepRunner::run(
            Step::new("Cloning repo", || {
                ran.set(true);
                Ok(())
            }),
            &mut ui,
        )
        .unwrap();

        assert!(outcome.is_completed());
        assert!(ran.get());
        assert_eq!(
            ui.spinner_results(),
            vec![("Cloning repo".to_string(), SpinnerStatus::Success)]
        );
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn fatal_failure_returns_step_failed() {
        let mut ui = MockUI::new();

        let err = StepRunner::run(Step::new("Cloning repo", failing), &mut ui).unwrap_err();

        match err {
            CreateError::StepFailed { step, source } => {
                assert_eq!(step, "Cloning repo");
                assert!(matches!(*source, CreateError::CommandFailed { .. }));
            }
            other => panic!("Expected StepFailed, got {:?}", other),
        }
        assert!(ui.has_error("repository not found"));
        assert!(ui.has_error("'Cloning repo' was a required step, exiting."));
        assert_eq!(
            ui.spinner_results(),
            vec![("Cloning repo".to_string(), SpinnerStatus::Error)]
        );
    }

    #[test]
    fn non_fatal_failure_is_swallowed() {
        let mut ui = MockUI::new();

        let outcome = StepRunner::run(Step::non_fatal("Activating theme", failing), &mut ui).unwrap();

        assert!(matches!(outcome, StepOutcome::FailedNonFatal { .. }));
        assert!(ui.has_error("repository not found"));
        assert!(!ui.has_error("required step"));
    }

    #[test]
    fn missing_action_fails_regardless_of_fatal_flag() {
        for fatal in [true, false] {
            let mut ui = MockUI::new();

            let err = StepRunner::run(Step::without_action("Empty", fatal), &mut ui).unwrap_err();

            assert!(matches!(err, CreateError::MissingStepAction { .. }));
            assert_eq!(
                ui.spinner_results(),
                vec![("Empty".to_string(), SpinnerStatus::Error)]
            );
        }
    }

    #[test]
    fn fatal_failure_stops_later_steps() {
        let mut ui = MockUI::new();
        let later_ran = Cell::new(false);

        let pipeline = |ui: &mut dyn UserInterface| -> Result<()> {
            StepRunner::run(Step::new("Cloning repo", failing), ui)?;
            StepRunner::run(
                Step::new("Installing dependencies", || {
                    later_ran.set(true);
                    Ok(())
                }),
                ui,
            )?;
            Ok(())
        };

        assert!(pipeline(&mut ui).is_err());
        assert!(!later_ran.get());
        assert_eq!(ui.spinners(), &["Cloning repo"]);
    }

    #[test]
    fn non_fatal_failure_lets_later_steps_run() {
        let mut ui = MockUI::new();
        let later_ran = Cell::new(false);

        let pipeline = |ui: &mut dyn UserInterface| -> Result<()> {
            StepRunner::run(Step::non_fatal("Activating theme", failing), ui)?;
            StepRunner::run(
                Step::new("Installing dependencies", || {
                    later_ran.set(true);
                    Ok(())
                }),
                ui,
            )?;
            Ok(())
        };

        assert!(pipeline(&mut ui).is_ok());
        assert!(later_ran.get());
    }
}
