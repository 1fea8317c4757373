//! Interactive configuration resolver.

use crate::error::{CreateError, Result};
use crate::setup::choice::SetupChoice;
use crate::setup::params::{compile, SetupPlan};
use crate::setup::questions::{Answer, QuestionContext, QUESTIONS};
use crate::ui::{Alert, AlertKind, UserInterface};

/// How often a rejected answer is asked again before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Title of the alert shown when a setup command is ready.
pub const READY_TITLE: &str = "Boilerplate setup is ready for you!";

/// Walks the question tree and prints the resulting setup command.
pub struct ConfigurationResolver<'a> {
    context: QuestionContext<'a>,
    base_command: &'a str,
}

impl<'a> ConfigurationResolver<'a> {
    /// `base_command` is the downstream entry point (`wp boilerplate init`).
    pub fn new(context: QuestionContext<'a>, base_command: &'a str) -> Self {
        Self {
            context,
            base_command,
        }
    }

    /// Ask every question whose predicate holds for the answers so far.
    ///
    /// # Errors
    ///
    /// Returns `PromptFailed` when reading an answer fails or an answer is
    /// rejected [`MAX_ATTEMPTS`] times in a row.
    pub fn collect(&self, ui: &mut dyn UserInterface) -> Result<SetupChoice> {
        let mut choice = SetupChoice::default();

        for question in QUESTIONS.iter() {
            if !(question.asked_when)(&choice) {
                tracing::debug!("Skipping question {}", question.key);
                continue;
            }

            let prompt = (question.prompt)(&self.context);
            let mut attempts = 0;
            loop {
                attempts += 1;
                let answer = ui.prompt(&prompt)?;
                match (question.apply)(&mut choice, &answer)? {
                    Answer::Accepted => break,
                    Answer::Rejected(reason) if attempts < MAX_ATTEMPTS => ui.warning(&reason),
                    Answer::Rejected(reason) => {
                        return Err(CreateError::PromptFailed {
                            key: question.key.to_string(),
                            message: reason,
                        })
                    }
                }
            }
        }

        Ok(choice)
    }

    /// Collect answers, then show the follow-up.
    ///
    /// Never fails: a prompt error is logged and reported as a warning,
    /// and `None` is returned.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Option<SetupPlan> {
        match self.collect(ui) {
            Ok(choice) => {
                let plan = compile(self.context.kind, &choice, self.base_command);
                self.render(&choice, &plan, ui);
                Some(plan)
            }
            Err(e) => {
                tracing::warn!("Interactive setup aborted: {}", e);
                ui.warning(&format!("Interactive setup aborted: {}", e));
                None
            }
        }
    }

    fn render(&self, choice: &SetupChoice, plan: &SetupPlan, ui: &mut dyn UserInterface) {
        let kind = self.context.kind;

        let alert = match plan {
            SetupPlan::Run { command } => Alert::new(AlertKind::Success, READY_TITLE)
                .line("To finish your setup please run the following command:")
                .line("")
                .line(command.clone()),
            SetupPlan::Manual => Alert::new(AlertKind::Info, "Manual setup")
                .line(format!(
                    "The {} is installed, configure everything yourself.",
                    kind
                ))
                .line(format!(
                    "Run `{} --help` to list the available setup commands.",
                    self.base_command
                )),
        };
        ui.show_alert(&alert);

        if !choice.precondition_confirmed {
            ui.warning(&format!(
                "Please deactivate all other {}s before running the setup command.",
                kind
            ));
        }
    }
}
