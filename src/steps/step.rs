//! Step definition.

use std::fmt;

use crate::error::Result;

/// Deferred unit of work run by a [`Step`].
pub type StepAction<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

/// One named unit of pipeline work.
///
/// Steps are fatal unless built with [`Step::non_fatal`].
pub struct Step<'a> {
    /// Shown next to the spinner and in failure messages.
    pub description: String,
    /// Work to run. `None` is a construction bug and always fails the step.
    pub action: Option<StepAction<'a>>,
    /// Whether a failure halts the pipeline.
    pub fatal: bool,
}

impl<'a> Step<'a> {
    /// A fatal step.
    pub fn new(description: impl Into<String>, action: impl FnOnce() -> Result<()> + 'a) -> Self {
        Self {
            description: description.into(),
            action: Some(Box::new(action)),
            fatal: true,
        }
    }

    /// A step whose failure is reported but does not halt the pipeline.
    pub fn non_fatal(
        description: impl Into<String>,
        action: impl FnOnce() -> Result<()> + 'a,
    ) -> Self {
        Self {
            fatal: false,
            ..Self::new(description, action)
        }
    }

    /// A step with nothing to run.
    pub fn without_action(description: impl Into<String>, fatal: bool) -> Self {
        Self {
            description: description.into(),
            action: None,
            fatal,
        }
    }
}

impl fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("description", &self.description)
            .field("has_action", &self.action.is_some())
            .field("fatal", &self.fatal)
            .finish()
    }
}
