//! Pipeline steps.
//!
//! - [`Step`] - A described, deferred unit of work with a fatal flag
//! - [`StepRunner`] - Runs a step behind a spinner and applies its policy
//! - [`StepOutcome`] - What a step that did not halt the pipeline did
//!
//! # Example
//!
//! ```
//! use eightshift_create::steps::{Step, StepRunner};
//! use eightshift_create::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! let outcome = StepRunner::run(Step::new("Say hello", || Ok(())), &mut ui).unwrap();
//! assert!(outcome.is_completed());
//! ```

pub mod runner;
pub mod step;

pub use runner::{StepOutcome, StepRunner};
pub use step::{Step, StepAction};
