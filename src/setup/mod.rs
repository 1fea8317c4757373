//! Interactive configuration of the downstream setup command.
//!
//! After an install in an interactive terminal, a short decision tree asks
//! how the boilerplate should be configured and compiles the answers into
//! a `wp boilerplate init ...` command for the user to run.
//!
//! - [`choice`] - The answers and their enums
//! - [`questions`] - The question tree as data
//! - [`params`] - Pure compilation into a command
//! - [`resolver`] - Runs the tree against a UI
//!
//! # Example
//!
//! ```
//! use eightshift_create::install::TargetKind;
//! use eightshift_create::setup::{compile, SetupChoice, SetupPlan, SetupType};
//!
//! let choice = SetupChoice {
//!     setup_type: SetupType::Fast,
//!     project_name: Some("Acme".to_string()),
//!     ..Default::default()
//! };
//! let plan = compile(TargetKind::Theme, &choice, "wp boilerplate init");
//! assert_eq!(
//!     plan,
//!     SetupPlan::Run { command: "wp boilerplate init theme-setup --g_project_name='Acme'".to_string() }
//! );
//! ```

pub mod choice;
pub mod params;
pub mod questions;
pub mod resolver;

pub use choice::{FrontendLibsType, SetupChoice, SetupType};
pub use params::{command_name, compile, compile_params, prompt_flag, SetupPlan};
pub use questions::{QuestionContext, QUESTIONS};
pub use resolver::{ConfigurationResolver, READY_TITLE};
