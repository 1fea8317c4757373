//! eightshift-create - Scaffold Eightshift boilerplate themes and plugins.
//!
//! Run from anywhere inside a WordPress project, `eightshift-create theme`
//! (or `plugin`) checks the host tools, clones the boilerplate into
//! `wp-content`, activates it, installs its Composer packages and then
//! helps the user pick the setup command to finish with.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional settings file
//! - [`detection`] - Project root lookup and existing-install checks
//! - [`error`] - Error types and result aliases
//! - [`install`] - The install pipeline
//! - [`requirements`] - Host tool checks
//! - [`setup`] - Interactive setup questions and command compilation
//! - [`shell`] - Shell command execution
//! - [`steps`] - Labelled, fatal or non-fatal units of work
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use eightshift_create::install::TargetKind;
//! use eightshift_create::setup::{compile, SetupChoice, SetupPlan, SetupType};
//!
//! let choice = SetupChoice {
//!     precondition_confirmed: true,
//!     setup_type: SetupType::Fast,
//!     project_name: Some("Acme".to_string()),
//!     ..SetupChoice::default()
//! };
//! let plan = compile(TargetKind::Theme, &choice, "wp boilerplate init");
//! assert_eq!(
//!     plan,
//!     SetupPlan::Run {
//!         command: "wp boilerplate init theme-setup --g_project_name='Acme'".to_string()
//!     }
//! );
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod install;
pub mod requirements;
pub mod setup;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{CreateError, Result};
