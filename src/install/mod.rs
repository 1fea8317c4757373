//! Boilerplate installation.
//!
//! - [`target`] - Per-kind conventions and the resolved install target
//! - [`actions`] - Clone, activate and dependency-install commands
//! - [`message`] - The static follow-up instructions
//! - [`orchestrator`] - The ordered pipeline tying everything together

pub mod actions;
pub mod message;
pub mod orchestrator;
pub mod target;

pub use message::{follow_up_alert, follow_up_commands, follow_up_params};
pub use orchestrator::{FollowUp, InstallReport, Orchestrator, BANNER};
pub use target::{InstallTarget, TargetKind, TargetOptions};
