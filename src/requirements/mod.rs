//! Host tool requirements.
//!
//! Every install needs Node.js, Composer, WP-CLI and Git. They are checked
//! in that order before anything is cloned.
//!
//! # Modules
//!
//! - [`registry`] - The fixed set of requirements and their check commands
//! - [`status`] - Present/missing classification results
//! - [`checker`] - Runs the checks through a command runner

pub mod checker;
pub mod registry;
pub mod status;

pub use checker::RequirementChecker;
pub use registry::Requirement;
pub use status::{extract_version, RequirementStatus};
