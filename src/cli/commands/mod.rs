//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the
//! `theme` and `plugin` subcommands to a [`SetupCommand`] for that kind.

pub mod dispatcher;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use setup::SetupCommand;
