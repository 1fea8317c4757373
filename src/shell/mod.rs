//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, shell_quote, CommandOptions, CommandResult, OutputLine};
pub use mock::{MockResponse, MockRunner, RecordedCall};
pub use platform::is_ci;
pub use runner::{CommandRunner, SystemRunner};
