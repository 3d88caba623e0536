//! External command execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, run_checked, CommandOptions, CommandResult, CommandRunner, CommandSpec, SystemRunner,
};
pub use mock::{MockResponse, MockRunner, RecordedCall};
pub use platform::{is_ci, is_elevated, OsKind};
