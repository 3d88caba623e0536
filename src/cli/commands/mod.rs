//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands. Any failure is returned as an error
//! and becomes exit code 1 in `main`.

pub mod run;

pub use run::RunCommand;

use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
