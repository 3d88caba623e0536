//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use dnspy_setup::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("dnSpy setup");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

use crate::runner::RunSummary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the end-of-run summary.
    fn show_run_summary(&mut self, summary: &RunSummary);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}
