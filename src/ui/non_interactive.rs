//! Non-interactive UI for CI/headless environments.

use crate::runner::RunSummary;

use super::progress::format_duration;
use super::theme::SetupTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners become a single line when started and a single line when
/// finished, so logs stay readable in CI.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", SetupTheme::plain().format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", SetupTheme::plain().format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", SetupTheme::plain().format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        println!();
        println!("  ┌─ Summary ──────────────────────────");
        for (label, value) in summary.rows() {
            println!("  │ {:<12} {}", label, value);
        }
        println!("  ├────────────────────────────────────");
        println!("  │ Total: {}", format_duration(summary.duration));
        println!("  └────────────────────────────────────");
    }
}

/// Spinner that prints its outcome as a plain line.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", SetupTheme::plain().format_success(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("{}", SetupTheme::plain().format_skipped(msg));
    }
}
