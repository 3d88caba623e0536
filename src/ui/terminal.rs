//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::runner::RunSummary;

use super::progress::format_duration;
use super::{
    NonInteractiveUI, OutputMode, ProgressSpinner, SetupTheme, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: SetupTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message))
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Summary ──────────────────────────")
        )
        .ok();

        for (label, value) in summary.rows() {
            writeln!(
                self.term,
                "  {} {} {}",
                b.apply_to("│"),
                self.theme.key.apply_to(format!("{:<12}", label)),
                value,
            )
            .ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} Total: {}",
            b.apply_to("│"),
            self.theme.dim.apply_to(format_duration(summary.duration)),
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
