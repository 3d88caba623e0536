//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use dnspy_setup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Starting setup");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"Starting setup".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::RunSummary;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
    summaries: Vec<RunSummary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner finished, in finishing order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Get all captured run summaries.
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown, directly or by a spinner.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
            || self
                .spinner_results
                .borrow()
                .iter()
                .any(|(s, m)| *s == SpinnerStatus::Success && m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::reporting_to(Rc::clone(&self.spinner_results)))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished as skipped.
    Skipped,
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
    sink: Option<Rc<RefCell<Vec<(SpinnerStatus, String)>>>>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    fn reporting_to(sink: Rc<RefCell<Vec<(SpinnerStatus, String)>>>) -> Self {
        Self {
            sink: Some(sink),
            ..Default::default()
        }
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
        if let Some(sink) = &self.sink {
            sink.borrow_mut().push((status, msg.to_string()));
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Skipped, msg);
    }
}
