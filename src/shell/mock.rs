//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are matched by command-line prefix in the order they were
//! registered, and every call is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use dnspy_setup::shell::{CommandOptions, CommandRunner, CommandSpec, MockResponse, MockRunner};
//!
//! let runner = MockRunner::new().on("dotnet --version", MockResponse::stdout("8.0.101\n"));
//!
//! let spec = CommandSpec::new("dotnet").arg("--version");
//! let result = runner.run(&spec, &CommandOptions::captured(None)).unwrap();
//! assert_eq!(result.stdout, "8.0.101\n");
//! assert!(runner.ran("dotnet --version"));
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::command::{CommandOptions, CommandResult, CommandRunner, CommandSpec};

/// Scripted outcome for a matched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Exit 0 with the given stdout.
    Success { stdout: String },
    /// Exit with a non-zero code.
    Exit { code: i32 },
    /// The program could not be started.
    NotFound,
}

impl MockResponse {
    /// Exit 0 with the given stdout.
    pub fn stdout(text: &str) -> Self {
        Self::Success {
            stdout: text.to_string(),
        }
    }

    /// Exit 0 with no output.
    pub fn ok() -> Self {
        Self::stdout("")
    }

    /// Exit with `code`.
    pub fn exit(code: i32) -> Self {
        Self::Exit { code }
    }
}

/// A command the mock was asked to run.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The command as requested.
    pub spec: CommandSpec,
    /// Working directory it was requested in.
    pub cwd: Option<PathBuf>,
}

/// Mock command runner.
#[derive(Debug)]
pub struct MockRunner {
    rules: Vec<(String, MockResponse)>,
    fallback: MockResponse,
    calls: RefCell<Vec<RecordedCall>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    /// Create a runner where every command succeeds with empty output.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: MockResponse::ok(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Respond to commands whose rendered line starts with `prefix`.
    pub fn on(mut self, prefix: &str, response: MockResponse) -> Self {
        self.rules.push((prefix.to_string(), response));
        self
    }

    /// Response for commands no rule matches.
    pub fn otherwise(mut self, response: MockResponse) -> Self {
        self.fallback = response;
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.spec.to_string())
            .collect()
    }

    /// Whether any recorded command line starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.command_lines().iter().any(|l| l.starts_with(prefix))
    }

    fn response_for(&self, line: &str) -> &MockResponse {
        self.rules
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, r)| r)
            .unwrap_or(&self.fallback)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            spec: spec.clone(),
            cwd: options.cwd.clone(),
        });

        let line = spec.to_string();
        match self.response_for(&line) {
            MockResponse::Success { stdout } => Ok(CommandResult::success(
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            )),
            MockResponse::Exit { code } => Ok(CommandResult::failure(
                Some(*code),
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            MockResponse::NotFound => Err(SetupError::CommandFailed {
                command: line,
                code: None,
            }),
        }
    }
}
