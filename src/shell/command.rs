//! External command execution.
//!
//! Commands are spawned directly from an argument vector rather than
//! through a shell, so package names and URLs never need quoting. The
//! working directory is always passed per command; the process-wide
//! current directory is never changed.

use crate::error::{Result, SetupError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name, resolved through PATH.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Prefix this command with another program (e.g. `sudo`).
    pub fn prefixed(self, program: &str) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: program.to_string(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Capture both streams, optionally in a working directory.
    pub fn captured(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            capture_stdout: true,
            capture_stderr: true,
        }
    }

    /// Inherit both streams so the user sees the tool's own output.
    pub fn inherited(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            ..Default::default()
        }
    }
}

/// Something that can run external commands.
///
/// Every step that touches a subprocess goes through this trait, so the
/// whole setup sequence can be exercised with [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// Returns `Err(CommandFailed { code: None })` only when the program
    /// could not be started; a non-zero exit is an `Ok` failure result.
    fn run(&self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
        execute(spec, options)
    }
}

/// Execute a command, blocking until it exits.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!(command = %spec, cwd = ?options.cwd, "spawning");

    let output = cmd.output().map_err(|e| {
        tracing::debug!("failed to start '{}': {}", spec.program, e);
        SetupError::CommandFailed {
            command: spec.to_string(),
            code: None,
        }
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Run a command and turn a non-zero exit into [`SetupError::CommandFailed`].
pub fn run_checked(
    runner: &dyn CommandRunner,
    spec: &CommandSpec,
    options: &CommandOptions,
) -> Result<CommandResult> {
    let result = runner.run(spec, options)?;
    if result.success {
        Ok(result)
    } else {
        Err(SetupError::CommandFailed {
            command: spec.to_string(),
            code: result.exit_code,
        })
    }
}
