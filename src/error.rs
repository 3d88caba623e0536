//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected absence (toolchain not installed, version not on the page) is
//!   an `Option`, never an error
//! - Use `SetupError` for failures that abort the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// One or more required tools are not on PATH.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// The running platform has no install strategy.
    #[error("Unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
