//! dnspy-setup - Bootstrap a .NET toolchain and build dnSpy from source.
//!
//! A single run checks that required tools are on PATH, compares the
//! installed .NET SDK against the newest one linked from the vendor's
//! download page, installs it when needed, clones and builds dnSpy, and
//! writes a short report next to the checkout.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration with built-in defaults
//! - [`error`] - Error types and result aliases
//! - [`latest`] - Latest-version lookup
//! - [`repo`] - Repository clone and build
//! - [`report`] - Report rendering and writing
//! - [`requirements`] - Required-tool detection
//! - [`runner`] - Setup workflow orchestration
//! - [`shell`] - Command execution and platform detection
//! - [`toolchain`] - Toolchain inspection, comparison, and installation
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use dnspy_setup::toolchain::{compare, VersionStatus};
//!
//! // An installed 8.0 patch release satisfies a latest of 8.0
//! assert_eq!(compare(Some("8.0.101"), "8.0"), VersionStatus::Current);
//! assert_eq!(compare(None, "8.0"), VersionStatus::NeedsUpdate);
//! ```
//!
//! For an end-to-end run against mocks, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod latest;
pub mod repo;
pub mod report;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{Result, SetupError};
