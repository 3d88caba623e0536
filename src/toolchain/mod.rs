//! Toolchain inspection, version comparison, and installation.
//!
//! - [`inspect`] - Ask the installed toolchain for its version
//! - [`version`] - Prefix comparison against the latest version
//! - [`installer`] - Per-platform install plans and their execution

pub mod inspect;
pub mod installer;
pub mod version;

pub use inspect::{inspect_installed, version_command};
pub use installer::{execute_plan, plan_install, InstallOutcome, InstallPlan};
pub use version::{compare, major_minor, VersionStatus};
