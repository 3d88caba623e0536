//! Repository checkout and build.

pub mod build;
pub mod clone;

pub use build::{build, build_command};
pub use clone::{clone_command, ensure_cloned, CloneOutcome};
