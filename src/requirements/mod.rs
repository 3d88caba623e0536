//! Required-tool detection.
//!
//! The helper libraries the setup needs (HTTP client, HTML parser, regex
//! engine) are linked into the binary, so only external executables are
//! checked at runtime.
//!
//! # Modules
//!
//! - [`probe`] - PATH walking and executable detection
//! - [`checker`] - Fail-fast precondition check over a list of names

pub mod checker;
pub mod probe;

pub use checker::{
    check_requirements, ensure_on_path, ensure_requirements, RequirementCheck, RequirementStatus,
};
pub use probe::{parse_system_path, resolve_tool_path};
