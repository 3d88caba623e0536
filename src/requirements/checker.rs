//! Startup precondition check.
//!
//! Every required executable is looked up on PATH before any step runs.
//! Missing tools are reported together and the run stops; nothing is
//! installed on the user's behalf.

use std::path::PathBuf;

use crate::error::{Result, SetupError};

use super::probe::{parse_system_path, resolve_tool_path};

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// Found at this path.
    Found(PathBuf),
    /// Not on PATH.
    Missing,
}

impl RequirementStatus {
    /// Whether the requirement was found.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Found(_))
    }
}

/// The status of one named requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCheck {
    /// Requirement name, looked up verbatim.
    pub requirement: String,
    /// Whether and where it was found.
    pub status: RequirementStatus,
}

/// Check each name against the given PATH entries, preserving order.
pub fn check_requirements(names: &[String], path_entries: &[PathBuf]) -> Vec<RequirementCheck> {
    names
        .iter()
        .map(|name| {
            let status = match resolve_tool_path(name, path_entries) {
                Some(path) => RequirementStatus::Found(path),
                None => RequirementStatus::Missing,
            };
            tracing::debug!(requirement = %name, ?status, "checked requirement");
            RequirementCheck {
                requirement: name.clone(),
                status,
            }
        })
        .collect()
}

/// Fail with `RequirementMissing` naming every unresolved requirement.
pub fn ensure_requirements(checks: &[RequirementCheck]) -> Result<()> {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|c| !c.status.is_satisfied())
        .map(|c| c.requirement.as_str())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(SetupError::RequirementMissing {
        requirement: missing.join(", "),
        message: format!(
            "Not found on PATH: {}. Install {} and re-run.",
            missing.join(", "),
            if missing.len() == 1 { "it" } else { "them" }
        ),
    })
}

/// Check `names` against the real PATH and fail fast on any gap.
pub fn ensure_on_path(names: &[String]) -> Result<Vec<RequirementCheck>> {
    let checks = check_requirements(names, &parse_system_path());
    ensure_requirements(&checks)?;
    Ok(checks)
}
