//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Commands, URLs and paths must not be empty
//! - The clone destination and the report must stay inside the project root
//! - The version pattern must be a valid regex
//! - Install templates may only reference known variables

use crate::config::interpolation::extract_variables;
use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::path::{Component, Path};

/// Variables available to install templates.
pub const INSTALL_VARIABLES: &[&str] = &["toolchain", "version", "setup_version"];

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.toolchain.command.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-command",
            "toolchain.command must not be empty",
        ));
    }

    if !is_http_url(&config.latest.url) {
        errors.push(ValidationError::new(
            "invalid-url",
            format!("latest.url must be an http(s) URL, got '{}'", config.latest.url),
        ));
    }

    if let Err(e) = regex::Regex::new(&config.latest.version_pattern) {
        errors.push(ValidationError::new(
            "invalid-pattern",
            format!("latest.version_pattern is not a valid regex: {}", e),
        ));
    }

    for (field, template) in [
        ("install.package", &config.install.package),
        ("install.manual_url", &config.install.manual_url),
    ] {
        for var in extract_variables(template) {
            if !INSTALL_VARIABLES.contains(&var.as_str()) {
                errors.push(ValidationError::new(
                    "unknown-variable",
                    format!("{} references unknown variable ${{{}}}", field, var),
                ));
            }
        }
    }

    if config.repository.url.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-url",
            "repository.url must not be empty",
        ));
    }

    if !is_contained_relative(&config.repository.directory) {
        errors.push(ValidationError::new(
            "invalid-directory",
            format!(
                "repository.directory must be a relative path inside the project, got '{}'",
                config.repository.directory.display()
            ),
        ));
    }

    if !is_contained_relative(&config.report.path) {
        errors.push(ValidationError::new(
            "invalid-report-path",
            format!(
                "report.path must be a relative path inside the project, got '{}'",
                config.report.path.display()
            ),
        ));
    }

    errors
}

/// Validate and fold all errors into a single `ConfigValidationError`.
pub fn ensure_valid(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(SetupError::ConfigValidationError { message })
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn is_contained_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
