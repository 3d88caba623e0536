//! Variable interpolation for templates.
//!
//! Install templates and the status report use `${variable}` syntax.
//!
//! # Syntax
//!
//! - `${variable_name}` - replaced with variable value
//! - `$${escaped}` - produces literal `${escaped}` in output
//!
//! # Example
//!
//! ```
//! use dnspy_setup::config::{resolve_string, InterpolationContext};
//!
//! let ctx = InterpolationContext::new()
//!     .with("toolchain", "dotnet")
//!     .with("version", "8.0");
//! let package = resolve_string("${toolchain}-sdk-${version}", &ctx).unwrap();
//! assert_eq!(package, "dotnet-sdk-8.0");
//! ```

use crate::error::{Result, SetupError};
use std::collections::{HashMap, HashSet};

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing ${var} interpolations.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    for c in chars.by_ref() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push('$');
                }
            }
            Some('{') => {
                chars.next();

                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                segments.push(Segment::Variable(var_name));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Extract all variable names from an interpolated string.
pub fn extract_variables(input: &str) -> HashSet<String> {
    parse_interpolation(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Variables available to a template.
#[derive(Debug, Default, Clone)]
pub struct InterpolationContext {
    vars: HashMap<String, String>,
}

impl InterpolationContext {
    /// Create a context holding only the built-in `setup_version`.
    pub fn new() -> Self {
        let mut vars = HashMap::new();
        vars.insert(
            "setup_version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Self { vars }
    }

    /// Add or replace a variable.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }

    /// Resolve a variable name to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Resolve all variables in an interpolated string.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any variable is not found in the context.
pub fn resolve_string(input: &str, context: &InterpolationContext) -> Result<String> {
    let mut result = String::with_capacity(input.len());

    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => {
                let value =
                    context
                        .resolve(&name)
                        .ok_or_else(|| SetupError::ConfigValidationError {
                            message: format!("Unresolved variable: ${{{}}}", name),
                        })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literal_only() {
        let result = parse_interpolation("hello world");
        assert_eq!(result, vec![Segment::Literal("hello world".to_string())]);
    }

    #[test]
    fn parse_variable_with_surrounding_text() {
        let result = parse_interpolation("net${version}-windows");
        assert_eq!(
            result,
            vec![
                Segment::Literal("net".to_string()),
                Segment::Variable("version".to_string()),
                Segment::Literal("-windows".to_string()),
            ]
        );
    }

    #[test]
    fn parse_escaped_variable() {
        let result = parse_interpolation("$${HOME}/bin");
        assert_eq!(result, vec![Segment::Literal("${HOME}/bin".to_string())]);
    }

    #[test]
    fn lone_dollar_is_literal() {
        let result = parse_interpolation("costs $5");
        assert_eq!(result, vec![Segment::Literal("costs $5".to_string())]);
    }

    #[test]
    fn extract_variables_is_unique() {
        let vars = extract_variables("${version} v${version} ${repo_dir}");
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("version"));
        assert!(vars.contains("repo_dir"));
    }

    #[test]
    fn resolve_replaces_every_occurrence() {
        let ctx = InterpolationContext::new().with("version", "8.0");
        let out = resolve_string("v${version} net${version}-windows", &ctx).unwrap();
        assert_eq!(out, "v8.0 net8.0-windows");
    }

    #[test]
    fn resolve_missing_variable_fails() {
        let ctx = InterpolationContext::new();
        let err = resolve_string("${nope}", &ctx).unwrap_err();
        assert!(err.to_string().contains("${nope}"));
    }

    #[test]
    fn builtin_setup_version_is_available() {
        let ctx = InterpolationContext::new();
        assert_eq!(ctx.resolve("setup_version"), Some(env!("CARGO_PKG_VERSION")));
    }
}
