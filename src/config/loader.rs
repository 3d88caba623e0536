//! Configuration file discovery and loading.
//!
//! The config file is optional. Resolution order:
//!
//! 1. An explicit `--config <path>` (must exist)
//! 2. `<project>/.dnspy-setup.yml` (used when present)
//! 3. Built-in defaults

use crate::config::schema::SetupConfig;
use crate::config::validator::ensure_valid;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".dnspy-setup.yml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file.
    File(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

/// Find the project config file, if one exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into `SetupConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `SetupConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve, load, and validate the effective configuration.
pub fn load_config(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<(SetupConfig, ConfigSource)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_config(project_root),
    };

    let (config, source) = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            (load_config_file(&path)?, ConfigSource::File(path))
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            (SetupConfig::default(), ConfigSource::Defaults)
        }
    };

    ensure_valid(&config)?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_config(temp.path(), None).unwrap();
        assert_eq!(config, SetupConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn discovers_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "repository:\n  directory: build/dnSpy\n",
        )
        .unwrap();

        let (config, source) = load_config(temp.path(), None).unwrap();
        assert_eq!(config.repository.directory, PathBuf::from("build/dnSpy"));
        assert_eq!(
            source,
            ConfigSource::File(temp.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "requires: [git\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        match err {
            SetupError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cfg.yml");
        fs::write(&path, "repository:\n  directory: ../outside\n").unwrap();

        let err = load_config(temp.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, SetupError::ConfigValidationError { .. }));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("   \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, SetupConfig::default());
    }
}
