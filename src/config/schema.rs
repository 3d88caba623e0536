//! Configuration schema definitions.
//!
//! This module contains the structs that map to the optional
//! `.dnspy-setup.yml` file. Every field has a default, and the defaults
//! describe the stock setup: the .NET SDK from Microsoft's download page
//! and the dnSpyEx repository on GitHub.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Executables that must be on PATH before anything runs.
    pub requires: Vec<String>,

    /// The SDK being managed.
    pub toolchain: ToolchainConfig,

    /// Where the latest version is looked up.
    pub latest: LatestConfig,

    /// How the SDK is installed per platform.
    pub install: InstallConfig,

    /// The repository that gets cloned and built.
    pub repository: RepositoryConfig,

    /// The generated status report.
    pub report: ReportConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            requires: vec!["git".to_string()],
            toolchain: ToolchainConfig::default(),
            latest: LatestConfig::default(),
            install: InstallConfig::default(),
            repository: RepositoryConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// The toolchain whose presence and version are managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Display name used in progress output.
    pub name: String,

    /// Executable name.
    pub command: String,

    /// Arguments that print the installed version.
    pub version_args: Vec<String>,

    /// Arguments that build the cloned repository.
    pub build_args: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            name: ".NET SDK".to_string(),
            command: "dotnet".to_string(),
            version_args: vec!["--version".to_string()],
            build_args: vec!["build".to_string()],
        }
    }
}

/// Vendor page used as the latest-version oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestConfig {
    /// Download page URL.
    pub url: String,

    /// Pattern matched against link text; the first match wins.
    pub version_pattern: String,

    /// Request timeout. No timeout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LatestConfig {
    fn default() -> Self {
        Self {
            url: "https://dotnet.microsoft.com/en-us/download/dotnet".to_string(),
            version_pattern: r"\d+\.\d+".to_string(),
            timeout_secs: None,
        }
    }
}

/// Install templates. `${toolchain}` and `${version}` are interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package name for apt and the Homebrew cask.
    pub package: String,

    /// Page opened on Windows, where no unattended install is attempted.
    pub manual_url: String,

    /// Prefix apt commands with `sudo` when not already root.
    pub use_sudo: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            package: "${toolchain}-sdk-${version}".to_string(),
            manual_url: "https://dotnet.microsoft.com/download/dotnet/${version}".to_string(),
            use_sudo: true,
        }
    }
}

/// Repository that is cloned and built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Clone URL.
    pub url: String,

    /// Browsable project page, linked from the report.
    pub web_url: String,

    /// Destination directory, relative to the project root.
    pub directory: PathBuf,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            url: "https://github.com/dnSpyEx/dnSpy.git".to_string(),
            web_url: "https://github.com/dnSpyEx/dnSpy".to_string(),
            directory: PathBuf::from("dnSpy"),
        }
    }
}

/// Status report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report file, relative to the project root.
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_dotnet_and_dnspy() {
        let config = SetupConfig::default();
        assert_eq!(config.requires, vec!["git"]);
        assert_eq!(config.toolchain.command, "dotnet");
        assert_eq!(config.toolchain.version_args, vec!["--version"]);
        assert_eq!(config.toolchain.build_args, vec!["build"]);
        assert_eq!(
            config.latest.url,
            "https://dotnet.microsoft.com/en-us/download/dotnet"
        );
        assert_eq!(config.repository.directory, PathBuf::from("dnSpy"));
        assert_eq!(config.report.path, PathBuf::from("README.md"));
        assert!(config.latest.timeout_secs.is_none());
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: SetupConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = r#"
repository:
  directory: tools/dnSpy
latest:
  timeout_secs: 15
"#;
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.repository.directory, PathBuf::from("tools/dnSpy"));
        assert_eq!(config.repository.url, "https://github.com/dnSpyEx/dnSpy.git");
        assert_eq!(config.latest.timeout_secs, Some(15));
        assert_eq!(config.latest.version_pattern, r"\d+\.\d+");
    }

    #[test]
    fn requires_can_be_emptied() {
        let config: SetupConfig = serde_yaml::from_str("requires: []").unwrap();
        assert!(config.requires.is_empty());
    }
}
