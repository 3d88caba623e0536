//! What a setup run did.

use std::path::PathBuf;
use std::time::Duration;

use crate::repo::CloneOutcome;
use crate::toolchain::{InstallOutcome, VersionStatus};

/// Outcome of a completed setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Version reported by the toolchain before any install.
    pub installed_version: Option<String>,
    /// Latest published version, if the lookup succeeded.
    pub latest_version: Option<String>,
    /// Comparison result; `None` when the latest version was unknown.
    pub version_status: Option<VersionStatus>,
    /// Set when the installer ran.
    pub install: Option<InstallOutcome>,
    /// Whether the repository was cloned or already there.
    pub clone: CloneOutcome,
    /// Where the report was written.
    pub report_path: PathBuf,
    /// Version the report was rendered for.
    pub report_version: String,
    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl RunSummary {
    /// Whether an install was attempted.
    pub fn install_ran(&self) -> bool {
        self.install.is_some()
    }

    /// Label/value pairs for display.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let toolchain = match (&self.version_status, &self.install) {
            (_, Some(InstallOutcome::Installed { package })) => format!("installed {}", package),
            (_, Some(InstallOutcome::ManualRequired { url })) => {
                format!("manual install required ({})", url)
            }
            (Some(VersionStatus::Current), None) => "up to date".to_string(),
            (Some(VersionStatus::NeedsUpdate), None) => "update skipped".to_string(),
            (None, None) => "not checked".to_string(),
        };

        let repository = match &self.clone {
            CloneOutcome::Cloned(path) => format!("cloned to {}", path.display()),
            CloneOutcome::AlreadyPresent(path) => format!("already at {}", path.display()),
        };

        vec![
            (
                "Installed",
                self.installed_version
                    .clone()
                    .unwrap_or_else(|| "not found".to_string()),
            ),
            (
                "Latest",
                self.latest_version
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
            ("Toolchain", toolchain),
            ("Repository", repository),
            (
                "Report",
                format!(
                    "{} (v{})",
                    self.report_path.display(),
                    self.report_version
                ),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            installed_version: Some("8.0.101".to_string()),
            latest_version: Some("8.0".to_string()),
            version_status: Some(VersionStatus::Current),
            install: None,
            clone: CloneOutcome::Cloned(PathBuf::from("/work/dnSpy")),
            report_path: PathBuf::from("/work/README.md"),
            report_version: "8.0".to_string(),
            duration: Duration::from_secs(3),
        }
    }

    fn row(summary: &RunSummary, label: &str) -> String {
        summary
            .rows()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
            .unwrap()
    }

    #[test]
    fn current_toolchain_row() {
        let summary = summary();
        assert!(!summary.install_ran());
        assert_eq!(row(&summary, "Toolchain"), "up to date");
        assert_eq!(row(&summary, "Report"), "/work/README.md (v8.0)");
    }

    #[test]
    fn installed_toolchain_row() {
        let summary = RunSummary {
            version_status: Some(VersionStatus::NeedsUpdate),
            install: Some(InstallOutcome::Installed {
                package: "dotnet-sdk-9.0".to_string(),
            }),
            ..summary()
        };
        assert!(summary.install_ran());
        assert_eq!(row(&summary, "Toolchain"), "installed dotnet-sdk-9.0");
    }

    #[test]
    fn unknown_versions_rows() {
        let summary = RunSummary {
            installed_version: None,
            latest_version: None,
            version_status: None,
            clone: CloneOutcome::AlreadyPresent(PathBuf::from("/work/dnSpy")),
            ..summary()
        };
        assert_eq!(row(&summary, "Installed"), "not found");
        assert_eq!(row(&summary, "Latest"), "unknown");
        assert_eq!(row(&summary, "Toolchain"), "not checked");
        assert_eq!(row(&summary, "Repository"), "already at /work/dnSpy");
    }
}
