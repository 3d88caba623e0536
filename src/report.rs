//! Status report generation.
//!
//! The report is a fixed Markdown template embedded at compile time and
//! filled in with `${var}` interpolation.

use std::path::Path;

use anyhow::anyhow;
use include_dir::{include_dir, Dir};

use crate::config::{resolve_string, InterpolationContext, RepositoryConfig};
use crate::error::Result;
use crate::toolchain::major_minor;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

const REPORT_TEMPLATE: &str = "report.md";

/// Values substituted into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// SDK version the report is written for.
    pub version: String,
    /// Checkout directory as shown to the reader.
    pub repo_dir: String,
    /// Upstream project page.
    pub repo_web_url: String,
}

impl ReportContext {
    pub fn new(version: impl Into<String>, repo: &RepositoryConfig) -> Self {
        Self {
            version: version.into(),
            repo_dir: repo.directory.to_string_lossy().replace('\\', "/"),
            repo_web_url: repo.web_url.clone(),
        }
    }

    fn interpolation(&self) -> InterpolationContext {
        InterpolationContext::new()
            .with("version", self.version.as_str())
            .with("repo_dir", self.repo_dir.as_str())
            .with("repo_web_url", self.repo_web_url.as_str())
            .with("binary", env!("CARGO_PKG_NAME"))
    }
}

/// Pick the version the report describes.
///
/// Prefers the latest published version, then the installed one cut to
/// `major.minor`, then the literal `latest`.
pub fn report_version(latest: Option<&str>, installed: Option<&str>) -> String {
    latest
        .map(String::from)
        .or_else(|| installed.and_then(major_minor))
        .unwrap_or_else(|| "latest".to_string())
}

/// Look up an embedded template by file name.
fn embedded_template(name: &str) -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| anyhow!("Embedded template '{}' is missing", name))?;

    file.contents_utf8()
        .ok_or_else(|| anyhow!("Embedded template '{}' is not valid UTF-8", name).into())
}

/// Render the report text.
pub fn render_report(ctx: &ReportContext) -> Result<String> {
    resolve_string(embedded_template(REPORT_TEMPLATE)?, &ctx.interpolation())
}

/// Write `contents` to `path`, replacing whatever was there.
///
/// Missing parent directories are created.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx(version: &str) -> ReportContext {
        ReportContext::new(version, &RepositoryConfig::default())
    }

    #[test]
    fn report_mentions_version_and_target_framework() {
        let report = render_report(&ctx("8.0")).unwrap();
        assert!(report.contains("v8.0"));
        assert!(report.contains("net8.0-windows"));
        assert!(report.contains("dnSpy/bin/Debug/net8.0-windows/"));
        assert!(report.contains("https://github.com/dnSpyEx/dnSpy"));
        assert!(!report.contains("${"));
    }

    #[test]
    fn report_uses_configured_directory() {
        let repo = RepositoryConfig {
            directory: "vendor/dnSpy".into(),
            ..Default::default()
        };
        let report = render_report(&ReportContext::new("9.0", &repo)).unwrap();
        assert!(report.contains("vendor/dnSpy/bin/Debug/net9.0-windows/"));
    }

    #[test]
    fn missing_template_is_an_internal_error() {
        let err = embedded_template("no-such-template.md").unwrap_err();
        assert!(matches!(err, crate::error::SetupError::Other(_)));
        assert!(err.to_string().contains("no-such-template.md"));
    }

    #[test]
    fn version_prefers_latest() {
        assert_eq!(report_version(Some("9.0"), Some("8.0.101")), "9.0");
    }

    #[test]
    fn version_falls_back_to_installed_major_minor() {
        assert_eq!(report_version(None, Some("8.0.101")), "8.0");
    }

    #[test]
    fn version_falls_back_to_literal() {
        assert_eq!(report_version(None, None), "latest");
        assert_eq!(report_version(None, Some("8")), "latest");
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs").join("SETUP.md");
        write_report(&path, "report").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        std::fs::write(&path, "old content that should disappear\n".repeat(50)).unwrap();

        let report = render_report(&ctx("8.0")).unwrap();
        write_report(&path, &report).unwrap();
        write_report(&path, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report);
        assert_eq!(written.matches("## Steps:").count(), 1);
    }
}
