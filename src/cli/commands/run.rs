//! Run command implementation.
//!
//! Loads configuration and drives [`SetupWorkflow`] with the real system
//! runner and the vendor download page.

use std::path::{Path, PathBuf};

use crate::config::{load_config, ConfigSource};
use crate::error::Result;
use crate::latest::DownloadPageSource;
use crate::runner::SetupWorkflow;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::Command;

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let (config, source) = load_config(&self.project_root, self.config_path.as_deref())?;

        if ui.output_mode().shows_detail() {
            match &source {
                ConfigSource::File(path) => ui.message(&format!("Config: {}", path.display())),
                ConfigSource::Defaults => ui.message("Config: built-in defaults"),
            }
        }

        let runner = SystemRunner;
        let latest = DownloadPageSource::new(&config.latest)?;

        SetupWorkflow::new(&config, &self.project_root, &runner, &latest).run(ui)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn keeps_project_root() {
        let cmd = RunCommand::new(Path::new("/work"), None);
        assert_eq!(cmd.project_root(), Path::new("/work"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), Some(temp.path().join("nope.yml").as_path()));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_config_fails_before_any_step() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".dnspy-setup.yml"),
            "repository:\n  directory: /absolute\n",
        )
        .unwrap();
        let cmd = RunCommand::new(temp.path(), None);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, SetupError::ConfigValidationError { .. }));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn missing_requirement_stops_the_run() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".dnspy-setup.yml"),
            "requires: [definitely-not-a-real-tool-xyz]\n",
        )
        .unwrap();
        let cmd = RunCommand::new(temp.path(), None);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, SetupError::RequirementMissing { .. }));
        assert!(!temp.path().join("dnSpy").exists());
        assert!(!temp.path().join("README.md").exists());
    }
}
