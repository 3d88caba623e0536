//! Setup workflow orchestration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::SetupConfig;
use crate::error::Result;
use crate::latest::VersionSource;
use crate::repo::{self, CloneOutcome};
use crate::report::{render_report, report_version, write_report, ReportContext};
use crate::requirements::{
    check_requirements, ensure_requirements, parse_system_path, RequirementStatus,
};
use crate::shell::{is_elevated, CommandRunner, OsKind};
use crate::toolchain::{
    compare, execute_plan, inspect_installed, plan_install, InstallOutcome, VersionStatus,
};
use crate::ui::UserInterface;

use super::summary::RunSummary;

/// Runs the full setup sequence against injected collaborators.
///
/// Steps run in a fixed order and the first fatal error stops the run:
///
/// 1. Required tools are on PATH
/// 2. Installed and latest toolchain versions are looked up
/// 3. The toolchain is installed if it is missing or outdated
/// 4. The repository is cloned (unless present) and built
/// 5. The report is written to the project root
pub struct SetupWorkflow<'a> {
    config: &'a SetupConfig,
    project_root: PathBuf,
    runner: &'a dyn CommandRunner,
    source: &'a dyn VersionSource,
    os: OsKind,
    path_entries: Vec<PathBuf>,
    elevated: bool,
}

impl<'a> SetupWorkflow<'a> {
    /// Create a workflow for the current host.
    pub fn new(
        config: &'a SetupConfig,
        project_root: impl Into<PathBuf>,
        runner: &'a dyn CommandRunner,
        source: &'a dyn VersionSource,
    ) -> Self {
        Self {
            config,
            project_root: project_root.into(),
            runner,
            source,
            os: OsKind::detect(),
            path_entries: parse_system_path(),
            elevated: is_elevated(),
        }
    }

    /// Override the detected operating system.
    pub fn with_os(mut self, os: OsKind) -> Self {
        self.os = os;
        self
    }

    /// Override the PATH directories searched for required tools.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = entries;
        self
    }

    /// Override whether the process counts as root.
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Project root the workflow runs in.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run every step in order.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunSummary> {
        let start = Instant::now();
        let toolchain = &self.config.toolchain;

        ui.show_header(&format!(
            "Setting up {}",
            self.config.repository.directory.display()
        ));

        self.check_requirements(ui)?;

        let installed_version = self.inspect(ui);
        let latest_version = self.lookup_latest(ui);

        let mut version_status = None;
        let mut install = None;
        if let Some(latest) = latest_version.as_deref() {
            let status = compare(installed_version.as_deref(), latest);
            tracing::debug!(?status, ?installed_version, latest, "compared versions");
            version_status = Some(status);

            match status {
                VersionStatus::Current => {
                    ui.success(&format!(
                        "You are already using the latest version of {}.",
                        toolchain.name
                    ));
                }
                VersionStatus::NeedsUpdate => {
                    ui.message(&format!(
                        "A newer version ({}) is available. Updating...",
                        latest
                    ));
                    install = Some(self.install(latest, ui)?);
                }
            }
        } else {
            tracing::debug!("latest version unknown, skipping install decision");
        }

        let clone = self.clone_repository(ui)?;

        ui.message(&format!("Building {}...", clone.path().display()));
        repo::build(self.runner, toolchain, clone.path())?;
        ui.success("Build finished");

        let version = report_version(latest_version.as_deref(), installed_version.as_deref());
        let report_path = self.write_report(&version, ui)?;

        let summary = RunSummary {
            installed_version,
            latest_version,
            version_status,
            install,
            clone,
            report_path,
            report_version: version,
            duration: start.elapsed(),
        };
        ui.show_run_summary(&summary);
        Ok(summary)
    }

    /// Required tools for this run.
    ///
    /// The clone program is only needed when the checkout is missing.
    fn required_tools(&self) -> Vec<String> {
        let repository = &self.config.repository;
        if !self.project_root.join(&repository.directory).exists() {
            return self.config.requires.clone();
        }
        let clone_program = repo::clone_command(repository).program;
        self.config
            .requires
            .iter()
            .filter(|name| {
                let skip = **name == clone_program;
                if skip {
                    tracing::debug!("checkout present, not requiring '{}'", name);
                }
                !skip
            })
            .cloned()
            .collect()
    }

    fn check_requirements(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let checks = check_requirements(&self.required_tools(), &self.path_entries);
        if ui.output_mode().shows_detail() {
            for check in &checks {
                if let RequirementStatus::Found(path) = &check.status {
                    ui.message(&format!("  {} → {}", check.requirement, path.display()));
                }
            }
        }
        ensure_requirements(&checks)
    }

    fn inspect(&self, ui: &mut dyn UserInterface) -> Option<String> {
        let name = &self.config.toolchain.name;
        let mut spinner = ui.start_spinner(&format!("Checking {} installation...", name));
        let installed = inspect_installed(self.runner, &self.config.toolchain);
        match &installed {
            Some(version) => spinner.finish_success(&format!("{} installed: {}", name, version)),
            None => spinner.finish_skipped(&format!("{} is not installed", name)),
        }
        installed
    }

    fn lookup_latest(&self, ui: &mut dyn UserInterface) -> Option<String> {
        let name = &self.config.toolchain.name;
        let mut spinner = ui.start_spinner(&format!(
            "Fetching latest {} version from {}...",
            name,
            self.source.describe()
        ));
        let latest = self.source.latest_version();
        match &latest {
            Some(version) => {
                spinner.finish_success(&format!("Latest {} version available: {}", name, version))
            }
            None => spinner.finish_skipped("Could not determine the latest version"),
        }
        latest
    }

    fn install(&self, version: &str, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let plan = plan_install(
            version,
            &self.os,
            &self.config.toolchain,
            &self.config.install,
            self.elevated,
        )?;
        execute_plan(&plan, &self.config.toolchain, version, self.runner, ui)
    }

    fn clone_repository(&self, ui: &mut dyn UserInterface) -> Result<CloneOutcome> {
        let repository = &self.config.repository;
        if !self.project_root.join(&repository.directory).exists() {
            ui.message(&format!("Cloning {}...", repository.url));
        }

        let outcome = repo::ensure_cloned(self.runner, repository, &self.project_root)?;
        match &outcome {
            CloneOutcome::Cloned(path) => ui.success(&format!("Cloned into {}", path.display())),
            CloneOutcome::AlreadyPresent(path) => ui.message(&format!(
                "{} already exists. Skipping cloning.",
                path.display()
            )),
        }
        Ok(outcome)
    }

    fn write_report(&self, version: &str, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        let ctx = ReportContext::new(version, &self.config.repository);
        let contents = render_report(&ctx)?;
        let path = self.project_root.join(&self.config.report.path);
        write_report(&path, &contents)?;
        ui.success(&format!(
            "Report written to {} for {} {}",
            path.display(),
            self.config.toolchain.name,
            version
        ));
        Ok(path)
    }
}
