//! Platform-specific SDK installation.
//!
//! Installation is split into planning and execution. [`plan_install`]
//! decides what would run for a platform without touching the system;
//! [`execute_plan`] runs it, stopping at the first failing command.

use crate::config::{resolve_string, InstallConfig, InterpolationContext, ToolchainConfig};
use crate::error::{Result, SetupError};
use crate::shell::{run_checked, CommandOptions, CommandRunner, CommandSpec, OsKind};
use crate::ui::UserInterface;

/// What installing a version means on a given platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Run these commands in order; any failure aborts.
    Commands {
        os: OsKind,
        package: String,
        steps: Vec<CommandSpec>,
    },
    /// No unattended install; point the user at a download page.
    Manual { url: String, open: CommandSpec },
    /// No strategy for this platform.
    Unsupported { os: String },
}

impl InstallPlan {
    /// Every command the plan would spawn, in order.
    pub fn commands(&self) -> Vec<&CommandSpec> {
        match self {
            InstallPlan::Commands { steps, .. } => steps.iter().collect(),
            InstallPlan::Manual { open, .. } => vec![open],
            InstallPlan::Unsupported { .. } => Vec::new(),
        }
    }
}

/// How an executed plan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// All package-manager commands succeeded.
    Installed { package: String },
    /// The user was sent to a download page.
    ManualRequired { url: String },
}

/// Build the install plan for `version` on `os`.
///
/// `elevated` drops the `sudo` prefix on Linux when already running as root.
pub fn plan_install(
    version: &str,
    os: &OsKind,
    toolchain: &ToolchainConfig,
    install: &InstallConfig,
    elevated: bool,
) -> Result<InstallPlan> {
    let ctx = InterpolationContext::new()
        .with("toolchain", toolchain.command.as_str())
        .with("version", version);

    let plan = match os {
        OsKind::Linux => {
            let package = resolve_string(&install.package, &ctx)?;
            let sudo = install.use_sudo && !elevated;
            let privileged = |spec: CommandSpec| {
                if sudo {
                    spec.prefixed("sudo")
                } else {
                    spec
                }
            };
            InstallPlan::Commands {
                os: os.clone(),
                steps: vec![
                    privileged(CommandSpec::new("apt-get").arg("update")),
                    privileged(
                        CommandSpec::new("apt-get")
                            .args(["install", "-y"])
                            .arg(&package),
                    ),
                ],
                package,
            }
        }
        OsKind::MacOs => {
            let package = resolve_string(&install.package, &ctx)?;
            InstallPlan::Commands {
                os: os.clone(),
                steps: vec![
                    CommandSpec::new("brew").arg("update"),
                    CommandSpec::new("brew")
                        .args(["install", "--cask"])
                        .arg(&package),
                ],
                package,
            }
        }
        OsKind::Windows => {
            let url = resolve_string(&install.manual_url, &ctx)?;
            // `start` is a cmd builtin; the empty string is the window title
            let open = CommandSpec::new("cmd").args(["/C", "start", ""]).arg(&url);
            InstallPlan::Manual { url, open }
        }
        OsKind::Other(name) => InstallPlan::Unsupported { os: name.clone() },
    };

    tracing::debug!(?plan, "planned install");
    Ok(plan)
}

/// Run an install plan.
///
/// # Errors
///
/// `CommandFailed` for the first package-manager command that fails (earlier
/// commands are not rolled back), `UnsupportedPlatform` for an
/// [`InstallPlan::Unsupported`] plan.
pub fn execute_plan(
    plan: &InstallPlan,
    toolchain: &ToolchainConfig,
    version: &str,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<InstallOutcome> {
    match plan {
        InstallPlan::Commands { os, package, steps } => {
            ui.message(&format!(
                "Installing {} {} for {}...",
                toolchain.name, version, os
            ));
            for step in steps {
                ui.message(&format!("  $ {}", step));
                run_checked(runner, step, &CommandOptions::inherited(None))?;
            }
            ui.success(&format!("Installed {}", package));
            Ok(InstallOutcome::Installed {
                package: package.clone(),
            })
        }
        InstallPlan::Manual { url, open } => {
            ui.message(&format!(
                "Please install {} {} manually from {}",
                toolchain.name, version, url
            ));
            match runner.run(open, &CommandOptions::captured(None)) {
                Ok(result) if result.success => {}
                Ok(result) => ui.warning(&format!(
                    "Could not open a browser (exit code {:?})",
                    result.exit_code
                )),
                Err(e) => ui.warning(&format!("Could not open a browser: {}", e)),
            }
            Ok(InstallOutcome::ManualRequired { url: url.clone() })
        }
        InstallPlan::Unsupported { os } => Err(SetupError::UnsupportedPlatform { os: os.clone() }),
    }
}
