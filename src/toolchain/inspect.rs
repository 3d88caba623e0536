//! Installed toolchain detection.

use crate::config::ToolchainConfig;
use crate::shell::{CommandOptions, CommandRunner, CommandSpec};

/// The command that prints the installed version.
pub fn version_command(toolchain: &ToolchainConfig) -> CommandSpec {
    CommandSpec::new(&toolchain.command).args(&toolchain.version_args)
}

/// Ask the toolchain for its version.
///
/// Returns the trimmed stdout on exit 0. A non-zero exit or a missing
/// binary means "not installed" and yields `None`. Blank output on exit 0
/// is also `None`, since an empty version could never match a release.
pub fn inspect_installed(
    runner: &dyn CommandRunner,
    toolchain: &ToolchainConfig,
) -> Option<String> {
    let spec = version_command(toolchain);

    match runner.run(&spec, &CommandOptions::captured(None)) {
        Ok(result) if result.success => {
            let version = result.stdout.trim();
            if version.is_empty() {
                tracing::debug!("'{}' printed no version", spec);
                None
            } else {
                Some(version.to_string())
            }
        }
        Ok(result) => {
            tracing::debug!("'{}' exited with {:?}", spec, result.exit_code);
            None
        }
        Err(e) => {
            tracing::debug!("'{}' could not run: {}", spec, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};

    #[test]
    fn trims_reported_version() {
        let runner = MockRunner::new().on("dotnet --version", MockResponse::stdout("8.0.101\n"));
        assert_eq!(
            inspect_installed(&runner, &ToolchainConfig::default()),
            Some("8.0.101".to_string())
        );
    }

    #[test]
    fn non_zero_exit_is_not_installed() {
        let runner = MockRunner::new().on("dotnet", MockResponse::exit(145));
        assert_eq!(inspect_installed(&runner, &ToolchainConfig::default()), None);
    }

    #[test]
    fn missing_binary_is_not_installed() {
        let runner = MockRunner::new().otherwise(MockResponse::NotFound);
        assert_eq!(inspect_installed(&runner, &ToolchainConfig::default()), None);
    }

    #[test]
    fn blank_output_is_not_installed() {
        let runner = MockRunner::new().on("dotnet", MockResponse::stdout("  \n"));
        assert_eq!(inspect_installed(&runner, &ToolchainConfig::default()), None);
    }

    #[test]
    fn uses_configured_command() {
        let toolchain = ToolchainConfig {
            command: "dotnet8".to_string(),
            version_args: vec!["--list-sdks".to_string()],
            ..Default::default()
        };
        let runner = MockRunner::new();
        let _ = inspect_installed(&runner, &toolchain);
        assert_eq!(runner.command_lines(), vec!["dotnet8 --list-sdks"]);
    }
}
