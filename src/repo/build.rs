//! Building the checked-out repository.

use std::path::Path;

use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::shell::{run_checked, CommandOptions, CommandRunner, CommandSpec};

/// The build invocation, `dotnet build` by default.
pub fn build_command(toolchain: &ToolchainConfig) -> CommandSpec {
    CommandSpec::new(&toolchain.command).args(&toolchain.build_args)
}

/// Build the repository at `repo_dir`, streaming the toolchain's output.
pub fn build(
    runner: &dyn CommandRunner,
    toolchain: &ToolchainConfig,
    repo_dir: &Path,
) -> Result<()> {
    let spec = build_command(toolchain);
    tracing::debug!("building {} with '{}'", repo_dir.display(), spec);
    run_checked(runner, &spec, &CommandOptions::inherited(Some(repo_dir)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};

    #[test]
    fn runs_build_inside_repo() {
        let runner = MockRunner::new();
        let repo_dir = Path::new("/work/dnSpy");

        build(&runner, &ToolchainConfig::default(), repo_dir).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].spec.to_string(), "dotnet build");
        assert_eq!(calls[0].cwd.as_deref(), Some(repo_dir));
    }

    #[test]
    fn honours_configured_build_args() {
        let toolchain = ToolchainConfig {
            build_args: vec!["build".to_string(), "-c".to_string(), "Release".to_string()],
            ..Default::default()
        };
        let runner = MockRunner::new();

        build(&runner, &toolchain, Path::new("/work/dnSpy")).unwrap();

        assert_eq!(runner.command_lines(), vec!["dotnet build -c Release"]);
    }

    #[test]
    fn failed_build_is_fatal() {
        let runner = MockRunner::new().on("dotnet build", MockResponse::exit(1));
        assert!(build(&runner, &ToolchainConfig::default(), Path::new("/work/dnSpy")).is_err());
    }
}
