//! Repository checkout.

use std::path::{Path, PathBuf};

use crate::config::RepositoryConfig;
use crate::error::Result;
use crate::shell::{run_checked, CommandOptions, CommandRunner, CommandSpec};

/// What [`ensure_cloned`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// A fresh clone was made at this path.
    Cloned(PathBuf),
    /// The destination already existed and was left untouched.
    AlreadyPresent(PathBuf),
}

impl CloneOutcome {
    /// Where the repository lives either way.
    pub fn path(&self) -> &Path {
        match self {
            CloneOutcome::Cloned(path) | CloneOutcome::AlreadyPresent(path) => path,
        }
    }
}

/// The `git clone` invocation for a repository.
pub fn clone_command(repo: &RepositoryConfig) -> CommandSpec {
    CommandSpec::new("git")
        .arg("clone")
        .arg(&repo.url)
        .arg(repo.directory.to_string_lossy())
}

/// Clone `repo` under `base_dir` unless its directory already exists.
///
/// Any existing path counts as present, including an unrelated or partial
/// checkout; its contents are not inspected.
pub fn ensure_cloned(
    runner: &dyn CommandRunner,
    repo: &RepositoryConfig,
    base_dir: &Path,
) -> Result<CloneOutcome> {
    let destination = base_dir.join(&repo.directory);

    if destination.exists() {
        tracing::debug!("{} exists, skipping clone", destination.display());
        return Ok(CloneOutcome::AlreadyPresent(destination));
    }

    run_checked(
        runner,
        &clone_command(repo),
        &CommandOptions::inherited(Some(base_dir)),
    )?;

    Ok(CloneOutcome::Cloned(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::shell::{MockResponse, MockRunner};
    use tempfile::TempDir;

    #[test]
    fn clones_into_base_dir() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();

        let outcome = ensure_cloned(&runner, &RepositoryConfig::default(), temp.path()).unwrap();

        assert_eq!(outcome, CloneOutcome::Cloned(temp.path().join("dnSpy")));
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].spec.to_string(),
            "git clone https://github.com/dnSpyEx/dnSpy.git dnSpy"
        );
        assert_eq!(calls[0].cwd.as_deref(), Some(temp.path()));
    }

    #[test]
    fn existing_directory_skips_clone() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dnSpy")).unwrap();
        let runner = MockRunner::new();

        let outcome = ensure_cloned(&runner, &RepositoryConfig::default(), temp.path()).unwrap();

        assert_eq!(
            outcome,
            CloneOutcome::AlreadyPresent(temp.path().join("dnSpy"))
        );
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn existing_file_also_counts_as_present() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dnSpy"), "not a repo").unwrap();
        let runner = MockRunner::new();

        let outcome = ensure_cloned(&runner, &RepositoryConfig::default(), temp.path()).unwrap();

        assert!(matches!(outcome, CloneOutcome::AlreadyPresent(_)));
    }

    #[test]
    fn failed_clone_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().on("git clone", MockResponse::exit(128));

        let err = ensure_cloned(&runner, &RepositoryConfig::default(), temp.path()).unwrap_err();

        assert!(matches!(
            err,
            SetupError::CommandFailed {
                code: Some(128),
                ..
            }
        ));
    }

    #[test]
    fn outcome_path_is_destination() {
        let outcome = CloneOutcome::AlreadyPresent(PathBuf::from("/work/dnSpy"));
        assert_eq!(outcome.path(), Path::new("/work/dnSpy"));
    }
}
