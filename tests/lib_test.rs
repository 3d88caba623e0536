//! Library integration tests.

use dnspy_setup::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::UnsupportedPlatform {
        os: "plan9".into(),
    };
    assert_eq!(err.to_string(), "Unsupported OS: plan9");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> dnspy_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use dnspy_setup::cli::Cli;

    let cli = Cli::parse_from(["dnspy-setup", "--verbose"]);
    assert!(cli.verbose);
}

#[test]
fn default_config_matches_upstream_constants() {
    use dnspy_setup::config::SetupConfig;

    let config = SetupConfig::default();
    assert_eq!(config.toolchain.command, "dotnet");
    assert_eq!(
        config.latest.url,
        "https://dotnet.microsoft.com/en-us/download/dotnet"
    );
    assert_eq!(config.repository.url, "https://github.com/dnSpyEx/dnSpy.git");
    assert_eq!(config.repository.directory, std::path::PathBuf::from("dnSpy"));
    assert_eq!(config.report.path, std::path::PathBuf::from("README.md"));
}

#[test]
fn version_source_is_implementable() {
    use dnspy_setup::latest::VersionSource;

    struct Pinned;

    impl VersionSource for Pinned {
        fn latest_version(&self) -> Option<String> {
            Some("9.0".to_string())
        }

        fn describe(&self) -> String {
            "pinned".to_string()
        }
    }

    let source: Box<dyn VersionSource> = Box::new(Pinned);
    assert_eq!(source.latest_version().as_deref(), Some("9.0"));
}

#[test]
fn ensure_on_path_reports_missing_tools() {
    use dnspy_setup::requirements::ensure_on_path;

    let err = ensure_on_path(&["definitely-not-a-real-tool-xyz".to_string()]).unwrap_err();
    match err {
        SetupError::RequirementMissing { requirement, .. } => {
            assert_eq!(requirement, "definitely-not-a-real-tool-xyz");
        }
        other => panic!("Expected RequirementMissing, got {other:?}"),
    }
}
