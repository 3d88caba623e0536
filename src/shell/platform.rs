//! Platform detection.

use std::fmt;

/// Operating system family, used to pick an install strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOs,
    Windows,
    /// Anything else, carrying the raw platform name.
    Other(String),
}

impl OsKind {
    /// Detect the platform this binary is running on.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a kind.
    pub fn from_os_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => OsKind::Linux,
            "macos" | "darwin" => OsKind::MacOs,
            "windows" => OsKind::Windows,
            other => OsKind::Other(other.to_string()),
        }
    }

    /// Human-readable platform name.
    pub fn name(&self) -> &str {
        match self {
            OsKind::Linux => "Linux",
            OsKind::MacOs => "macOS",
            OsKind::Windows => "Windows",
            OsKind::Other(name) => name,
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if running in a CI environment.
///
/// Used by `main()` to force the plain, non-interactive UI.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}
