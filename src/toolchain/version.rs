//! Installed-vs-latest comparison.

/// Outcome of comparing the installed version against the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Installed version starts with the latest version string.
    Current,
    /// Not installed, or installed under a different prefix.
    NeedsUpdate,
}

impl VersionStatus {
    pub fn is_current(self) -> bool {
        self == VersionStatus::Current
    }
}

/// Compare by string prefix.
///
/// `8.0.101` is current for a latest of `8.0`. This is deliberately not a
/// semantic-version ordering: a newer installed SDK under a different
/// major.minor still reports `NeedsUpdate`.
pub fn compare(installed: Option<&str>, latest: &str) -> VersionStatus {
    match installed {
        Some(v) if v.starts_with(latest) => VersionStatus::Current,
        _ => VersionStatus::NeedsUpdate,
    }
}

/// Truncate a version to its first two dot-separated components.
///
/// Returns `None` if there are fewer than two components.
pub fn major_minor(version: &str) -> Option<String> {
    let mut parts = version.trim().splitn(3, '.');
    let major = parts.next().filter(|p| !p.is_empty())?;
    let minor = parts.next().filter(|p| !p.is_empty())?;
    Some(format!("{}.{}", major, minor))
}
