//! PATH probing for required executables.
//!
//! Lookups walk the PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for `tool` in a single directory.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
        let mut names = vec![tool.to_string()];
        names.extend(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|e| format!("{}{}", tool, e.to_lowercase())),
        );
        names
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
