//! Path helpers that sit above the raw filesystem calls.

use std::path::{Path, PathBuf};

/// How many parent directories [`find_dir_with_marker`] inspects before
/// giving up.
pub const MARKER_WALK_LIMIT: usize = 10;

/// The absolute path of the running executable, if the OS reports one.
pub fn binary_path() -> Option<PathBuf> {
    std::env::current_exe().ok()
}

/// The directory containing the running executable.
pub fn binary_dir() -> Option<PathBuf> {
    binary_path().and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths that do not start with `~`, and hosts with no known home
/// directory, pass through unchanged.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Walk upward from `start` looking for a directory that contains
/// `marker` (a file or directory name, e.g. `Cargo.toml`).
///
/// Returns the containing directory, or `None` once the filesystem root
/// or [`MARKER_WALK_LIMIT`] is reached.
pub fn find_dir_with_marker<P: AsRef<Path>>(start: P, marker: &str) -> Option<PathBuf> {
    let mut current = start.as_ref().to_path_buf();

    for _ in 0..MARKER_WALK_LIMIT {
        if current.join(marker).exists() {
            return Some(current);
        }
        current = current.parent()?.to_path_buf();
    }

    None
}
