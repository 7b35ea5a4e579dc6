//! Async filesystem operations.
//!
//! Every fallible call returns [`Outcome<T, Error>`]; [`Error`] is a
//! closed enum, so callers can match it exhaustively. Paths that cannot
//! be read for any reason (missing, unreadable, not a file) all report
//! [`Error::NoFileExists`].

use std::path::{Component, Path, PathBuf};

use async_walkdir::WalkDir;
use futures::StreamExt;
use thiserror::Error;
use tokio::fs;

use terrane_core::Outcome;

/// Errors reported by the filesystem layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The path does not name a readable file or directory.
    #[error("no such file")]
    NoFileExists,
}

/// The current working directory, if the OS can report one.
pub fn cwd() -> Option<PathBuf> {
    std::env::current_dir().ok()
}

/// The current user's home directory, if known.
pub fn home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Check if a path exists.
pub async fn path_exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Read a file into a string.
pub async fn read_file(path: &Path) -> Outcome<String, Error> {
    match fs::read_to_string(path).await {
        Ok(contents) => Outcome::success(contents),
        Err(_) => Outcome::failure(Error::NoFileExists),
    }
}

/// Read a file into a byte vector.
pub async fn read_file_bytes(path: &Path) -> Outcome<Vec<u8>, Error> {
    match fs::read(path).await {
        Ok(bytes) => Outcome::success(bytes),
        Err(_) => Outcome::failure(Error::NoFileExists),
    }
}

/// Overwrite an existing file with the given bytes.
///
/// The file must already exist; this call never creates one.
pub async fn write_bytes(path: &Path, bytes: &[u8]) -> Outcome<(), Error> {
    if !path_exists(path).await {
        return Outcome::failure(Error::NoFileExists);
    }

    match fs::write(path, bytes).await {
        Ok(()) => Outcome::done(),
        Err(_) => Outcome::failure(Error::NoFileExists),
    }
}

/// True if the path is absolute.
pub fn is_absolute(path: &Path) -> bool {
    path.is_absolute()
}

/// True if the path is relative.
pub fn is_relative(path: &Path) -> bool {
    path.is_relative()
}

/// True if the path names an existing directory.
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

/// True if the path names an existing regular file.
pub async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}

/// The absolute, symlink-resolved form of an existing path.
pub async fn absolute_path(path: &Path) -> Outcome<PathBuf, Error> {
    match fs::canonicalize(path).await {
        Ok(absolute) => Outcome::success(absolute),
        Err(_) => Outcome::failure(Error::NoFileExists),
    }
}

/// The path of an existing file relative to `base` (or to the current
/// working directory when `base` is `None`).
pub async fn relative_path(path: &Path, base: Option<&Path>) -> Outcome<PathBuf, Error> {
    if !path_exists(path).await {
        return Outcome::failure(Error::NoFileExists);
    }

    let Some(anchor) = base.map(Path::to_path_buf).or_else(cwd) else {
        return Outcome::failure(Error::NoFileExists);
    };

    Outcome::success(diff_paths(&absolutize(path), &absolutize(&anchor)))
}

/// Search a directory tree for the first entry the matcher accepts.
///
/// The walk is recursive and unordered; entries the walker cannot read
/// are skipped. Returns [`Error::NoFileExists`] when the directory is
/// missing or nothing matches.
pub async fn search<F>(dir: &Path, mut matcher: F) -> Outcome<PathBuf, Error>
where
    F: FnMut(&Path) -> bool,
{
    if !path_exists(dir).await {
        return Outcome::failure(Error::NoFileExists);
    }

    let mut walker = WalkDir::new(dir);
    while let Some(entry) = walker.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if matcher(&path) {
                    return Outcome::success(path);
                }
            }
            Err(err) => {
                log::debug!("search: skipping unreadable entry under {}: {err}", dir.display());
            }
        }
    }

    log::debug!("search: no match under {}", dir.display());
    Outcome::failure(Error::NoFileExists)
}

/// Anchor a relative path at the current working directory. Does not
/// touch the filesystem or resolve symlinks.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd().unwrap_or_default().join(path)
    }
}

/// Component-wise relative path from `base` to `path`; both must be
/// absolute. Shared prefixes drop out, remaining base components become
/// `..` hops.
fn diff_paths(path: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = path.components().collect();
    let anchor: Vec<Component<'_>> = base.components().collect();

    let shared = target
        .iter()
        .zip(anchor.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..anchor.len() {
        relative.push("..");
    }
    for component in &target[shared..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn scoped_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).await.unwrap();
        path
    }

    #[test]
    fn test_cwd_is_absolute() {
        let dir = cwd().unwrap();
        assert!(dir.is_absolute());
    }

    #[test]
    fn test_home_matches_env_when_set() {
        if let Ok(from_env) = std::env::var("HOME") {
            assert_eq!(home(), Some(PathBuf::from(from_env)));
        }
    }

    #[tokio::test]
    async fn test_write_then_read_bytes_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = scoped_file(&dir, "data.bin", b"").await;

        let written = write_bytes(&path, &[0xAA, 0xBB, 0xCC, 0xDD]).await;
        assert!(!written.has_error());

        let bytes = read_file_bytes(&path).await;
        assert!(!bytes.has_error());
        assert_eq!(bytes.value(), &[0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[tokio::test]
    async fn test_write_to_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let outcome = write_bytes(&dir.path().join("absent"), b"data").await;
        assert!(outcome.has_error());
        assert_eq!(*outcome.error(), Error::NoFileExists);
    }

    #[tokio::test]
    async fn test_read_file_text() {
        let dir = TempDir::new().unwrap();
        let path = scoped_file(&dir, "greeting.txt", b"hello terrane!").await;

        let text = read_file(&path).await;
        assert!(!text.has_error());
        assert_eq!(text.value(), "hello terrane!");

        let missing = read_file(&dir.path().join("absent.txt")).await;
        assert!(missing.has_error());
    }

    #[test]
    fn test_path_exists() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("present"), b"x").unwrap();

        assert!(tokio_test::block_on(path_exists(&dir.path().join("present"))));
        assert!(!tokio_test::block_on(path_exists(&dir.path().join("absent"))));
    }

    #[tokio::test]
    async fn test_absolute_and_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = scoped_file(&dir, "leaf", b"x").await;

        let absolute = absolute_path(&path).await;
        assert!(!absolute.has_error());
        assert!(is_absolute(absolute.value()));
        assert!(!is_relative(absolute.value()));

        let relative = relative_path(&path, Some(dir.path())).await;
        assert!(!relative.has_error());
        assert_eq!(relative.value(), &PathBuf::from("leaf"));
        assert!(is_relative(relative.value()));
        assert!(!is_absolute(relative.value()));
    }

    #[tokio::test]
    async fn test_relative_path_walks_up_from_sibling() {
        let dir = TempDir::new().unwrap();
        let path = scoped_file(&dir, "leaf", b"x").await;
        let sibling = dir.path().join("nested");
        fs::create_dir(&sibling).await.unwrap();

        let relative = relative_path(&path, Some(&sibling)).await;
        assert!(!relative.has_error());
        assert_eq!(relative.value(), &PathBuf::from("../leaf"));
    }

    #[tokio::test]
    async fn test_relative_path_of_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let outcome = relative_path(&dir.path().join("absent"), Some(dir.path())).await;
        assert!(outcome.has_error());
        assert_eq!(*outcome.error(), Error::NoFileExists);
    }

    #[tokio::test]
    async fn test_file_type_checks() {
        let dir = TempDir::new().unwrap();
        let path = scoped_file(&dir, "regular", b"x").await;

        assert!(is_file(&path).await);
        assert!(!is_file(dir.path()).await);

        assert!(is_dir(dir.path()).await);
        assert!(!is_dir(&path).await);
    }

    #[tokio::test]
    async fn test_search_finds_matching_entry() {
        let dir = TempDir::new().unwrap();
        scoped_file(&dir, "first.test", b"").await;
        scoped_file(&dir, "second.test", b"").await;
        scoped_file(&dir, "not_a.tes", b"").await;

        let found = search(dir.path(), |path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.contains("test"))
        })
        .await;

        assert!(!found.has_error());
        assert_eq!(found.value().file_name().unwrap(), "not_a.tes");
    }

    #[tokio::test]
    async fn test_search_recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).await.unwrap();
        fs::write(nested.join("needle.txt"), b"").await.unwrap();

        let found = search(dir.path(), |path| {
            path.file_name().and_then(|n| n.to_str()) == Some("needle.txt")
        })
        .await;

        assert!(!found.has_error());
    }

    #[tokio::test]
    async fn test_search_without_match_fails() {
        let dir = TempDir::new().unwrap();
        scoped_file(&dir, "present", b"").await;

        let outcome = search(dir.path(), |_| false).await;
        assert!(outcome.has_error());
        assert_eq!(*outcome.error(), Error::NoFileExists);
    }

    #[tokio::test]
    async fn test_search_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let outcome = search(&dir.path().join("absent"), |_| true).await;
        assert!(outcome.has_error());
    }
}
