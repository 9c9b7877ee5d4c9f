//! JSON export discovery.
//!
//! Lists the `.json` files directly inside an exports directory. Nested
//! directories are not traversed.

use std::path::{Path, PathBuf};

use cardsort_core::error::{Result, SortError};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const JSON_SUFFIX: &str = ".json";

/// Lazy iterator over the JSON files directly inside a directory.
///
/// Produced by [`scan_json_files`]. Order follows the filesystem and is not
/// guaranteed to be sorted.
pub struct JsonFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
    /// Set when the root exists but is not a directory.
    not_a_directory: Option<SortError>,
}

impl Iterator for JsonFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.not_a_directory.take() {
            return Some(Err(err));
        }

        loop {
            match self.inner.next()? {
                Ok(entry) if is_json_file(&entry) => return Some(Ok(entry.into_path())),
                Ok(_) => continue,
                // The directory itself could not be listed.
                Err(err) if err.depth() == 0 => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(SortError::DirectoryRead {
                        path,
                        source: err.into(),
                    }));
                }
                // A child that cannot be stat'ed, e.g. a dangling symlink, is not a file.
                Err(err) => {
                    debug!("Skipping unreadable entry in {}: {}", self.root.display(), err);
                }
            }
        }
    }
}

/// Scan `dir` for files whose name ends in `.json`.
///
/// Symlinks are followed, so a link to a JSON file counts as a file.
/// Calling this again performs a fresh scan. A `dir` that is not a directory
/// yields a single [`SortError::DirectoryRead`].
pub fn scan_json_files(dir: &Path) -> JsonFiles {
    // A missing root is reported by walkdir itself; a file root is silently
    // filtered out by `min_depth(1)`, so catch it here.
    let not_a_directory = match std::fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => Some(SortError::DirectoryRead {
            path: dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        }),
        _ => None,
    };

    JsonFiles {
        not_a_directory,
        root: dir.to_path_buf(),
        inner: WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter(),
    }
}

fn is_json_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(JSON_SUFFIX)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "{}").unwrap();
        path
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = scan_json_files(dir)
            .map(|p| p.unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_scan_only_json_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.json");
        touch(dir.path(), "b.json");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.json.bak");

        assert_eq!(names(dir.path()), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_scan_suffix_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "upper.JSON");
        touch(dir.path(), "lower.json");

        assert_eq!(names(dir.path()), vec!["lower.json"]);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir_all(&sub).unwrap();
        touch(dir.path(), "top.json");
        touch(&sub, "inner.json");

        assert_eq!(names(dir.path()), vec!["top.json"]);
    }

    #[test]
    fn test_scan_skips_directories_named_like_json() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("folder.json")).unwrap();
        touch(dir.path(), "real.json");

        assert_eq!(names(dir.path()), vec!["real.json"]);
    }

    #[test]
    fn test_scan_yields_full_paths() {
        let dir = TempDir::new().unwrap();
        let expected = touch(dir.path(), "board.json");

        let paths: Vec<PathBuf> = scan_json_files(dir.path()).map(|p| p.unwrap()).collect();
        assert_eq!(paths, vec![expected]);
    }

    #[test]
    fn test_scan_is_restartable() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "one.json");
        assert_eq!(scan_json_files(dir.path()).count(), 1);

        touch(dir.path(), "two.json");
        assert_eq!(scan_json_files(dir.path()).count(), 2);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(scan_json_files(dir.path()).count(), 0);
    }

    #[test]
    fn test_scan_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        let results: Vec<Result<PathBuf>> = scan_json_files(&missing).collect();
        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(SortError::DirectoryRead { path, .. }) => assert_eq!(path, &missing),
            other => panic!("expected DirectoryRead, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_file_root_is_error() {
        let dir = TempDir::new().unwrap();
        let file = touch(dir.path(), "export.json");

        let results: Vec<Result<PathBuf>> = scan_json_files(&file).collect();
        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(SortError::DirectoryRead { path, source }) => {
                assert_eq!(path, &file);
                assert!(source.to_string().contains("not a directory"));
            }
            other => panic!("expected DirectoryRead, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_file_symlinks_and_skips_dangling() {
        let dir = TempDir::new().unwrap();
        let target = touch(dir.path(), "target.txt");
        std::os::unix::fs::symlink(&target, dir.path().join("linked.json")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling.json"))
            .unwrap();

        assert_eq!(names(dir.path()), vec!["linked.json"]);
    }
}
