//! Project root location.
//!
//! A WordPress project root is the nearest ancestor holding the sentinel
//! file (`wp-config.php` unless configured otherwise).

use std::path::{Path, PathBuf};

use crate::error::{CreateError, Result};

/// Directory under the project root that holds themes and plugins.
pub const CONTENT_DIR: &str = "wp-content";

/// Find the project root by walking up from `start`.
///
/// Returns the first directory (starting with `start` itself) that contains
/// `sentinel` as a file, or `None` once the filesystem root has been checked.
pub fn find_project_root(start: &Path, sentinel: &str) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(sentinel).is_file() {
            tracing::debug!("Found {} in {}", sentinel, current.display());
            return Some(current);
        }

        // Move up one directory
        if !current.pop() {
            return None;
        }
    }
}

/// Like [`find_project_root`], but a missing root is an error.
///
/// # Errors
///
/// Returns `ProjectRootNotFound` when no ancestor holds the sentinel.
pub fn locate_root(start: &Path, sentinel: &str) -> Result<PathBuf> {
    find_project_root(start, sentinel).ok_or_else(|| CreateError::ProjectRootNotFound {
        start: start.to_path_buf(),
        sentinel: sentinel.to_string(),
    })
}

/// Resolve `<root>/wp-content/<subdir>` for the project enclosing `start`.
///
/// # Errors
///
/// Returns `ProjectRootNotFound` when no ancestor holds the sentinel.
pub fn content_path(start: &Path, sentinel: &str, subdir: &str) -> Result<PathBuf> {
    Ok(locate_root(start, sentinel)?.join(CONTENT_DIR).join(subdir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SENTINEL: &str = "wp-config.php";

    #[test]
    fn finds_sentinel_in_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SENTINEL), "<?php").unwrap();

        let root = find_project_root(temp.path(), SENTINEL);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn finds_sentinel_at_any_depth_above() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SENTINEL), "<?php").unwrap();

        let mut nested = temp.path().to_path_buf();
        for depth in 1..=4 {
            nested = nested.join(format!("level{}", depth));
            fs::create_dir_all(&nested).unwrap();

            let root = find_project_root(&nested, SENTINEL);
            assert_eq!(root, Some(temp.path().to_path_buf()), "depth {}", depth);
        }
    }

    #[test]
    fn nearest_sentinel_wins() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("sites").join("blog");
        let start = inner.join("wp-content");
        fs::create_dir_all(&start).unwrap();
        fs::write(temp.path().join(SENTINEL), "<?php").unwrap();
        fs::write(inner.join(SENTINEL), "<?php").unwrap();

        assert_eq!(find_project_root(&start, SENTINEL), Some(inner));
    }

    #[test]
    fn directory_named_like_sentinel_does_not_count() {
        let temp = TempDir::new().unwrap();
        let start = temp.path().join("nested");
        fs::create_dir_all(start.join(SENTINEL)).unwrap();

        assert_eq!(find_project_root(&start, SENTINEL), None);
    }

    #[test]
    fn returns_none_without_sentinel() {
        let temp = TempDir::new().unwrap();
        let start = temp.path().join("a").join("b");
        fs::create_dir_all(&start).unwrap();

        // A sentinel with a random name cannot exist above a fresh temp dir.
        assert_eq!(
            find_project_root(&start, "no-such-sentinel-7f3a9c.php"),
            None
        );
    }

    #[test]
    fn content_path_joins_wp_content_and_subdir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SENTINEL), "<?php").unwrap();
        let start = temp.path().join("wp-admin");
        fs::create_dir_all(&start).unwrap();

        let path = content_path(&start, SENTINEL, "themes").unwrap();
        assert_eq!(path, temp.path().join("wp-content").join("themes"));
    }

    #[test]
    fn content_path_without_root_is_an_error() {
        let temp = TempDir::new().unwrap();

        let err = content_path(temp.path(), "no-such-sentinel-7f3a9c.php", "plugins").unwrap_err();
        assert!(matches!(err, CreateError::ProjectRootNotFound { .. }));
    }
}
