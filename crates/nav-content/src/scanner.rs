//! Content file discovery by filesystem walking.
//!
//! Discovery only locates files; reading them and deriving entries is done by
//! [`ContentIndex::scan`](crate::ContentIndex::scan). Subdirectories are
//! walked in parallel, so the returned list is sorted by relative path to keep
//! the result independent of traversal order.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::ContentError;
use crate::slug::is_content_file;

/// Location of a discovered content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    /// Path relative to the content root (e.g. `intro/start.md`).
    pub rel_path: PathBuf,
    /// Full path on disk.
    pub abs_path: PathBuf,
}

/// Discover all content files under `root`.
///
/// Returns an empty list if the root directory doesn't exist.
pub(crate) fn discover(root: &Path) -> Result<Vec<SourceFile>, ContentError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = scan_directory(root, Path::new(""))?;
    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(files)
}

/// Whether a file or directory name is excluded from discovery.
fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}

fn scan_directory(dir: &Path, rel_prefix: &Path) -> Result<Vec<SourceFile>, ContentError> {
    let read = fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))?;

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ContentError::io(dir, e))?;
        let name = entry.file_name();
        if is_skipped(&name.to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let rel_path = rel_prefix.join(&name);
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            subdirs.push((path, rel_path));
        } else if is_content_file(&path) {
            files.push(SourceFile {
                rel_path,
                abs_path: path,
            });
        }
    }

    let nested = subdirs
        .par_iter()
        .map(|(path, rel_path)| scan_directory(path, rel_path))
        .collect::<Result<Vec<_>, _>>()?;
    files.extend(nested.into_iter().flatten());

    Ok(files)
}
