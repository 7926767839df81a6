//! Filesystem validation source.
//!
//! Discovers files on disk and reads them for the validation pipeline.
//! - Skip directories are pruned, never descended
//! - Symlinks are followed; loops surface as walk errors
//! - Entries are visited in file-name order so reports are stable
//! - Every traversal or read failure is returned to the caller

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ProjectLayout;
use crate::error::LintError;

/// A file loaded for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the project root, as shown in reports.
    pub relative_path: PathBuf,
    /// Full content; invalid UTF-8 sequences are replaced with U+FFFD.
    pub content: String,
}

impl SourceFile {
    /// Read `path` and compute its report path from `layout`.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Read` if the file cannot be opened or read.
    pub fn load(path: &Path, layout: &ProjectLayout) -> Result<Self, LintError> {
        let bytes = std::fs::read(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self {
            path: path.to_path_buf(),
            relative_path: layout.relative_path(path),
            content,
        })
    }
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included**.
///
/// The walk root itself is never pruned, whatever its name.
fn is_not_skip_dir(entry: &DirEntry, skip_dirs: &[&str]) -> bool {
    if entry.depth() > 0
        && entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !skip_dirs.contains(&name);
    }
    true
}

/// Check if a file name ends with the literal, case-sensitive `extension`.
fn matches_extension(entry: &DirEntry, extension: &str) -> bool {
    entry.file_name().to_string_lossy().ends_with(extension)
}

/// Find every regular file under `root` whose name ends with `extension`,
/// skipping any directory named in `skip_dirs`.
///
/// # Errors
///
/// Returns `LintError::Walk` if `root` does not exist, or if any directory
/// cannot be read during traversal.
pub fn discover(
    root: &Path,
    extension: &str,
    skip_dirs: &[&str],
) -> Result<Vec<PathBuf>, LintError> {
    let mut files = Vec::new();

    for entry_result in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| is_not_skip_dir(e, skip_dirs))
    {
        let entry = entry_result.map_err(|source| LintError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;

        if entry.file_type().is_file() && matches_extension(&entry, extension) {
            tracing::debug!(path = %entry.path().display(), "discovered file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
