//! Validation report types.

use std::path::PathBuf;

use crate::error::Defect;

/// Defects found in one file, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Empty means the file passed.
    pub defects: Vec<Defect>,
}

impl FileReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Result of one pipeline run.
///
/// `success` is false when any file had a defect, or when the scan root was
/// missing (in which case `files` is empty).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunSummary {
    pub success: bool,
    /// Total number of defects across all files.
    pub error_count: usize,
    /// Per-file results in discovery order.
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Summary for a run that found nothing to validate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            success: true,
            error_count: 0,
            files: Vec::new(),
        }
    }

    /// Summary for a run that could not start because its scan root is missing.
    #[must_use]
    pub fn missing_scan_root() -> Self {
        Self {
            success: false,
            error_count: 0,
            files: Vec::new(),
        }
    }

    /// Aggregate per-file results.
    #[must_use]
    pub fn from_files(files: Vec<FileReport>) -> Self {
        let error_count = files.iter().map(|f| f.defects.len()).sum();
        let success = files.iter().all(FileReport::passed);
        Self {
            success,
            error_count,
            files,
        }
    }

    /// Number of files that had at least one defect.
    #[must_use]
    pub fn failed_files(&self) -> usize {
        self.files.iter().filter(|f| !f.passed()).count()
    }
}
