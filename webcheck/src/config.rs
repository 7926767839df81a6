//! Configuration types for webcheck runs.
//!
//! Split into the fixed per-pipeline parameters (`Pipeline`) and the
//! project location (`ProjectLayout`). Neither is read from files or the
//! environment: the pipelines are fixed configuration and the project root
//! is a caller concern.

use std::path::{Path, PathBuf};

/// Directories never descended into by the HTML pipeline.
pub const HTML_SKIP_DIRS: &[&str] = &["node_modules", ".git", "uploads", "admin"];

/// Directories never descended into by the JavaScript pipeline.
pub const JS_SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "uploads", "admin"];

/// Subdirectory of the project root holding the HTML documents.
pub const PUBLIC_DIR: &str = "public";

/// One of the two independent validation pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    Html,
    JavaScript,
}

impl Pipeline {
    /// Literal, case-sensitive file name suffix selecting files for this pipeline.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => ".html",
            Self::JavaScript => ".js",
        }
    }

    /// Directory names pruned during discovery.
    #[must_use]
    pub fn skip_dirs(self) -> &'static [&'static str] {
        match self {
            Self::Html => HTML_SKIP_DIRS,
            Self::JavaScript => JS_SKIP_DIRS,
        }
    }

    /// Label used in the console header and footer.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::JavaScript => "JavaScript",
        }
    }

    /// Whether a missing scan root is a configuration error.
    ///
    /// The JavaScript pipeline scans the project root itself, so a missing
    /// root surfaces as a traversal error instead.
    #[must_use]
    pub fn requires_scan_root(self) -> bool {
        matches!(self, Self::Html)
    }
}

/// Location of the project being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_root: PathBuf,
}

impl ProjectLayout {
    /// Build a layout rooted at `project_root`.
    ///
    /// Relative roots are resolved against the current directory without
    /// touching the filesystem, so a missing root is still reported by the
    /// pipeline that needs it.
    #[must_use]
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref();
        let project_root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self { project_root }
    }

    /// Absolute project root; relative paths in reports are computed from here.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Directory where discovery starts for `pipeline`.
    #[must_use]
    pub fn scan_root(&self, pipeline: Pipeline) -> PathBuf {
        match pipeline {
            Pipeline::Html => self.project_root.join(PUBLIC_DIR),
            Pipeline::JavaScript => self.project_root.clone(),
        }
    }

    /// Path of `file` relative to the project root.
    ///
    /// Falls back to the path unchanged when it does not live under the root.
    #[must_use]
    pub fn relative_path(&self, file: &Path) -> PathBuf {
        file.strip_prefix(&self.project_root)
            .map_or_else(|_| file.to_path_buf(), Path::to_path_buf)
    }
}
