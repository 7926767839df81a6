//! Error and defect types for webcheck.

use std::path::PathBuf;

use thiserror::Error;

/// A failure that aborts a run.
///
/// These are distinct from `Defect` (a problem found inside a file that was
/// read successfully). A `LintError` means the tree could not be walked, a
/// file could not be read or the syntax checker could not run, and the run
/// stops there.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LintError {
    /// Directory traversal failed (missing root, permission denied, symlink loop).
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    /// A discovered file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The JavaScript grammar failed to load or produced no syntax tree.
    #[error("JavaScript syntax checker unavailable: {0}")]
    Parser(String),
    /// Writing the report to the console failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// A single problem found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    /// 1-indexed source line, or 0 when the defect has no specific line
    /// (balance checks and every HTML check).
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl Defect {
    /// A defect tied to no particular line.
    #[must_use]
    pub fn unlocated(message: impl Into<String>) -> Self {
        Self {
            line: 0,
            message: message.into(),
        }
    }

    /// A defect reported at a 1-indexed line.
    #[must_use]
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Format the defect for the console report.
    ///
    /// Located defects get a line-number suffix; unlocated ones print the
    /// bare message.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        if self.line > 0 {
            format!("{} (l\u{ed}nea {})", self.message, self.line)
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_located_defect() {
        let defect = Defect::at_line(7, "Unexpected token '}'");
        assert_eq!(
            defect.format_human_readable(),
            "Unexpected token '}' (l\u{ed}nea 7)"
        );
    }

    #[test]
    fn test_format_unlocated_defect() {
        let defect = Defect::unlocated("Falta etiqueta <body>");
        assert_eq!(defect.format_human_readable(), "Falta etiqueta <body>");
        assert!(!defect.format_human_readable().contains("(l"));
    }

    #[test]
    fn test_read_error_names_path() {
        let err = LintError::Read {
            path: PathBuf::from("public/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("public/index.html"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn test_parser_error_is_explicit() {
        let err = LintError::Parser("parser returned no syntax tree".to_owned());
        assert_eq!(
            err.to_string(),
            "JavaScript syntax checker unavailable: parser returned no syntax tree"
        );
    }
}
