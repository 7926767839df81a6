//! # webcheck
//!
//! Structural pre-commit checks for HTML and JavaScript source trees.
//!
//! Each pipeline walks its scan root once, runs a fixed battery of lexical
//! checks on every matching file and prints a pass/fail report. Defects are
//! data; only traversal, read, parser and console failures abort a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webcheck::{Console, ProjectLayout, validate_all_html};
//!
//! let layout = ProjectLayout::new(".");
//! let mut out = std::io::stdout();
//! let mut err = std::io::stderr();
//! let mut console = Console::new(&mut out, &mut err);
//!
//! let summary = validate_all_html(&layout, &mut console).unwrap();
//! println!("Defects: {}", summary.error_count);
//! println!("OK: {}", summary.success);
//! ```

mod config;
mod error;
mod format;
pub mod output;
mod report;
mod strategy;

pub use config::{HTML_SKIP_DIRS, JS_SKIP_DIRS, PUBLIC_DIR, Pipeline, ProjectLayout};
pub use error::{Defect, LintError};
pub use format::html::{is_component_fragment, validate_html};
pub use format::javascript::validate_js;
pub use output::Console;
pub use report::{FileReport, RunSummary};
pub use strategy::fs::{SourceFile, discover};

use format::validate_source;

/// Validate every HTML document under `<project_root>/public`.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked, a file cannot be read, or
/// the report cannot be written. A missing `public` directory is not an
/// error: it yields a failed `RunSummary`.
pub fn validate_all_html(
    layout: &ProjectLayout,
    console: &mut Console<'_>,
) -> Result<RunSummary, LintError> {
    run_pipeline(Pipeline::Html, layout, console)
}

/// Validate every JavaScript file under the project root.
///
/// # Errors
///
/// Returns an error if the project root does not exist, the tree cannot be
/// walked, a file cannot be read, the syntax checker cannot run, or the
/// report cannot be written.
pub fn validate_all_javascript(
    layout: &ProjectLayout,
    console: &mut Console<'_>,
) -> Result<RunSummary, LintError> {
    run_pipeline(Pipeline::JavaScript, layout, console)
}

/// Discover, validate and report every file for one pipeline.
///
/// Files are processed in discovery order and validated independently; the
/// first I/O failure aborts the run.
///
/// # Errors
///
/// Returns `LintError::Walk` or `LintError::Read` for filesystem failures,
/// `LintError::Parser` if the JavaScript syntax checker cannot run, and
/// `LintError::Output` if the console cannot be written.
pub fn run_pipeline(
    pipeline: Pipeline,
    layout: &ProjectLayout,
    console: &mut Console<'_>,
) -> Result<RunSummary, LintError> {
    let scan_root = layout.scan_root(pipeline);

    if pipeline.requires_scan_root() && !scan_root.exists() {
        tracing::warn!(path = %scan_root.display(), "scan root does not exist");
        console.missing_scan_root()?;
        return Ok(RunSummary::missing_scan_root());
    }

    let files = discover(&scan_root, pipeline.extension(), pipeline.skip_dirs())?;

    if files.is_empty() {
        tracing::info!(pipeline = pipeline.label(), root = %scan_root.display(), "no files found");
        console.no_files(pipeline)?;
        return Ok(RunSummary::empty());
    }

    console.header(pipeline, files.len())?;

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let source = SourceFile::load(path, layout)?;
        let defects = validate_source(pipeline, &source)?;
        tracing::debug!(
            file = %source.relative_path.display(),
            defects = defects.len(),
            "validated"
        );
        console.file_result(&source.relative_path, &defects)?;
        reports.push(FileReport {
            relative_path: source.relative_path,
            defects,
        });
    }

    let summary = RunSummary::from_files(reports);
    console.footer(pipeline, summary.error_count)?;

    tracing::info!(
        pipeline = pipeline.label(),
        files = summary.files.len(),
        failed = summary.failed_files(),
        errors = summary.error_count,
        "validation finished"
    );
    Ok(summary)
}
