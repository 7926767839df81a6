//! Per-language content validators.
//!
//! - `html`: doctype/tag presence and duplicate ids
//! - `javascript`: parse-only syntax check and delimiter balance

pub mod html;
pub mod javascript;

use crate::config::Pipeline;
use crate::error::{Defect, LintError};
use crate::strategy::fs::SourceFile;

/// Run the validator matching `pipeline` on a loaded file.
///
/// # Errors
///
/// Returns `LintError::Parser` if the JavaScript syntax checker cannot run.
pub fn validate_source(pipeline: Pipeline, file: &SourceFile) -> Result<Vec<Defect>, LintError> {
    match pipeline {
        Pipeline::Html => Ok(html::validate_html(
            &file.content,
            &file.relative_path.to_string_lossy(),
        )),
        Pipeline::JavaScript => javascript::validate_js(&file.content),
    }
}
