//! Console formatting for validation runs.
//!
//! The wording is fixed: existing pre-commit hooks and CI logs match on it.
//! Color is never added.

use std::io::Write;
use std::path::Path;

use crate::config::Pipeline;
use crate::error::Defect;

const PASS: &str = "\u{2705}";
const FAIL: &str = "\u{274c}";
const CLIPBOARD: &str = "\u{1f4cb}";
const WARNING: &str = "\u{26a0}\u{fe0f}";
const INFO: &str = "\u{2139}\u{fe0f}";

/// Destination streams for a run: report lines go to `out`, configuration
/// problems and warnings go to `err`.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    #[must_use]
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// Printed when the HTML `public` directory does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn missing_scan_root(&mut self) -> std::io::Result<()> {
        writeln!(
            self.err,
            "{FAIL} No se encontr\u{f3} el directorio public"
        )
    }

    /// Printed when discovery found nothing to validate.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn no_files(&mut self, pipeline: Pipeline) -> std::io::Result<()> {
        match pipeline {
            Pipeline::Html => writeln!(
                self.err,
                "{WARNING}  No se encontraron archivos {}",
                pipeline.label()
            ),
            Pipeline::JavaScript => writeln!(
                self.out,
                "{INFO}  No se encontraron archivos {}\n",
                pipeline.label()
            ),
        }
    }

    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn header(&mut self, pipeline: Pipeline, count: usize) -> std::io::Result<()> {
        writeln!(
            self.out,
            "\n{CLIPBOARD} Validando {count} archivos {}\n",
            pipeline.label()
        )
    }

    /// Pass line, or fail line followed by one indented line per defect.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn file_result(&mut self, relative_path: &Path, defects: &[Defect]) -> std::io::Result<()> {
        if defects.is_empty() {
            return writeln!(self.out, "{PASS} {}", relative_path.display());
        }
        writeln!(self.out, "{FAIL} {}", relative_path.display())?;
        for defect in defects {
            writeln!(self.out, "   {FAIL} {}", defect.format_human_readable())?;
        }
        Ok(())
    }

    /// Blank separator line followed by the run verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn footer(&mut self, pipeline: Pipeline, error_count: usize) -> std::io::Result<()> {
        writeln!(self.out)?;
        if error_count > 0 {
            writeln!(
                self.out,
                "{FAIL} Se encontraron {error_count} errores en {}\n",
                pipeline.label()
            )
        } else {
            writeln!(self.out, "{PASS} {} v\u{e1}lido\n", pipeline.label())
        }
    }
}
