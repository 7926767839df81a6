use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use webcheck::{Console, Pipeline, ProjectLayout, run_pipeline};

use crate::logging;

/// Structural pre-commit checks for HTML and JavaScript sources.
#[derive(Debug, Parser)]
#[command(name = "webcheck", version, about)]
pub struct Cli {
    /// Verbosity of diagnostic logs on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root; HTML is scanned under `<ROOT>/public`, JavaScript under `<ROOT>`
    #[arg(long, value_name = "ROOT", default_value = ".", global = true)]
    pub project_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Check HTML documents for required tags and duplicate ids
    Html,
    /// Check JavaScript files for syntax errors and unbalanced delimiters
    #[command(alias = "javascript")]
    Js,
    /// Run the HTML check, then the JavaScript check
    All,
}

impl Commands {
    fn pipelines(self) -> &'static [Pipeline] {
        match self {
            Self::Html => &[Pipeline::Html],
            Self::Js => &[Pipeline::JavaScript],
            Self::All => &[Pipeline::Html, Pipeline::JavaScript],
        }
    }
}

/// Parse arguments, run the selected pipelines and report whether all of them passed.
///
/// Every selected pipeline runs even when an earlier one failed validation;
/// an I/O failure stops immediately.
///
/// # Errors
/// Returns an error if the tree cannot be walked, a file cannot be read, or
/// the report cannot be written.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let layout = ProjectLayout::new(&cli.project_root);
    tracing::debug!(root = %layout.project_root().display(), "resolved project root");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let mut success = true;
    for &pipeline in cli.command.pipelines() {
        let summary = {
            let mut console = Console::new(&mut out, &mut err);
            run_pipeline(pipeline, &layout, &mut console)
                .with_context(|| format!("{} validation aborted", pipeline.label()))?
        };
        success &= summary.success;
    }

    out.flush().context("failed to flush stdout")?;
    Ok(success)
}
