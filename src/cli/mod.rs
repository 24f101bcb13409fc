//! CLI argument parsing for issuelint.
//!
//! Uses clap derive macros. With no arguments the tool validates
//! `.github/ISSUE_TEMPLATE` relative to the current directory.

use crate::commands::DEFAULT_TEMPLATE_DIR;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Issuelint: structural linter for GitHub issue templates.
///
/// Checks every `*.md` template (except README.md) for YAML frontmatter
/// with `name`, `about` and a bracket-prefixed `title`, at least three `## `
/// sections and a checklist. Also checks `config.yml` if present.
#[derive(Parser, Debug)]
#[command(name = "issuelint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the issue templates.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_DIR)]
    pub dir: PathBuf,

    /// Print diagnostic logs to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
