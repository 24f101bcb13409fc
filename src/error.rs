//! Error types for the issuelint CLI.
//!
//! These are the errors that stop a run before the summary. Per-file
//! problems are [`crate::validate::ValidationError`]s and never end up here.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error for an issuelint run.
#[derive(Error, Debug)]
pub enum LintError {
    /// The template directory does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory holds no `*.md` templates besides `README.md`.
    #[error("No template files found in {}", .0.display())]
    NoTemplatesFound(PathBuf),

    /// The directory could not be listed.
    #[error("Failed to list templates in '{}': {reason}", dir.display())]
    Discovery { dir: PathBuf, reason: String },
}

impl LintError {
    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::DirectoryNotFound(_)
            | LintError::NoTemplatesFound(_)
            | LintError::Discovery { .. } => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for issuelint runs.
pub type Result<T> = std::result::Result<T, LintError>;
