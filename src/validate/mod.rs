//! Shared validation types for issuelint.
//!
//! Every per-file check returns an [`Outcome`]: the informational message on
//! success, or a [`ValidationError`] describing the first problem found.
//! These errors never abort a run; the orchestrator prints them and folds
//! them into the overall pass/fail status.

use serde_yaml::Value;
use std::path::PathBuf;
use thiserror::Error;

/// A per-file validation failure.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The file does not start with the `---` frontmatter delimiter.
    #[error("Missing YAML frontmatter delimiter")]
    MissingDelimiter,

    /// The opening delimiter is present but the closing one is not.
    #[error("Invalid frontmatter structure")]
    MalformedStructure,

    /// The YAML parser rejected the document.
    #[error("YAML parsing error: {0}")]
    ParseError(String),

    /// The frontmatter parsed, but not into a mapping.
    #[error("Frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A required frontmatter key is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The title does not start with a bracketed prefix.
    #[error("Title should start with a prefix like '[BUG]'")]
    BadTitleFormat,

    /// The body has fewer `## ` headings than required.
    #[error("Too few sections ({found}). Expected at least {required}.")]
    TooFewSections { found: usize, required: usize },

    /// The body contains no checklist item.
    #[error("No checklist found")]
    NoChecklist,

    /// Any config failure that is not a YAML syntax error.
    #[error("{0}")]
    GenericError(String),

    /// A `contact_links` entry lacks `name`, `url` or `about`.
    #[error("Invalid contact link: {0}")]
    InvalidContactLink(String),

    /// The template file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_yaml::Error> for ValidationError {
    fn from(err: serde_yaml::Error) -> Self {
        ValidationError::ParseError(err.to_string())
    }
}

/// Result of a single validation step: a success message or the failure.
pub type Outcome = std::result::Result<String, ValidationError>;

/// Fold individual pass/fail results into the overall status.
///
/// An empty sequence counts as passing.
pub fn all_passed<I>(results: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    results.into_iter().fold(true, |acc, passed| acc && passed)
}

/// Short human-readable name for the kind of a YAML value.
pub fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
