//! Frontmatter checks for issue templates.
//!
//! Template files start with a YAML block delimited by `---`:
//!
//! ```text
//! ---
//! name: Bug report
//! about: Report something that is broken
//! title: '[BUG] '
//! ---
//! ```

use crate::validate::{Outcome, ValidationError, describe_value};
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Frontmatter delimiter.
pub const DELIMITER: &str = "---";

/// Keys every template must define, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "about", "title"];

/// First character a template title must have.
pub const TITLE_PREFIX: char = '[';

/// Validate the frontmatter of a template file.
///
/// Checks run in order and stop at the first failure: delimiters, YAML
/// syntax, mapping shape, required fields, then the title prefix.
pub fn validate_frontmatter(content: &str) -> Outcome {
    let yaml = extract_frontmatter(content)?;
    let mapping = parse_frontmatter(yaml)?;

    debug!(keys = mapping.len(), "parsed frontmatter");

    check_required_fields(&mapping)?;
    check_title(&mapping)?;

    Ok("Valid".to_string())
}

/// Return the raw YAML between the first two `---` markers.
///
/// The text is split on the delimiter into at most three parts; the middle
/// one is the frontmatter. Fewer than three parts means there is no closing
/// delimiter.
pub fn extract_frontmatter(content: &str) -> Result<&str, ValidationError> {
    if !content.starts_with(DELIMITER) {
        return Err(ValidationError::MissingDelimiter);
    }

    let mut parts = content.splitn(3, DELIMITER);
    let _leading = parts.next();

    match (parts.next(), parts.next()) {
        (Some(yaml), Some(_body)) => Ok(yaml),
        _ => Err(ValidationError::MalformedStructure),
    }
}

/// Parse frontmatter YAML, requiring a mapping at the top level.
pub fn parse_frontmatter(yaml: &str) -> Result<Mapping, ValidationError> {
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ValidationError::NotAMapping(describe_value(&other))),
    }
}

fn check_required_fields(mapping: &Mapping) -> Result<(), ValidationError> {
    match REQUIRED_FIELDS
        .iter()
        .find(|field| !mapping.contains_key(**field))
    {
        Some(field) => Err(ValidationError::MissingField(field.to_string())),
        None => Ok(()),
    }
}

// Only the first character is checked; any bracketed prefix is accepted.
fn check_title(mapping: &Mapping) -> Result<(), ValidationError> {
    match mapping.get("title") {
        Some(Value::String(title)) if title.starts_with(TITLE_PREFIX) => Ok(()),
        _ => Err(ValidationError::BadTitleFormat),
    }
}
