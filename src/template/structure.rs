//! Markdown body checks for issue templates.

use crate::validate::{Outcome, ValidationError};

/// Prefix of a line that opens a section.
pub const SECTION_PREFIX: &str = "## ";

/// Minimum number of sections a template must have.
pub const MIN_SECTIONS: usize = 3;

/// Literal markers that count as a checklist item.
pub const CHECKLIST_MARKERS: [&str; 2] = ["- [ ]", "- [x]"];

/// Validate the section count and checklist presence of a template.
pub fn validate_structure(content: &str) -> Outcome {
    let sections = count_sections(content);

    if sections < MIN_SECTIONS {
        return Err(ValidationError::TooFewSections {
            found: sections,
            required: MIN_SECTIONS,
        });
    }

    if !has_checklist(content) {
        return Err(ValidationError::NoChecklist);
    }

    Ok(format!("Valid structure with {} sections", sections))
}

/// Count lines starting with exactly `## `.
///
/// Deeper headings (`### `) and headings without the trailing space do not
/// count.
pub fn count_sections(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| line.starts_with(SECTION_PREFIX))
        .count()
}

/// Whether any checklist marker appears anywhere in the text.
pub fn has_checklist(content: &str) -> bool {
    CHECKLIST_MARKERS
        .iter()
        .any(|marker| content.contains(marker))
}
