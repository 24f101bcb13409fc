//! Issue template validation.
//!
//! An issue template is a markdown file with YAML frontmatter:
//!
//! ```text
//! ---
//! name: Bug report
//! about: Report something that is broken
//! title: '[BUG] '
//! ---
//!
//! ## Description
//! ## Steps to Reproduce
//! ## Expected Behavior
//!
//! - [ ] I searched existing issues
//! ```
//!
//! Validation runs in two stages. The frontmatter is checked first; the
//! markdown structure is only checked when the frontmatter passed.

mod frontmatter;
mod io;
mod structure;

pub use io::read_template;

use crate::validate::Outcome;
use frontmatter::validate_frontmatter;
use structure::validate_structure;

/// Outcome of validating one template's text.
#[derive(Debug)]
pub struct TemplateReport {
    /// Result of the frontmatter stage.
    pub frontmatter: Outcome,
    /// Result of the structure stage, `None` when it was skipped.
    pub structure: Option<Outcome>,
}

impl TemplateReport {
    /// Whether both stages ran and passed.
    pub fn passed(&self) -> bool {
        self.frontmatter.is_ok() && matches!(self.structure, Some(Ok(_)))
    }
}

/// Run the frontmatter stage, then the structure stage if the first passed.
pub fn check_template(content: &str) -> TemplateReport {
    let frontmatter = validate_frontmatter(content);
    let structure = frontmatter
        .is_ok()
        .then(|| validate_structure(content));

    TemplateReport {
        frontmatter,
        structure,
    }
}
