//! Validation of `config.yml`.

use super::model::{ConfigDocument, is_complete_contact_link, render_contact_link};
use crate::validate::{Outcome, ValidationError, describe_value};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// What was learned from a config file that parsed successfully.
#[derive(Debug)]
pub struct ConfigReport {
    /// Value of `blank_issues_enabled`, if the key is present.
    pub blank_issues_enabled: Option<Value>,
    /// Number of `contact_links` entries, if the key holds a sequence.
    pub contact_link_count: Option<usize>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// Result of the contact link checks.
    pub outcome: Outcome,
}

impl ConfigReport {
    /// Warnings never fail a config; only the contact link checks do.
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Check config text.
///
/// Returns `Err` only when the document cannot be used at all: a YAML syntax
/// error (`ParseError`) or a document that is not a mapping (`GenericError`).
/// Contact link failures are reported through [`ConfigReport::outcome`].
pub fn check_config(content: &str) -> Result<ConfigReport, ValidationError> {
    let document = match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(mapping) => ConfigDocument::from_mapping(&mapping),
        other => {
            return Err(ValidationError::GenericError(format!(
                "config must be a mapping, found {}",
                describe_value(&other)
            )));
        }
    };

    let mut warnings = Vec::new();
    match &document.blank_issues_enabled {
        None => warnings.push("blank_issues_enabled not set".to_string()),
        Some(Value::Bool(_)) => {}
        Some(other) => warnings.push(format!(
            "blank_issues_enabled should be a boolean, found {}",
            describe_value(other)
        )),
    }

    let (contact_link_count, outcome) = match &document.contact_links {
        None => (None, Ok(())),
        Some(Value::Sequence(links)) => {
            debug!(count = links.len(), "checking contact links");
            (Some(links.len()), check_contact_links(links))
        }
        Some(other) => (
            None,
            Err(ValidationError::GenericError(format!(
                "contact_links must be a sequence, found {}",
                describe_value(other)
            ))),
        ),
    };

    Ok(ConfigReport {
        blank_issues_enabled: document.blank_issues_enabled,
        contact_link_count,
        warnings,
        outcome: outcome.map(|()| "Config file is valid!".to_string()),
    })
}

/// Read and check a config file.
///
/// Read failures are reported as `GenericError`.
pub fn check_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigReport, ValidationError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ValidationError::GenericError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    check_config(&content)
}

// Stops at the first incomplete entry.
fn check_contact_links(links: &[Value]) -> Result<(), ValidationError> {
    match links.iter().find(|link| !is_complete_contact_link(link)) {
        Some(link) => Err(ValidationError::InvalidContactLink(render_contact_link(
            link,
        ))),
        None => Ok(()),
    }
}
