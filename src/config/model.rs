//! Typed view of `config.yml`.

use serde_yaml::{Mapping, Value};

/// Keys every `contact_links` entry must define.
pub const CONTACT_LINK_FIELDS: [&str; 3] = ["name", "url", "about"];

/// The issue template chooser configuration.
///
/// Both keys are optional. A key that is present with a null value is kept
/// as `Some(Value::Null)` so presence can be told apart from absence.
/// Every other key is ignored, whatever its type.
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    /// Whether blank issues are allowed; expected to be a boolean.
    pub blank_issues_enabled: Option<Value>,

    /// External links shown in the template chooser; expected to be a
    /// sequence of mappings.
    pub contact_links: Option<Value>,
}

impl ConfigDocument {
    /// Build the document from a parsed top-level mapping.
    pub fn from_mapping(mapping: &Mapping) -> Self {
        Self {
            blank_issues_enabled: mapping.get("blank_issues_enabled").cloned(),
            contact_links: mapping.get("contact_links").cloned(),
        }
    }
}

/// Whether a contact link entry is a mapping with every required key.
pub fn is_complete_contact_link(link: &Value) -> bool {
    link.as_mapping().is_some_and(|mapping| {
        CONTACT_LINK_FIELDS
            .iter()
            .all(|field| mapping.contains_key(*field))
    })
}

/// Render a YAML value for display.
///
/// Strings are shown bare, everything else as compact JSON, with the debug
/// form as fallback for values JSON cannot represent (such as sequence keys).
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
    }
}

/// Render a contact link entry for display.
pub fn render_contact_link(link: &Value) -> String {
    serde_json::to_string(link).unwrap_or_else(|_| format!("{:?}", link))
}
