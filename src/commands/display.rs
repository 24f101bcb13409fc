//! Console output for a validation run.
//!
//! Each `render_*` function returns the lines for one part of the report,
//! newline-terminated; the orchestrator prints them to stdout.

use crate::config::{ConfigReport, render_value};
use crate::template::TemplateReport;
use crate::validate::{Outcome, ValidationError};
use std::path::Path;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

/// The tool banner.
pub fn render_header() -> String {
    let mut out = String::new();
    push_line(&mut out, "🔍 GitHub Issue Template Validator");
    push_line(&mut out, rule());
    out
}

/// The banner that opens the report for one file.
pub fn render_file_banner(path: &Path) -> String {
    let mut out = String::new();
    push_line(&mut out, "");
    push_line(&mut out, rule());
    push_line(&mut out, format!("Validating: {}", path.display()));
    push_line(&mut out, rule());
    out
}

/// Warning for an absent config file.
pub fn render_missing_config(path: &Path) -> String {
    format!("⚠️  Warning: {} not found\n", path.display())
}

/// The result of checking `config.yml`.
pub fn render_config_result(result: &Result<ConfigReport, ValidationError>) -> String {
    let report = match result {
        Ok(report) => report,
        Err(ValidationError::ParseError(msg)) => return format!("❌ YAML Error: {}\n", msg),
        Err(err) => return format!("❌ Error: {}\n", err),
    };

    let mut out = String::new();

    if let Some(value) = &report.blank_issues_enabled {
        push_line(
            &mut out,
            format!("✅ blank_issues_enabled: {}", render_value(value)),
        );
    }

    for warning in &report.warnings {
        push_line(&mut out, format!("⚠️  Warning: {}", warning));
    }

    if let Some(count) = report.contact_link_count {
        push_line(&mut out, format!("✅ Contact links: {} defined", count));
    }

    match &report.outcome {
        Ok(msg) => push_line(&mut out, format!("✅ {}", msg)),
        Err(err @ ValidationError::InvalidContactLink(_)) => {
            push_line(&mut out, format!("❌ {}", err))
        }
        Err(err) => push_line(&mut out, format!("❌ Error: {}", err)),
    }

    out
}

/// How many templates were discovered.
pub fn render_template_count(count: usize) -> String {
    format!("\nFound {} template file(s)\n", count)
}

/// A template that could not be read.
pub fn render_read_error(err: &ValidationError) -> String {
    format!("❌ {}\n", err)
}

/// The per-stage results for one template.
pub fn render_template_report(report: &TemplateReport) -> String {
    let mut out = String::new();
    push_line(&mut out, render_stage("YAML Frontmatter", &report.frontmatter));

    if let Some(structure) = &report.structure {
        push_line(&mut out, render_stage("Markdown Structure", structure));
    }

    if report.passed() {
        push_line(&mut out, "✅ Template is valid!");
    }

    out
}

fn render_stage(label: &str, outcome: &Outcome) -> String {
    match outcome {
        Ok(msg) => format!("✅ {}: {}", label, msg),
        Err(err) => format!("❌ {}: {}", label, err),
    }
}

/// The closing summary.
pub fn render_summary(all_passed: bool) -> String {
    let mut out = String::new();
    push_line(&mut out, "");
    push_line(&mut out, rule());
    push_line(&mut out, "VALIDATION SUMMARY");
    push_line(&mut out, rule());

    if all_passed {
        push_line(&mut out, "✅ All templates are valid!");
    } else {
        push_line(&mut out, "❌ Some templates have errors. Please fix them.");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::check_template;
    use crate::test_support::VALID_TEMPLATE;
    use serde_yaml::Value;

    fn lines(rendered: &str) -> Vec<&str> {
        rendered.lines().collect()
    }

    fn config_report(outcome: Outcome) -> ConfigReport {
        ConfigReport {
            blank_issues_enabled: Some(Value::Bool(true)),
            contact_link_count: Some(1),
            warnings: Vec::new(),
            outcome,
        }
    }

    #[test]
    fn header_and_banner_lines() {
        let rule = "=".repeat(60);

        assert_eq!(
            lines(&render_header()),
            vec!["🔍 GitHub Issue Template Validator", rule.as_str()]
        );
        assert_eq!(
            lines(&render_file_banner(Path::new("tpl/bug.md"))),
            vec!["", rule.as_str(), "Validating: tpl/bug.md", rule.as_str()]
        );
    }

    #[test]
    fn passing_template_lines() {
        let report = check_template(VALID_TEMPLATE);

        assert_eq!(
            lines(&render_template_report(&report)),
            vec![
                "✅ YAML Frontmatter: Valid",
                "✅ Markdown Structure: Valid structure with 3 sections",
                "✅ Template is valid!",
            ]
        );
    }

    #[test]
    fn frontmatter_failure_lines() {
        let report = check_template("## A\n## B\n## C\n- [ ] done\n");

        assert_eq!(
            lines(&render_template_report(&report)),
            vec!["❌ YAML Frontmatter: Missing YAML frontmatter delimiter"]
        );
    }

    #[test]
    fn structure_failure_lines() {
        let report = check_template("---\nname: Bug\nabout: x\ntitle: '[BUG]'\n---\n## A\n");

        assert_eq!(
            lines(&render_template_report(&report)),
            vec![
                "✅ YAML Frontmatter: Valid",
                "❌ Markdown Structure: Too few sections (1). Expected at least 3.",
            ]
        );
    }

    #[test]
    fn valid_config_lines() {
        let report = config_report(Ok("Config file is valid!".to_string()));

        assert_eq!(
            lines(&render_config_result(&Ok(report))),
            vec![
                "✅ blank_issues_enabled: true",
                "✅ Contact links: 1 defined",
                "✅ Config file is valid!",
            ]
        );
    }

    #[test]
    fn invalid_contact_link_lines() {
        let report = config_report(Err(ValidationError::InvalidContactLink(
            r#"{"name":"Chat","url":"http://x"}"#.to_string(),
        )));

        assert_eq!(
            lines(&render_config_result(&Ok(report))),
            vec![
                "✅ blank_issues_enabled: true",
                "✅ Contact links: 1 defined",
                r#"❌ Invalid contact link: {"name":"Chat","url":"http://x"}"#,
            ]
        );
    }

    #[test]
    fn non_boolean_blank_issues_enabled_shows_value_and_warning() {
        let report = ConfigReport {
            blank_issues_enabled: Some(Value::String("sometimes".to_string())),
            contact_link_count: None,
            warnings: vec!["blank_issues_enabled should be a boolean, found a string".to_string()],
            outcome: Ok("Config file is valid!".to_string()),
        };

        assert_eq!(
            lines(&render_config_result(&Ok(report))),
            vec![
                "✅ blank_issues_enabled: sometimes",
                "⚠️  Warning: blank_issues_enabled should be a boolean, found a string",
                "✅ Config file is valid!",
            ]
        );
    }

    #[test]
    fn unusable_config_lines() {
        let parse = Err(ValidationError::ParseError("bad indent".to_string()));
        assert_eq!(render_config_result(&parse), "❌ YAML Error: bad indent\n");

        let generic = Err(ValidationError::GenericError(
            "config must be a mapping, found null".to_string(),
        ));
        assert_eq!(
            render_config_result(&generic),
            "❌ Error: config must be a mapping, found null\n"
        );
    }

    #[test]
    fn count_and_missing_config_lines() {
        assert_eq!(render_template_count(2), "\nFound 2 template file(s)\n");
        assert_eq!(
            render_missing_config(Path::new("tpl/config.yml")),
            "⚠️  Warning: tpl/config.yml not found\n"
        );
    }

    #[test]
    fn summary_lines() {
        let rule = "=".repeat(60);

        assert_eq!(
            lines(&render_summary(true)),
            vec![
                "",
                rule.as_str(),
                "VALIDATION SUMMARY",
                rule.as_str(),
                "✅ All templates are valid!",
            ]
        );
        assert_eq!(
            lines(&render_summary(false)).last(),
            Some(&"❌ Some templates have errors. Please fix them.")
        );
    }
}
