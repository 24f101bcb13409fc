//! Validation run over an issue template directory.
//!
//! # Steps
//!
//! 1. Verify the template directory exists (fatal otherwise)
//! 2. Validate `config.yml` if present, warn if not
//! 3. Discover `*.md` templates, excluding `README.md` (fatal if none)
//! 4. Validate every template; one failure never stops the others
//! 5. Print the summary
//!
//! Exit-code translation happens in `main` from the returned [`RunSummary`].

mod display;


use crate::config::check_config_file;
use crate::error::{LintError, Result};
use crate::exit_codes;
use crate::template::{check_template, read_template};
use crate::validate::all_passed;
use globset::Glob;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Template directory used when none is given.
pub const DEFAULT_TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";

/// Name of the chooser config inside the template directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Markdown file in the template directory that is not a template.
pub const EXCLUDED_TEMPLATE: &str = "README.md";

const TEMPLATE_GLOB: &str = "*.md";

/// Per-file results of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Config result, `None` when there was no config file.
    pub config_passed: Option<bool>,
    /// Each template in validation order with its result.
    pub templates: Vec<(PathBuf, bool)>,
}

impl RunSummary {
    /// Whether the config (if any) and every template passed.
    pub fn all_passed(&self) -> bool {
        all_passed(
            self.config_passed
                .into_iter()
                .chain(self.templates.iter().map(|(_, passed)| *passed)),
        )
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

/// Validate the templates and config in `dir`, printing progress to stdout.
///
/// Returns `Err` only for fatal conditions: the directory is missing, cannot
/// be listed, or contains no templates.
pub fn run(dir: &Path) -> Result<RunSummary> {
    if !dir.exists() {
        return Err(LintError::DirectoryNotFound(dir.to_path_buf()));
    }

    info!(dir = %dir.display(), "validating issue templates");
    print!("{}", display::render_header());

    let config_passed = validate_config(dir);

    let templates = discover_templates(dir)?;
    if templates.is_empty() {
        return Err(LintError::NoTemplatesFound(dir.to_path_buf()));
    }

    print!("{}", display::render_template_count(templates.len()));

    let templates = templates
        .into_iter()
        .map(|path| {
            let passed = validate_template_file(&path);
            (path, passed)
        })
        .collect();

    let summary = RunSummary {
        config_passed,
        templates,
    };

    print!("{}", display::render_summary(summary.all_passed()));

    Ok(summary)
}

/// List the templates in `dir` in file-name order.
///
/// Matches `*.md` regular files directly inside `dir`, hidden ones
/// included, except `README.md` (case-sensitive). A path that exists but is
/// not a directory holds no templates.
pub fn discover_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        debug!(path = %dir.display(), "template path is not a directory");
        return Ok(Vec::new());
    }

    let matcher = Glob::new(TEMPLATE_GLOB)
        .map_err(|e| discovery_error(dir, e))?
        .compile_matcher();

    let entries = std::fs::read_dir(dir).map_err(|e| discovery_error(dir, e))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| discovery_error(dir, e))?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if name == EXCLUDED_TEMPLATE || !matcher.is_match(&*name) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        debug!(path = %path.display(), "discovered template");
        templates.push(path);
    }

    templates.sort();
    Ok(templates)
}

fn discovery_error(dir: &Path, err: impl Display) -> LintError {
    LintError::Discovery {
        dir: dir.to_path_buf(),
        reason: err.to_string(),
    }
}

// Returns `None` when there is no config file to check.
fn validate_config(dir: &Path) -> Option<bool> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        print!("{}", display::render_missing_config(&path));
        return None;
    }

    print!("{}", display::render_file_banner(&path));
    let result = check_config_file(&path);
    print!("{}", display::render_config_result(&result));

    let passed = result.as_ref().is_ok_and(|report| report.passed());
    debug!(path = %path.display(), passed, "validated config");
    Some(passed)
}

fn validate_template_file(path: &Path) -> bool {
    print!("{}", display::render_file_banner(path));

    let report = match read_template(path) {
        Ok(content) => check_template(&content),
        Err(err) => {
            print!("{}", display::render_read_error(&err));
            return false;
        }
    };

    print!("{}", display::render_template_report(&report));

    let passed = report.passed();
    debug!(path = %path.display(), passed, "validated template");
    passed
}
