//! Issue template chooser configuration.
//!
//! This module validates `config.yml`, the file that sits next to the
//! templates and controls the template chooser. It is parsed leniently:
//! unknown keys are ignored, a missing `blank_issues_enabled` is only a
//! warning, and every `contact_links` entry must carry `name`, `url` and
//! `about`.

mod model;
mod validator;


pub use model::render_value;
pub use validator::{ConfigReport, check_config_file};
