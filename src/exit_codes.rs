//! Exit code constants for the issuelint CLI.
//!
//! - 0: every template (and the config, if present) is valid
//! - 1: a validation failed, the template directory is missing, or it holds
//!   no templates

/// All validations passed.
pub const SUCCESS: i32 = 0;

/// Any validation failure or fatal error.
pub const FAILURE: i32 = 1;
