//! File I/O for template files.

use crate::validate::ValidationError;
use std::path::Path;

/// Read a template file into memory.
pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String, ValidationError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| ValidationError::Io {
        path: path.to_path_buf(),
        source,
    })
}
