//! Input file reading
//!
//! Loads the whole input into memory as one string. Invalid UTF-8 is
//! replaced rather than rejected, so only I/O failures are errors.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::model::FileAccessError;

/// File read when no path is given, relative to the working directory
pub const DEFAULT_INPUT: &str = "declaration.txt";

/// Read `declaration.txt` from the working directory
pub fn read_file_content() -> Result<String, FileAccessError> {
    read_file_content_from(Path::new(DEFAULT_INPUT))
}

/// Read the full content of `path` as text
pub fn read_file_content_from(path: &Path) -> Result<String, FileAccessError> {
    let bytes = fs::read(path).map_err(|e| FileAccessError::new(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(
                path = %path.display(),
                "Lossy UTF-8 conversion applied (some characters replaced)"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
