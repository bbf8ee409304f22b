//! Read helpers. The opinion engine never writes to the trees it reads.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content, returning `Ok(None)` when the file does not exist.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Search `start` and up to `max_levels` of its ancestors for a child
/// directory named `name`.
///
/// The start directory is canonicalized first so relative inputs such as
/// `.` still have ancestors to climb.
pub fn find_dir_upward(start: &Path, name: &str, max_levels: usize) -> Option<PathBuf> {
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .take(max_levels + 1)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
}
