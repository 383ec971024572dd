//! Looked-up package history
//!
//! Reads the newline-delimited list of package names the user has already
//! looked up. The file is written by the companion `brew info` wrapper; this
//! tool only ever reads it. A missing file simply means nothing has been
//! looked up yet.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Default history file location under the user cache directory
pub fn default_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("tapfresh")
        .join("looked_up")
}

/// Read the looked-up name set from `path`, or from the default location.
///
/// A missing file yields the empty set; any other read failure is an error.
pub fn looked_up_set(path: Option<&Path>) -> Result<HashSet<String>> {
    let path = path.map_or_else(default_path, Path::to_path_buf);

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(parse_history(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashSet::new()),
        Err(e) => Err(error::history_read_failed(
            path.display().to_string(),
            e.to_string(),
        )),
    }
}

/// Parse history file content: one name per line, `#` comments and blank
/// lines skipped
fn parse_history(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
