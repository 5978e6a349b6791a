//! Watch list loading
//!
//! The watch list is a plain text file with one path per line. Anything
//! after [`COMMENT_CHAR`] is ignored, as are blank lines. Only the first
//! whitespace-separated token of a line is used, so paths containing
//! spaces cannot be listed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreetopError};

/// Comment character for the watch list (anything after it is ignored)
pub const COMMENT_CHAR: char = '#';

/// Parse watch list text into paths, in the order they appear
pub fn parse_config(text: &str) -> Vec<PathBuf> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<PathBuf> {
    let line = line.trim_start();
    let line = match line.find(COMMENT_CHAR) {
        Some(idx) => &line[..idx],
        None => line,
    };

    line.split_whitespace().next().map(PathBuf::from)
}

/// Read and parse the watch list at `path`.
///
/// A missing or unreadable watch list is fatal; the caller reports it before
/// the terminal is taken over.
pub fn load_config(path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read(path).map_err(|e| TreetopError::config_open(path, e))?;
    let paths = parse_config(&String::from_utf8_lossy(&text));
    log::debug!("Watch list {:?} names {} file(s)", path, paths.len());
    Ok(paths)
}
