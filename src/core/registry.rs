//! Registry of monitored files
//!
//! Each entry owns one open read handle for its whole lifetime and caches the
//! last line of the file. Polling stats the *path* (not the handle) and
//! re-extracts the last line whenever the modification time changes.
//!
//! # Ordering
//!
//! Entries are stored in the reverse of the order they were given: the last
//! path of the watch list is entry 0. Dashboard rows use the same indices.

use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Result, TreetopError};

use super::tail::{extract_detail_view, extract_last_line, TailLimits};

/// Whether a file changed since it was last rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeState {
    Unchanged,
    Updated,
}

/// A file being tailed
#[derive(Debug)]
pub struct MonitoredFile {
    path: PathBuf,
    display_name: String,
    handle: File,
    /// `None` until the first poll, so the first poll always updates
    last_modified: Option<SystemTime>,
    tail_line: String,
    pub state: ChangeState,
}

impl MonitoredFile {
    /// Open `path` for reading
    pub fn open(path: &Path) -> io::Result<Self> {
        let handle = File::open(path)?;
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            display_name,
            handle,
            last_modified: None,
            tail_line: String::new(),
            state: ChangeState::Unchanged,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn tail_line(&self) -> &str {
        &self.tail_line
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    /// Stat the path and refresh the cached line if the mtime moved.
    ///
    /// Returns `true` when the entry was marked as updated.
    fn poll(&mut self, limits: TailLimits) -> Result<bool> {
        let modified = fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| TreetopError::stat(self.display_name.clone(), e))?;

        if self.last_modified == Some(modified) {
            return Ok(false);
        }

        // A failed read keeps the previous line; the file is still there
        if let Ok(line) = extract_last_line(&mut self.handle, limits) {
            self.tail_line = line;
        }
        self.last_modified = Some(modified);
        self.state = ChangeState::Updated;
        Ok(true)
    }

    /// Wrapped tail of the file for a pane of `rows` x `cols` (border included)
    pub fn detail_view(&mut self, rows: u16, cols: u16) -> Vec<String> {
        extract_detail_view(&mut self.handle, rows, cols)
    }
}

/// A watch list entry that could not be opened
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: io::Error,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not open file: '{}' ({})",
            self.path.display(),
            self.reason
        )
    }
}

/// Ordered collection of monitored files
#[derive(Debug)]
pub struct FileRegistry {
    entries: Vec<MonitoredFile>,
    limits: TailLimits,
}

impl FileRegistry {
    /// Open every path, skipping the ones that cannot be opened.
    ///
    /// Entries come out in reverse order of `paths`.
    pub fn open_all<P: AsRef<Path>>(paths: &[P], limits: TailLimits) -> (Self, Vec<SkippedFile>) {
        let mut entries = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match MonitoredFile::open(path) {
                Ok(entry) => {
                    log::debug!("Monitoring file: {:?}", path);
                    entries.push(entry);
                }
                Err(reason) => skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason,
                }),
            }
        }

        entries.reverse();
        (Self { entries, limits }, skipped)
    }

    /// Check every file for modification, in registry order.
    ///
    /// Returns how many entries were marked as updated. A file that can no
    /// longer be stat'ed aborts the whole poll.
    pub fn poll(&mut self) -> Result<usize> {
        let mut updated = 0;
        for entry in &mut self.entries {
            if entry.poll(self.limits)? {
                updated += 1;
            }
        }
        Ok(updated)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limits(&self) -> TailLimits {
        self.limits
    }

    pub fn entries(&self) -> &[MonitoredFile] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&MonitoredFile> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MonitoredFile> {
        self.entries.get_mut(index)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MonitoredFile> {
        self.entries.iter_mut()
    }
}
