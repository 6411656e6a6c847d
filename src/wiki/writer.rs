//! Change-detecting file writes.
//!
//! Unchanged pages are never touched, so modification times and diffs of the
//! wiki tree only move when content actually changes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use super::error::WikiError;

/// Outcome of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Created,
    Updated,
    Skipped,
}

impl std::fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WriteStatus::Created => "created",
            WriteStatus::Updated => "updated",
            WriteStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Write `content` to `path` unless the file already holds exactly that.
///
/// `force` rewrites existing files even when unchanged. Parent directories
/// are created before any write. I/O errors are returned, never retried.
pub fn write_if_changed(path: &Path, content: &str, force: bool) -> Result<WriteStatus, WikiError> {
    let status = match fs::read_to_string(path) {
        Ok(existing) if !force && existing == content => return Ok(WriteStatus::Skipped),
        Ok(_) => WriteStatus::Updated,
        Err(e) if e.kind() == ErrorKind::NotFound => WriteStatus::Created,
        // Present but unreadable as UTF-8: replace it.
        Err(e) if e.kind() == ErrorKind::InvalidData => WriteStatus::Updated,
        Err(e) => return Err(WikiError::io(path, e)),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WikiError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| WikiError::io(path, e))?;

    Ok(status)
}
