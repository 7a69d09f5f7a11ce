//! Durable progress marker for the batch controller
//!
//! The checkpoint file holds a single decimal integer: the index of the next
//! record to process. Records `[0, next_index)` are fully processed.

use crate::adapters::fs::{create_parent_dirs, open_for_write};
use crate::domain::{AuditError, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File-backed checkpoint
///
/// Single-writer, single-process. No locking is performed.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    path: PathBuf,
}

impl Checkpoint {
    /// Create a checkpoint stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the checkpoint file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the next record index
    ///
    /// Returns 0 when the file does not exist or holds only whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::CorruptState`] if the content is not a
    /// non-negative integer, [`AuditError::Persistence`] if the file exists
    /// but cannot be read.
    pub fn load(&self) -> Result<usize> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No checkpoint found, starting at 0");
                return Ok(0);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(AuditError::corrupt_state(&self.path, e.to_string()));
            }
            Err(e) => return Err(AuditError::persistence(&self.path, e)),
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }

        trimmed.parse::<usize>().map_err(|e| {
            AuditError::corrupt_state(
                &self.path,
                format!("expected a non-negative integer, found '{trimmed}': {e}"),
            )
        })
    }

    /// Persists `next_index`, replacing any previous value
    ///
    /// The value is written to a sibling temp file which is synced and then
    /// renamed over the checkpoint, so readers see either the old or the new
    /// value. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Persistence`] on any I/O failure.
    pub fn save(&self, next_index: usize) -> Result<()> {
        create_parent_dirs(&self.path).map_err(|e| AuditError::persistence(&self.path, e))?;

        let tmp_path = self.temp_path();
        let write = || -> std::io::Result<()> {
            let mut file = open_for_write(&tmp_path, false)?;
            file.write_all(next_index.to_string().as_bytes())?;
            file.sync_all()?;
            drop(file);
            fs::rename(&tmp_path, &self.path)
        };

        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(AuditError::persistence(&self.path, e));
        }

        tracing::info!(
            path = %self.path.display(),
            next_index,
            "Checkpoint saved"
        );
        Ok(())
    }

    /// Last modification time of the checkpoint file, if it exists
    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from)
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "checkpoint".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}
