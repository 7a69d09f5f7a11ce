//! CSV sink for extracted records and analysis results
//!
//! The sink writes its header lazily with the first row, so opening in
//! append mode against a non-empty file never repeats the header. Every row
//! is flushed before the write call returns.

use crate::adapters::fs::{create_parent_dirs, open_for_write};
use crate::domain::{AuditError, Decision, Record, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Header of the analysis result sink
pub const RESULT_HEADER: [&str; 2] = ["tweet_url", "deleted"];

/// Value of the `deleted` column for newly flagged posts
const NOT_YET_DELETED: &str = "false";

/// Buffered CSV writer bound to one file
///
/// Dropping an unclosed sink flushes what was written. Call [`CsvSink::close`]
/// to also sync the file to disk and observe errors.
pub struct CsvSink {
    path: PathBuf,
    header: &'static [&'static str],
    header_pending: bool,
    writer: Option<csv::Writer<File>>,
    rows_written: usize,
}

impl CsvSink {
    /// Opens `path` for writing
    ///
    /// Parent directories are created. With `append`, an existing non-empty
    /// file is extended without a new header; otherwise the file is truncated.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Persistence`] if the file or its directory
    /// cannot be created.
    pub fn open(
        path: impl AsRef<Path>,
        header: &'static [&'static str],
        append: bool,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        create_parent_dirs(&path).map_err(|e| AuditError::persistence(&path, e))?;

        let has_content = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);
        let file = open_for_write(&path, append).map_err(|e| AuditError::persistence(&path, e))?;

        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        Ok(Self {
            header_pending: !(append && has_content),
            path,
            header,
            writer: Some(writer),
            rows_written: 0,
        })
    }

    /// Opens the analysis result sink in append mode
    pub fn open_results(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, &RESULT_HEADER, true)
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows written through this sink
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Writes one row, preceded by the header if it is still pending
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Persistence`] if the write or flush fails.
    pub fn write_row(&mut self, row: &[&str]) -> Result<()> {
        self.write_header_if_pending()?;
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| AuditError::persistence(&self.path, "sink already closed"))?;
        write_flushed(writer, row).map_err(|e| AuditError::persistence(&self.path, e))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Writes the header (if pending) followed by every row
    ///
    /// The header is written even when `rows` is empty.
    pub fn write_header_and_rows<'a, I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = [&'a str; 2]>,
    {
        self.write_header_if_pending()?;
        let before = self.rows_written;
        for row in rows {
            self.write_row(&row)?;
        }
        Ok(self.rows_written - before)
    }

    /// Writes a normalized `id,text` row
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.write_row(&[record.id.as_str(), record.text.as_str()])
    }

    /// Writes a result row for a flagged decision
    pub fn write_decision(&mut self, decision: &Decision) -> Result<()> {
        self.write_row(&[decision.reference_url.as_str(), NOT_YET_DELETED])
    }

    /// Flushes buffered data and syncs the file to disk
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Persistence`] if flushing or syncing fails.
    pub fn close(mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| AuditError::persistence(&self.path, e.error()))?;
            file.sync_all()
                .map_err(|e| AuditError::persistence(&self.path, e))?;
        }
        Ok(())
    }

    fn write_header_if_pending(&mut self) -> Result<()> {
        if !self.header_pending {
            return Ok(());
        }
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| AuditError::persistence(&self.path, "sink already closed"))?;
        write_flushed(writer, self.header).map_err(|e| AuditError::persistence(&self.path, e))?;
        self.header_pending = false;
        Ok(())
    }
}

fn write_flushed(writer: &mut csv::Writer<File>, row: &[&str]) -> csv::Result<()> {
    writer.write_record(row)?;
    writer.flush()?;
    Ok(())
}

impl Drop for CsvSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to flush CSV sink on drop");
            }
        }
    }
}
