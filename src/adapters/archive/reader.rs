//! Record source readers
//!
//! Two input layouts are supported:
//!
//! - [`SourceFormat::ArchiveJson`]: the account export, a JSON array whose
//!   elements wrap each post under a `tweet` field
//! - [`SourceFormat::Csv`]: the normalized `id,text` table written by
//!   extraction

use crate::domain::{AuditError, Record, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Header of the normalized record table
pub const RECORD_HEADER: [&str; 2] = ["id", "text"];

/// Layout of a record source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON array of `{"tweet": {"id_str": ..., "full_text": ...}}`
    ArchiveJson,
    /// CSV with header exactly `id,text`
    Csv,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::ArchiveJson => write!(f, "json"),
            SourceFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Deserialize)]
struct ArchiveEntry {
    tweet: ArchiveTweet,
}

#[derive(Deserialize)]
struct ArchiveTweet {
    id_str: String,
    full_text: String,
}

impl From<ArchiveEntry> for Record {
    fn from(entry: ArchiveEntry) -> Self {
        Record::new(entry.tweet.id_str, entry.tweet.full_text)
    }
}

/// Loads an ordered record sequence from a file
#[derive(Debug, Clone)]
pub struct RecordReader {
    path: PathBuf,
    format: SourceFormat,
}

impl RecordReader {
    /// Create a reader for `path` in the given layout
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Source file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record, preserving source order
    ///
    /// Duplicate ids are kept as-is.
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if the source does not exist
    /// - [`AuditError::Format`] if the source does not match its layout
    pub fn load(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path).map_err(|e| AuditError::from_input_io(&self.path, e))?;

        let records = match self.format {
            SourceFormat::ArchiveJson => self.parse_json(file)?,
            SourceFormat::Csv => self.parse_csv(file)?,
        };

        tracing::debug!(
            path = %self.path.display(),
            format = %self.format,
            count = records.len(),
            "Loaded records"
        );
        Ok(records)
    }

    fn parse_json(&self, file: File) -> Result<Vec<Record>> {
        let entries: Vec<ArchiveEntry> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AuditError::format(&self.path, format!("invalid archive JSON: {e}")))?;

        Ok(entries.into_iter().map(Record::from).collect())
    }

    fn parse_csv(&self, file: File) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = reader.records();

        let header = match rows.next() {
            Some(row) => row.map_err(|e| self.csv_error(e))?,
            None => {
                return Err(AuditError::format(
                    &self.path,
                    "empty file: expected 'id,text' header",
                ))
            }
        };
        if header.len() != RECORD_HEADER.len()
            || header.iter().zip(RECORD_HEADER).any(|(got, want)| got != want)
        {
            return Err(AuditError::format(
                &self.path,
                format!(
                    "line 1: expected 'id,text' header, found '{}'",
                    header.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let mut records = Vec::new();
        for row in rows {
            let row = row.map_err(|e| self.csv_error(e))?;
            if row.len() != RECORD_HEADER.len() {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                return Err(AuditError::format(
                    &self.path,
                    format!("line {line}: expected 2 fields, got {}", row.len()),
                ));
            }
            records.push(Record::new(&row[0], &row[1]));
        }

        Ok(records)
    }

    fn csv_error(&self, err: csv::Error) -> AuditError {
        match err.position() {
            Some(pos) => AuditError::format(&self.path, format!("line {}: {err}", pos.line())),
            None => AuditError::format(&self.path, err.to_string()),
        }
    }
}
