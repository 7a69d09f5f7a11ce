//! Batch controller - one bounded, resumable pass over the record source
//!
//! A run loads every record, resumes at the checkpoint, evaluates at most
//! `batch_size` records strictly in order, appends a row for each flagged
//! record, and only then advances the checkpoint. A judge failure aborts the
//! run with the checkpoint untouched, so the next run retries the same
//! window. Rows already written for that window stay in the sink.

use crate::adapters::archive::{CsvSink, RecordReader, SourceFormat};
use crate::adapters::judge::Judge;
use crate::config::AuditConfig;
use crate::core::analyze::summary::{AuditProgress, BatchSummary};
use crate::core::state::Checkpoint;
use crate::domain::{AuditError, Result};
use crate::{log_batch_complete, log_batch_window};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Drives batch analysis of the normalized record table
pub struct BatchController {
    reader: RecordReader,
    checkpoint: Checkpoint,
    results_path: PathBuf,
    judge: Arc<dyn Judge>,
    skip_retweets: bool,
}

impl BatchController {
    /// Create a controller for the configured paths
    ///
    /// Reads the transformed CSV, the checkpoint file and the result sink
    /// named in `config.paths`.
    pub fn new(config: &AuditConfig, judge: Arc<dyn Judge>) -> Self {
        Self::from_parts(
            RecordReader::new(&config.paths.transformed, SourceFormat::Csv),
            Checkpoint::new(&config.paths.checkpoint),
            &config.paths.results,
            judge,
        )
        .skip_retweets(config.analysis.skip_retweets)
    }

    /// Create a controller from explicit collaborators
    pub fn from_parts(
        reader: RecordReader,
        checkpoint: Checkpoint,
        results_path: impl AsRef<Path>,
        judge: Arc<dyn Judge>,
    ) -> Self {
        Self {
            reader,
            checkpoint,
            results_path: results_path.as_ref().to_path_buf(),
            judge,
            skip_retweets: false,
        }
    }

    /// Skip retweets without calling the judge
    pub fn skip_retweets(mut self, skip: bool) -> Self {
        self.skip_retweets = skip;
        self
    }

    /// Processes the next window of at most `batch_size` records
    ///
    /// Returns a summary with `processed == 0` when the checkpoint is already
    /// at or past the end of the source. In that case the judge is not called
    /// and the checkpoint is left as-is.
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] / [`AuditError::Format`] from the reader
    /// - [`AuditError::CorruptState`] from the checkpoint
    /// - [`AuditError::Evaluation`] if the judge fails on any record
    /// - [`AuditError::Persistence`] if the sink or checkpoint cannot be written
    pub async fn run_batch(&self, batch_size: usize) -> Result<BatchSummary> {
        if batch_size == 0 {
            return Err(AuditError::Configuration(
                "batch size must be at least 1".to_string(),
            ));
        }

        let started = Instant::now();
        let records = self.reader.load()?;
        let total = records.len();

        let start = self.checkpoint.load()?;
        if start >= total {
            let summary = BatchSummary::exhausted(total, start).with_duration(started.elapsed());
            summary.log_summary();
            return Ok(summary);
        }

        let end = start.saturating_add(batch_size).min(total);
        log_batch_window!(start, end, total);

        let mut sink = CsvSink::open_results(&self.results_path)?;
        let mut flagged = 0;
        let mut skipped = 0;

        for (index, record) in records[start..end].iter().enumerate() {
            let position = start + index;

            if self.skip_retweets && record.is_retweet() {
                tracing::debug!(index = position, record_id = %record.id, "Skipping retweet");
                skipped += 1;
                continue;
            }

            let decision = self.judge.evaluate(record).await.map_err(|source| {
                tracing::error!(
                    index = position,
                    record_id = %record.id,
                    judge = self.judge.name(),
                    error = %source,
                    "Evaluation failed, checkpoint not advanced"
                );
                AuditError::Evaluation {
                    record_id: record.id.clone(),
                    source,
                }
            })?;

            if decision.should_flag {
                sink.write_decision(&decision)?;
                flagged += 1;
                tracing::info!(
                    index = position,
                    record_id = %record.id,
                    url = %decision.reference_url,
                    reason = decision.reason.as_deref().unwrap_or(""),
                    "Flagged for deletion"
                );
            } else {
                tracing::debug!(index = position, record_id = %record.id, "Kept");
            }
        }

        sink.close()?;
        self.checkpoint.save(end)?;

        let summary = BatchSummary {
            total_records: total,
            start,
            end,
            processed: end - start,
            flagged,
            skipped,
            duration: started.elapsed(),
        };
        log_batch_complete!(summary.processed, summary.flagged, summary.duration);

        Ok(summary)
    }

    /// Reports progress without calling the judge
    ///
    /// # Errors
    ///
    /// Fails like [`BatchController::run_batch`] does when the source or the
    /// checkpoint cannot be read, or when the result sink is malformed.
    pub fn progress(&self) -> Result<AuditProgress> {
        read_progress(&self.reader, &self.checkpoint, &self.results_path)
    }

    /// Checkpoint used by this controller
    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }
}

/// Reports progress for the configured paths without building a judge
pub fn progress_for(config: &AuditConfig) -> Result<AuditProgress> {
    read_progress(
        &RecordReader::new(&config.paths.transformed, SourceFormat::Csv),
        &Checkpoint::new(&config.paths.checkpoint),
        &config.paths.results,
    )
}

fn read_progress(
    reader: &RecordReader,
    checkpoint: &Checkpoint,
    results_path: &Path,
) -> Result<AuditProgress> {
    let total = reader.load()?.len();
    let next_index = checkpoint.load()?;
    let flagged_rows = count_result_rows(results_path)?;
    Ok(AuditProgress::new(total, next_index, flagged_rows))
}

/// Counts data rows in the result sink; a missing sink counts as 0
fn count_result_rows(path: &Path) -> Result<usize> {
    let mut reader = match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            if let csv::ErrorKind::Io(io) = e.kind() {
                if io.kind() == std::io::ErrorKind::NotFound {
                    return Ok(0);
                }
            }
            return Err(AuditError::format(path, e.to_string()));
        }
    };

    let mut count = 0;
    for row in reader.records() {
        row.map_err(|e| AuditError::format(path, e.to_string()))?;
        count += 1;
    }
    Ok(count)
}
