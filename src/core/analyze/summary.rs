//! Batch summary and audit progress reporting

use std::time::Duration;

/// Outcome of one successful batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of records in the source
    pub total_records: usize,

    /// Index the batch started at
    pub start: usize,

    /// Index the checkpoint now points at
    pub end: usize,

    /// Records attempted in this run (`end - start`)
    pub processed: usize,

    /// Records flagged and written to the result sink
    pub flagged: usize,

    /// Records skipped without a judge call
    pub skipped: usize,

    /// Wall time of the run
    pub duration: Duration,
}

impl BatchSummary {
    /// Summary for a run that found nothing left to do
    pub fn exhausted(total_records: usize, next_index: usize) -> Self {
        Self {
            total_records,
            start: next_index,
            end: next_index,
            processed: 0,
            flagged: 0,
            skipped: 0,
            duration: Duration::ZERO,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records still waiting for a future batch
    pub fn remaining(&self) -> usize {
        self.total_records.saturating_sub(self.end)
    }

    /// True once every record has been processed
    pub fn is_complete(&self) -> bool {
        self.end >= self.total_records
    }

    /// Log the summary
    pub fn log_summary(&self) {
        if self.processed == 0 {
            tracing::info!(
                total_records = self.total_records,
                next_index = self.end,
                "All records already audited, nothing to do"
            );
            return;
        }

        tracing::info!(
            start = self.start,
            end = self.end,
            processed = self.processed,
            flagged = self.flagged,
            skipped = self.skipped,
            remaining = self.remaining(),
            duration_secs = self.duration.as_secs(),
            "Batch summary"
        );
    }
}

/// Read-only snapshot of how far the audit has progressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditProgress {
    /// Number of records in the source
    pub total_records: usize,

    /// Checkpoint value
    pub next_index: usize,

    /// Records not yet processed
    pub remaining: usize,

    /// Data rows in the result sink (header excluded)
    pub flagged_rows: usize,
}

impl AuditProgress {
    /// Build a snapshot; `next_index` past the end counts as complete
    pub fn new(total_records: usize, next_index: usize, flagged_rows: usize) -> Self {
        Self {
            total_records,
            next_index,
            remaining: total_records.saturating_sub(next_index),
            flagged_rows,
        }
    }

    /// Share of records processed, as a percentage
    pub fn percent_complete(&self) -> f64 {
        if self.total_records == 0 {
            return 100.0;
        }
        (self.next_index.min(self.total_records) as f64 / self.total_records as f64) * 100.0
    }

    /// True once every record has been processed
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}
