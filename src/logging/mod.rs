//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - JSON-formatted log files with rotation
//!
//! # Example
//!
//! ```no_run
//! use tweet_audit::logging::init_logging;
//! use tweet_audit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the window a batch run is about to process
///
/// # Example
///
/// ```no_run
/// use tweet_audit::log_batch_window;
///
/// log_batch_window!(20, 30, 125);
/// ```
#[macro_export]
macro_rules! log_batch_window {
    ($start:expr, $end:expr, $total:expr) => {
        tracing::info!(
            start = $start,
            end = $end,
            total = $total,
            "Processing batch"
        );
    };
}

/// Log the completion of a batch run
///
/// # Example
///
/// ```no_run
/// use tweet_audit::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!(10, 2, Duration::from_secs(12));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($processed:expr, $flagged:expr, $duration:expr) => {
        tracing::info!(
            processed = $processed,
            flagged = $flagged,
            duration_ms = $duration.as_millis() as u64,
            "Batch completed"
        );
    };
}
