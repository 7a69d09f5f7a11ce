//! Progress tracking
//!
//! A single [`Checkpoint`] file records how far the audit has progressed so
//! an interrupted run resumes where the last successful batch ended.

pub mod checkpoint;

pub use checkpoint::Checkpoint;
