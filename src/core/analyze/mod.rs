//! Checkpointed batch analysis
//!
//! - [`BatchController`] runs one bounded pass and advances the checkpoint
//! - [`BatchSummary`] describes what a pass did
//! - [`AuditProgress`] is a read-only snapshot used by `status`

pub mod controller;
pub mod summary;

pub use controller::{progress_for, BatchController};
pub use summary::{AuditProgress, BatchSummary};
