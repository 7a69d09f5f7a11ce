//! Judge abstraction
//!
//! The batch controller only sees this trait, so the HTTP adapter and test
//! doubles are interchangeable.

use crate::domain::{Decision, JudgeError, Record};
use async_trait::async_trait;

/// Evaluates one record against the content criteria
#[async_trait]
pub trait Judge: Send + Sync {
    /// Returns the decision for `record`
    ///
    /// # Errors
    ///
    /// Returns a [`JudgeError`] when the external call fails, the response is
    /// empty, or the response cannot be parsed into a verdict.
    async fn evaluate(&self, record: &Record) -> Result<Decision, JudgeError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
