//! Domain models and types for tweet-audit.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records and decisions** ([`Record`], [`Decision`], [`Verdict`])
//! - **Error types** ([`AuditError`], [`JudgeError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AuditError>`]:
//!
//! ```rust
//! use tweet_audit::domain::{AuditError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(AuditError::Configuration("missing api key".to_string()))
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::{AuditError, JudgeError};
pub use record::{Decision, Record, Verdict};
pub use result::Result;
