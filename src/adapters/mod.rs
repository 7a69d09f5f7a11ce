//! External system integrations for tweet-audit.
//!
//! - [`archive`] - Record sources (archive JSON, normalized CSV) and CSV sinks
//! - [`judge`] - The judge trait and its Gemini and static implementations
//! - [`fs`] - File and directory creation with restricted permissions
//!
//! # Design Pattern
//!
//! Adapters isolate file formats and the HTTP API from the batch controller.
//! The judge is a trait object so tests can swap in [`judge::StaticJudge`]:
//!
//! ```rust
//! use tweet_audit::adapters::judge::{Judge, StaticJudge};
//! use tweet_audit::config::AccountConfig;
//! use tweet_audit::domain::Record;
//!
//! # async fn example() {
//! let judge = StaticJudge::new(AccountConfig::default()).flagging(["2"]);
//! let decision = judge.evaluate(&Record::new("2", "text")).await.unwrap();
//! assert!(decision.should_flag);
//! # }
//! ```

pub mod archive;
pub mod fs;
pub mod judge;
