// tweet-audit - Checkpointed audit of a Twitter/X archive
// Copyright (c) 2025 tweet-audit contributors
// Licensed under the MIT License

//! # tweet-audit - Checkpointed audit of a Twitter/X archive
//!
//! tweet-audit walks a personal tweet archive in small, resumable batches,
//! asks a language-model judge whether each tweet should be kept or deleted,
//! and appends the ones flagged for deletion to a CSV report.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** tweets from the archive JSON into a normalized `id,text` CSV
//! - **Judging** each tweet against configurable criteria via Gemini
//! - **Recording** flagged tweets with their status URL in an append-only CSV
//! - **Checkpointing** progress so each run picks up where the last one stopped
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (extraction, batch analysis, checkpoint state)
//! - [`adapters`] - External integrations (archive files, Gemini judge)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tweet_audit::adapters::judge::GeminiJudge;
//! use tweet_audit::config::load_config;
//! use tweet_audit::core::analyze::BatchController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("tweet-audit.toml")?;
//!     let judge = GeminiJudge::new(&config)?;
//!
//!     let controller = BatchController::new(&config, Arc::new(judge));
//!     let summary = controller.run_batch(config.analysis.batch_size).await?;
//!
//!     println!("Flagged {} of {} tweets", summary.flagged, summary.processed);
//!     Ok(())
//! }
//! ```
//!
//! ## Resuming
//!
//! The checkpoint file holds the index of the next tweet to evaluate. It only
//! advances after a whole batch has been judged and its flagged rows flushed,
//! so an interrupted or failed run is simply repeated:
//!
//! ```rust,no_run
//! use tweet_audit::core::state::Checkpoint;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let checkpoint = Checkpoint::new("data/checkpoint.txt");
//! let next = checkpoint.load()?;
//! println!("Next tweet to audit: #{next}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::AuditError`]. Judge failures are
//! wrapped with the id of the tweet that failed:
//!
//! ```rust,no_run
//! use tweet_audit::domain::AuditError;
//!
//! fn example() -> Result<(), AuditError> {
//!     let config = tweet_audit::config::load_config("tweet-audit.toml")?;
//!     println!("{}", config.paths.results.display());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
