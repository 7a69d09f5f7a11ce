//! Core business logic for tweet-audit.
//!
//! # Modules
//!
//! - [`extract`] - Archive JSON to normalized `id,text` CSV
//! - [`analyze`] - Checkpointed batch analysis against a judge
//! - [`state`] - The checkpoint file
//!
//! # Audit Workflow
//!
//! 1. **Extract**: Convert the archive export into the normalized table
//! 2. **Resume**: Read the checkpoint to find the first unprocessed record
//! 3. **Evaluate**: Ask the judge about each record in the next window
//! 4. **Record**: Append a result row for every flagged record
//! 5. **Checkpoint**: Advance the checkpoint once the whole window succeeded
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tweet_audit::adapters::judge::GeminiJudge;
//! use tweet_audit::config::load_config;
//! use tweet_audit::core::analyze::BatchController;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tweet-audit.toml")?;
//! let judge = Arc::new(GeminiJudge::new(&config)?);
//!
//! let controller = BatchController::new(&config, judge);
//! let summary = controller.run_batch(config.analysis.batch_size).await?;
//!
//! println!("Processed: {}", summary.processed);
//! println!("Flagged: {}", summary.flagged);
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod extract;
pub mod state;
