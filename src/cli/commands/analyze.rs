//! Analyze command implementation
//!
//! This module implements the `analyze-tweets` command, which runs one
//! checkpointed batch against the Gemini judge.

use super::load_or_report;
use crate::adapters::judge::GeminiJudge;
use crate::cli::{exit_code_for, EXIT_CONFIG, EXIT_OK};
use crate::config::MAX_BATCH_SIZE;
use crate::core::analyze::{BatchController, BatchSummary};
use clap::Args;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the analyze-tweets command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Override the configured batch size for this run
    #[arg(long)]
    pub batch_size: Option<usize>,
}

impl AnalyzeArgs {
    /// Execute the analyze-tweets command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_or_report(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        let batch_size = match self.resolve_batch_size(config.analysis.batch_size) {
            Ok(size) => size,
            Err(message) => {
                println!("❌ {message}");
                return Ok(EXIT_CONFIG);
            }
        };

        let judge = match GeminiJudge::new(&config) {
            Ok(judge) => judge,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Gemini judge");
                println!("❌ Failed to create Gemini judge");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!(
            "🔍 Analyzing up to {batch_size} tweets from {}",
            config.paths.transformed.display()
        );

        let controller = BatchController::new(&config, Arc::new(judge));
        match controller.run_batch(batch_size).await {
            Ok(summary) => {
                print_summary(&summary, &config.paths.results);
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(error = %e, "Batch analysis failed");
                println!("❌ Batch analysis failed");
                println!("   Error: {e}");
                println!("   The checkpoint was not advanced; rerun to retry this batch.");
                Ok(exit_code_for(&e))
            }
        }
    }

    fn resolve_batch_size(&self, configured: usize) -> Result<usize, String> {
        match self.batch_size {
            None => Ok(configured),
            Some(size) if (1..=MAX_BATCH_SIZE).contains(&size) => Ok(size),
            Some(size) => Err(format!(
                "--batch-size must be between 1 and {MAX_BATCH_SIZE}, got {size}"
            )),
        }
    }
}

fn print_summary(summary: &BatchSummary, results_path: &Path) {
    if summary.processed == 0 {
        println!(
            "✅ All {} tweets have already been audited",
            summary.total_records
        );
        return;
    }

    println!();
    println!("📊 Batch Summary:");
    println!("   Tweets {}..{} of {}", summary.start, summary.end, summary.total_records);
    println!("   Processed: {}", summary.processed);
    println!("   Flagged: {}", summary.flagged);
    if summary.skipped > 0 {
        println!("   Skipped retweets: {}", summary.skipped);
    }
    println!("   Remaining: {}", summary.remaining());
    println!("   Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.flagged > 0 {
        println!("📝 Flagged tweets appended to {}", results_path.display());
    }
    if summary.is_complete() {
        println!("🎉 Audit complete");
    } else {
        println!("▶️  Run analyze-tweets again to continue");
    }
}
