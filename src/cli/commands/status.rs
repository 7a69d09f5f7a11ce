//! Status command implementation
//!
//! This module implements the `status` command for displaying how far the
//! audit has progressed. It never calls the judge.

use super::load_or_report;
use crate::cli::{exit_code_for, EXIT_OK};
use crate::core::analyze::{progress_for, AuditProgress};
use crate::core::state::Checkpoint;
use crate::domain::AuditError;
use clap::Args;
use std::path::Path;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Checking audit status");

        println!("📊 Audit Status");
        println!();

        let config = match load_or_report(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        let progress = match progress_for(&config) {
            Ok(progress) => progress,
            Err(AuditError::NotFound(path)) => {
                println!("No transformed tweets found at {}", path.display());
                println!("Run 'tweet-audit extract-tweets' first.");
                return Ok(exit_code_for(&AuditError::NotFound(path)));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audit progress");
                println!("❌ Failed to read audit progress");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let last_saved = Checkpoint::new(&config.paths.checkpoint)
            .last_saved()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "Never".to_string());

        print_progress(&progress, &last_saved);
        Ok(EXIT_OK)
    }
}

fn print_progress(progress: &AuditProgress, last_saved: &str) {
    let state = if progress.is_complete() {
        "✅ Complete"
    } else if progress.next_index == 0 {
        "⏸️  Not Started"
    } else {
        "🔄 In Progress"
    };

    println!("{:<20} {}", "Status", state);
    println!("{:<20} {}", "Total tweets", progress.total_records);
    println!("{:<20} {}", "Next index", progress.next_index);
    println!("{:<20} {}", "Remaining", progress.remaining);
    println!(
        "{:<20} {:.1}%",
        "Progress",
        progress.percent_complete()
    );
    println!("{:<20} {}", "Flagged rows", progress.flagged_rows);
    println!("{:<20} {}", "Last checkpoint", last_saved);
    println!();
}
