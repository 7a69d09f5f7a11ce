//! Extract command implementation

use super::load_or_report;
use crate::cli::{exit_code_for, EXIT_OK};
use crate::core::extract::extract_records;
use clap::Args;
use std::path::Path;

/// Arguments for the extract-tweets command
#[derive(Args, Debug)]
pub struct ExtractArgs {}

impl ExtractArgs {
    /// Execute the extract-tweets command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_or_report(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        println!(
            "📦 Extracting tweets from {}",
            config.paths.archive.display()
        );

        match extract_records(&config) {
            Ok(count) => {
                println!(
                    "✅ Extracted {count} tweets to {}",
                    config.paths.transformed.display()
                );
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(error = %e, "Extraction failed");
                println!("❌ Extraction failed");
                println!("   Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
