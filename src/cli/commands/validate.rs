//! Validate config command implementation
//!
//! This module implements the `validate-config` command. Loading already
//! applies environment overrides and validation; missing judge credentials
//! only produce warnings here.

use super::load_or_report;
use crate::cli::EXIT_OK;
use crate::config::AuditConfig;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        match config_path {
            Some(path) => println!("🔍 Validating configuration file: {}", path.display()),
            None => println!("🔍 Validating configuration"),
        }
        println!();

        let config = match load_or_report(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        println!("✅ Configuration is valid");
        println!();
        print_summary(&config);

        let missing = missing_credentials(&config);
        if !missing.is_empty() {
            println!();
            for name in &missing {
                println!("⚠️  {name} is not set; analyze-tweets will refuse to run");
            }
        }
        Ok(EXIT_OK)
    }
}

fn print_summary(config: &AuditConfig) {
    let api_key = if has_api_key(config) { "set" } else { "not set" };

    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Account: {}", display_or_unset(&config.account.username));
    println!("  Status URL Base: {}", config.account.base_url);
    println!("  Archive: {}", config.paths.archive.display());
    println!("  Transformed Tweets: {}", config.paths.transformed.display());
    println!("  Checkpoint: {}", config.paths.checkpoint.display());
    println!("  Results: {}", config.paths.results.display());
    println!("  Batch Size: {}", config.analysis.batch_size);
    println!("  Skip Retweets: {}", config.analysis.skip_retweets);
    println!("  Gemini Model: {}", config.gemini.model);
    println!("  Gemini API Key: {api_key}");
    println!("  Rate Limit: {}s", config.gemini.rate_limit_seconds);
    println!(
        "  Criteria: {} topics, {} tone rules, {} forbidden words",
        config.criteria.topics_to_exclude.len(),
        config.criteria.tone_requirements.len(),
        config.criteria.forbidden_words.len()
    );
    if config.logging.local_enabled {
        println!(
            "  File Logging: {} ({})",
            config.logging.local_path, config.logging.local_rotation
        );
    }
}

fn has_api_key(config: &AuditConfig) -> bool {
    use secrecy::ExposeSecret;
    config
        .gemini
        .api_key
        .as_ref()
        .is_some_and(|key| !key.expose_secret().is_blank())
}

fn missing_credentials(config: &AuditConfig) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if config.account.username.is_empty() {
        missing.push("X_USERNAME");
    }
    if !has_api_key(config) {
        missing.push("GEMINI_API_KEY");
    }
    missing
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
