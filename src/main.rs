// tweet-audit - Checkpointed audit of a Twitter/X archive
// Copyright (c) 2025 tweet-audit contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tweet_audit::cli::{Cli, Commands, EXIT_FATAL};
use tweet_audit::config::{load_config_or_default, LoggingConfig};
use tweet_audit::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Commands report configuration errors themselves; here the config only
    // decides the log level and whether file logging is on.
    let config = load_config_or_default(cli.config_path()).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(LoggingConfig::default);

    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "tweet-audit - Checkpointed audit of a Twitter/X archive"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(logging_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config_path();
    match &cli.command {
        Commands::ExtractTweets(args) => args.execute(config_path).await,
        Commands::AnalyzeTweets(args) => args.execute(config_path).await,
        Commands::Status(args) => args.execute(config_path).await,
        Commands::ValidateConfig(args) => args.execute(config_path).await,
        Commands::Init(args) => args.execute().await,
    }
}
