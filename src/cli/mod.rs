//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for tweet-audit using clap.

pub mod commands;

use crate::domain::AuditError;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Exit code for success
pub const EXIT_OK: i32 = 0;
/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for missing or malformed inputs, including a corrupt checkpoint
pub const EXIT_INPUT: i32 = 3;
/// Exit code for judge failures
pub const EXIT_JUDGE: i32 = 4;
/// Exit code for anything else
pub const EXIT_FATAL: i32 = 5;

/// tweet-audit - Checkpointed audit of a Twitter/X archive
#[derive(Parser, Debug)]
#[command(name = "tweet-audit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./tweet-audit.toml when present)
    #[arg(short, long, env = "TWEET_AUDIT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Explicit configuration path, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().map(Path::new)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the archive JSON into the normalized id,text CSV
    ExtractTweets(commands::extract::ExtractArgs),

    /// Evaluate the next batch of tweets and record flagged ones
    AnalyzeTweets(commands::analyze::AnalyzeArgs),

    /// Show audit progress
    Status(commands::status::StatusArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a sample configuration file
    Init(commands::init::InitArgs),
}

/// Maps an error to the process exit code
pub fn exit_code_for(error: &AuditError) -> i32 {
    match error {
        AuditError::Configuration(_) => EXIT_CONFIG,
        AuditError::NotFound(_) | AuditError::Format { .. } | AuditError::CorruptState { .. } => {
            EXIT_INPUT
        }
        AuditError::Evaluation { .. } => EXIT_JUDGE,
        AuditError::Persistence { .. } | AuditError::Serialization(_) | AuditError::Io(_) => {
            EXIT_FATAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JudgeError;

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::parse_from(["tweet-audit", "analyze-tweets"]);
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Commands::AnalyzeTweets(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["tweet-audit", "--config", "custom.toml", "status"]);
        assert_eq!(cli.config_path(), Some(Path::new("custom.toml")));
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_batch_size_override() {
        let cli = Cli::parse_from(["tweet-audit", "analyze-tweets", "--batch-size", "25"]);
        match cli.command {
            Commands::AnalyzeTweets(args) => assert_eq!(args.batch_size, Some(25)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_other_commands() {
        let cli = Cli::parse_from(["tweet-audit", "--log-level", "debug", "extract-tweets"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::ExtractTweets(_)));

        let cli = Cli::parse_from(["tweet-audit", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));

        let cli = Cli::parse_from(["tweet-audit", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code_for(&AuditError::Configuration("x".to_string())),
            EXIT_CONFIG
        );
        assert_eq!(exit_code_for(&AuditError::format("a.csv", "bad")), EXIT_INPUT);
        assert_eq!(
            exit_code_for(&AuditError::corrupt_state("cp.txt", "bad")),
            EXIT_INPUT
        );
        assert_eq!(
            exit_code_for(&AuditError::Evaluation {
                record_id: "1".to_string(),
                source: JudgeError::EmptyResponse,
            }),
            EXIT_JUDGE
        );
        assert_eq!(
            exit_code_for(&AuditError::persistence("r.csv", "disk full")),
            EXIT_FATAL
        );
    }
}
