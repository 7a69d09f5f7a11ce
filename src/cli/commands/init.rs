//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::adapters::fs::open_for_write;
use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::io::Write;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing tweet-audit configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match Self::write_config(Path::new(&self.output)) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with X_USERNAME and GEMINI_API_KEY");
                println!("  3. Validate configuration: tweet-audit validate-config");
                println!("  4. Extract tweets: tweet-audit extract-tweets");
                println!("  5. Analyze a batch: tweet-audit analyze-tweets");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Writes the sample configuration, creating the file owner-only
    fn write_config(path: &Path) -> std::io::Result<()> {
        let mut file = open_for_write(path, false)?;
        file.write_all(Self::generate_config().as_bytes())?;
        file.sync_all()
    }

    /// Sample configuration with every section and its defaults
    fn generate_config() -> String {
        r#"# tweet-audit configuration
#
# Values of the form ${VAR} are read from the environment (or .env) and
# must be set when used. X_USERNAME, GEMINI_API_KEY, BATCH_SIZE, GEMINI_MODEL
# and the *_PATH variables override the values below.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[account]
# Handle used to build status URLs in the results file (or set X_USERNAME)
# username = "your_handle"
base_url = "https://x.com"

[paths]
archive = "data/tweets/tweets.json"
transformed = "data/tweets/transformed/tweets.csv"
checkpoint = "data/checkpoint.txt"
results = "data/tweets/processed/results.csv"

[analysis]
# Tweets evaluated per analyze-tweets run
batch_size = 10
# Skip "RT @" retweets without calling Gemini
skip_retweets = false

[gemini]
# Prefer GEMINI_API_KEY in the environment over a key in this file
# api_key = "${GEMINI_API_KEY}"
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"
timeout_seconds = 60
# Minimum delay between requests
rate_limit_seconds = 1.0

[criteria]
topics_to_exclude = [
    "Profanity or unprofessional language",
    "Personal attacks or insults",
    "Outdated political opinions",
]
tone_requirements = [
    "Professional language only",
    "Respectful communication",
]
forbidden_words = []
additional_guidance = "Flag any content that could harm professional reputation"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditConfig;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: DEFAULT_CONFIG_FILE.to_string(),
            force: false,
        };

        assert_eq!(args.output, "tweet-audit.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generated_config_parses() {
        let content = InitArgs::generate_config();

        let config: AuditConfig = toml::from_str(&content).unwrap();
        assert!(config.account.username.is_empty());
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.analysis.batch_size, 10);
        assert_eq!(config.criteria, AuditConfig::default().criteria);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_existing_file_requires_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tweet-audit.toml");
        std::fs::write(&output, "# keep me").unwrap();

        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "# keep me");

        let args = InitArgs {
            output: output.display().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(std::fs::read_to_string(&output).unwrap().contains("[gemini]"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_new_config_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tweet-audit.toml");
        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);

        let mode = std::fs::metadata(&output).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o077, 0, "mode was {mode:o}");
    }
}
