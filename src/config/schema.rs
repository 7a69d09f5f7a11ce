//! Configuration schema types
//!
//! This module defines the configuration structure for tweet-audit. Every
//! section has defaults, so an empty file (or no file) yields a usable
//! configuration once an API key and username are supplied.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main tweet-audit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Account whose archive is audited
    #[serde(default)]
    pub account: AccountConfig,

    /// Input and output file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Batch analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Gemini judge settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Content criteria used to build the prompt
    #[serde(default)]
    pub criteria: CriteriaConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AuditConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.account.validate()?;
        self.paths.validate()?;
        self.analysis.validate()?;
        self.gemini.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Account configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Handle used to build post URLs. Required before analysis runs.
    #[serde(default)]
    pub username: String,

    /// Site root for post URLs
    #[serde(default = "default_account_base_url")]
    pub base_url: String,
}

impl AccountConfig {
    fn validate(&self) -> Result<(), String> {
        validate_url("account.base_url", &self.base_url)?;

        if self.username.chars().any(char::is_whitespace) {
            return Err(format!(
                "account.username '{}' must not contain whitespace",
                self.username
            ));
        }
        Ok(())
    }

    /// Public URL of the post with the given id
    pub fn status_url(&self, id: &str) -> String {
        format!(
            "{}/{}/status/{}",
            self.base_url.trim_end_matches('/'),
            self.username,
            id
        )
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            base_url: default_account_base_url(),
        }
    }
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Archive export (`tweets.json`)
    #[serde(default = "default_archive_path")]
    pub archive: PathBuf,

    /// Normalized `id,text` CSV written by extraction
    #[serde(default = "default_transformed_path")]
    pub transformed: PathBuf,

    /// Checkpoint file holding the next record index
    #[serde(default = "default_checkpoint_path")]
    pub checkpoint: PathBuf,

    /// Result sink of flagged posts
    #[serde(default = "default_results_path")]
    pub results: PathBuf,
}

impl PathsConfig {
    fn validate(&self) -> Result<(), String> {
        let entries = [
            ("paths.archive", &self.archive),
            ("paths.transformed", &self.transformed),
            ("paths.checkpoint", &self.checkpoint),
            ("paths.results", &self.results),
        ];
        for (name, path) in entries {
            if path.as_os_str().is_empty() {
                return Err(format!("{name} cannot be empty"));
            }
        }

        // Outputs must not overwrite each other or the archive
        let distinct = [
            ("paths.archive", &self.archive, "paths.transformed", &self.transformed),
            ("paths.transformed", &self.transformed, "paths.checkpoint", &self.checkpoint),
            ("paths.transformed", &self.transformed, "paths.results", &self.results),
            ("paths.checkpoint", &self.checkpoint, "paths.results", &self.results),
        ];
        for (left_name, left, right_name, right) in distinct {
            if left == right {
                return Err(format!("{left_name} and {right_name} must differ"));
            }
        }
        Ok(())
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            archive: default_archive_path(),
            transformed: default_transformed_path(),
            checkpoint: default_checkpoint_path(),
            results: default_results_path(),
        }
    }
}

/// Batch analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of records evaluated per run
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Skip retweets without calling the judge
    #[serde(default)]
    pub skip_retweets: bool,
}

impl AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(format!(
                "analysis.batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            skip_retweets: false,
        }
    }
}

/// Upper bound for `analysis.batch_size`
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Gemini judge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without the `/models/...` suffix
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Minimum delay between two judge calls, in seconds
    #[serde(default = "default_rate_limit_seconds")]
    pub rate_limit_seconds: f64,
}

impl GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("gemini.model cannot be empty".to_string());
        }

        validate_url("gemini.base_url", &self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err("gemini.timeout_seconds must be > 0".to_string());
        }

        if !self.rate_limit_seconds.is_finite() || self.rate_limit_seconds < 0.0 {
            return Err(format!(
                "gemini.rate_limit_seconds must be >= 0, got {}",
                self.rate_limit_seconds
            ));
        }
        Ok(())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_gemini_base_url(),
            timeout_seconds: default_timeout_seconds(),
            rate_limit_seconds: default_rate_limit_seconds(),
        }
    }
}

/// Content criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaConfig {
    /// Topics that mark a post for deletion
    #[serde(default)]
    pub topics_to_exclude: Vec<String>,

    /// Tone a post must keep
    #[serde(default)]
    pub tone_requirements: Vec<String>,

    /// Words that mark a post for deletion
    #[serde(default)]
    pub forbidden_words: Vec<String>,

    /// Free-form guidance appended to the prompt
    #[serde(default)]
    pub additional_guidance: String,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            topics_to_exclude: vec![
                "Profanity or unprofessional language".to_string(),
                "Personal attacks or insults".to_string(),
                "Outdated political opinions".to_string(),
            ],
            tone_requirements: vec![
                "Professional language only".to_string(),
                "Respectful communication".to_string(),
            ],
            forbidden_words: Vec::new(),
            additional_guidance: "Flag any content that could harm professional reputation"
                .to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_url(name: &str, value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{name} '{value}' is invalid: {e}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{name} must start with http:// or https://"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_account_base_url() -> String {
    "https://x.com".to_string()
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("data/tweets/tweets.json")
}

fn default_transformed_path() -> PathBuf {
    PathBuf::from("data/tweets/transformed/tweets.csv")
}

fn default_checkpoint_path() -> PathBuf {
    PathBuf::from("data/checkpoint.txt")
}

fn default_results_path() -> PathBuf {
    PathBuf::from("data/tweets/processed/results.csv")
}

fn default_batch_size() -> usize {
    10
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_rate_limit_seconds() -> f64 {
    1.0
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuditConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.batch_size, 10);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.paths.checkpoint, PathBuf::from("data/checkpoint.txt"));
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_batch_size_bounds() {
        let mut config = AnalysisConfig::default();

        config.batch_size = 0;
        assert!(config.validate().is_err());

        config.batch_size = MAX_BATCH_SIZE;
        assert!(config.validate().is_ok());

        config.batch_size = MAX_BATCH_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gemini_config_validation() {
        let mut config = GeminiConfig::default();
        assert!(config.validate().is_ok());

        config.rate_limit_seconds = -0.5;
        assert!(config.validate().is_err());

        config.rate_limit_seconds = 0.0;
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_paths_must_differ() {
        let mut config = PathsConfig::default();
        config.results = config.checkpoint.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_outputs_must_not_overwrite_inputs() {
        let mut config = PathsConfig::default();
        config.results = config.transformed.clone();
        assert_eq!(
            config.validate().unwrap_err(),
            "paths.transformed and paths.results must differ"
        );

        let mut config = PathsConfig::default();
        config.checkpoint = config.transformed.clone();
        assert_eq!(
            config.validate().unwrap_err(),
            "paths.transformed and paths.checkpoint must differ"
        );

        let mut config = PathsConfig::default();
        config.transformed = config.archive.clone();
        assert_eq!(
            config.validate().unwrap_err(),
            "paths.archive and paths.transformed must differ"
        );
    }

    #[test]
    fn test_logging_rotation_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "size".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_status_url() {
        let account = AccountConfig {
            username: "jane".to_string(),
            base_url: "https://x.com/".to_string(),
        };
        assert_eq!(account.status_url("123"), "https://x.com/jane/status/123");
    }

    #[test]
    fn test_username_with_whitespace_rejected() {
        let account = AccountConfig {
            username: "jane doe".to_string(),
            ..AccountConfig::default()
        };
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AuditConfig = toml::from_str(
            r#"
[analysis]
batch_size = 25
"#,
        )
        .unwrap();

        assert_eq!(config.analysis.batch_size, 25);
        assert!(!config.analysis.skip_retweets);
        assert_eq!(config.account.base_url, "https://x.com");
        assert_eq!(config.criteria.topics_to_exclude.len(), 3);
    }
}
