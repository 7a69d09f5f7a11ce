//! Configuration management for tweet-audit.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! tweet-audit reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - Environment overrides (`GEMINI_API_KEY`, `X_USERNAME`, `BATCH_SIZE`, ...)
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tweet_audit::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tweet-audit.toml")?;
//!
//! println!("Batch size: {}", config.analysis.batch_size);
//! println!("Checkpoint: {}", config.paths.checkpoint.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`AccountConfig`] - Account handle and site root for post URLs
//! - [`PathsConfig`] - Archive, transformed CSV, checkpoint and result sink
//! - [`AnalysisConfig`] - Batch size and retweet skipping
//! - [`GeminiConfig`] - API key, model, endpoint, timeout and pacing
//! - [`CriteriaConfig`] - Content criteria for the prompt
//! - [`LoggingConfig`] - Optional JSON log file
//!
//! # Example Configuration
//!
//! ```toml
//! [account]
//! username = "your_handle"
//!
//! [gemini]
//! api_key = "${GEMINI_API_KEY}"
//! model = "gemini-2.5-flash"
//!
//! [analysis]
//! batch_size = 10
//!
//! [criteria]
//! forbidden_words = ["crypto", "nft"]
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{
    AccountConfig, AnalysisConfig, ApplicationConfig, AuditConfig, CriteriaConfig, GeminiConfig,
    LoggingConfig, PathsConfig, MAX_BATCH_SIZE,
};
pub use secret::{secret_string, SecretString, SecretValue};
