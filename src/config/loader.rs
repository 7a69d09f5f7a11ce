//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AuditConfig;
use super::secret::secret_string;
use crate::domain::errors::AuditError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tweet-audit.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AuditConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use tweet_audit::config::loader::load_config;
///
/// let config = load_config("tweet-audit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AuditConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AuditError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AuditError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AuditConfig = toml::from_str(&contents)
        .map_err(|e| AuditError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration, falling back to built-in defaults
///
/// An explicit `path` must exist. Without one, `tweet-audit.toml` in the
/// working directory is used when present and defaults otherwise. Environment
/// overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&Path>) -> Result<AuditConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_config(default_path);
    }

    tracing::debug!("No configuration file found, using defaults");
    let mut config = AuditConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut AuditConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        AuditError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AuditError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Comment lines are copied as-is
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AuditError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// The variable names match the ones the tool has always read from `.env`,
/// so an existing `.env` file keeps working without a TOML file.
fn apply_env_overrides(config: &mut AuditConfig) -> Result<()> {
    if let Ok(val) = std::env::var("LOG_LEVEL") {
        config.application.log_level = val.to_lowercase();
    }

    if let Ok(val) = std::env::var("X_USERNAME") {
        config.account.username = val;
    }

    if let Ok(val) = std::env::var("GEMINI_API_KEY") {
        config.gemini.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("GEMINI_MODEL") {
        config.gemini.model = val;
    }
    if let Ok(val) = std::env::var("RATE_LIMIT_SECONDS") {
        config.gemini.rate_limit_seconds = val.parse().map_err(|_| {
            AuditError::Configuration(format!("RATE_LIMIT_SECONDS '{val}' is not a number"))
        })?;
    }

    if let Ok(val) = std::env::var("BATCH_SIZE") {
        config.analysis.batch_size = val.parse().map_err(|_| {
            AuditError::Configuration(format!(
                "BATCH_SIZE '{val}' is not a non-negative integer"
            ))
        })?;
    }

    if let Ok(val) = std::env::var("TWEETS_ARCHIVE_PATH") {
        config.paths.archive = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("TRANSFORMED_TWEETS_PATH") {
        config.paths.transformed = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("CHECKPOINT_PATH") {
        config.paths.checkpoint = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("PROCESSED_RESULTS_PATH") {
        config.paths.results = PathBuf::from(val);
    }

    Ok(())
}
