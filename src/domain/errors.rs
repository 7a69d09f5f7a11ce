//! Domain error types
//!
//! This module defines the error hierarchy for tweet-audit.
//! Every variant names the file or record it concerns so callers can
//! report which stage failed without inspecting third-party error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main tweet-audit error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An input file does not exist
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An input file does not conform to the expected schema
    #[error("Format error in {}: {message}", path.display())]
    Format {
        /// File that failed to parse
        path: PathBuf,
        /// What was wrong, including the offending line where known
        message: String,
    },

    /// The checkpoint file holds something other than a non-negative integer
    #[error("Corrupt checkpoint {}: {message}", path.display())]
    CorruptState {
        /// Checkpoint file path
        path: PathBuf,
        /// Parse failure detail
        message: String,
    },

    /// Writing an output artifact or the checkpoint failed
    #[error("Persistence error for {}: {message}", path.display())]
    Persistence {
        /// File being written
        path: PathBuf,
        /// Underlying I/O failure
        message: String,
    },

    /// The judge could not evaluate a record
    #[error("Evaluation failed for record {record_id}: {source}")]
    Evaluation {
        /// Record that was being evaluated
        record_id: String,
        /// Judge-side cause
        #[source]
        source: JudgeError,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors without a more specific category
    #[error("I/O error: {0}")]
    Io(String),
}

impl AuditError {
    /// Builds a `Format` error for `path`
    pub fn format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        AuditError::Format {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Builds a `Persistence` error for `path`
    pub fn persistence(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        AuditError::Persistence {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Builds a `CorruptState` error for `path`
    pub fn corrupt_state(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        AuditError::CorruptState {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Maps an I/O error raised while opening an input file.
    ///
    /// `NotFound` becomes [`AuditError::NotFound`]; anything else is a
    /// format-level failure of that input.
    pub fn from_input_io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AuditError::NotFound(path.as_ref().to_path_buf())
        } else {
            AuditError::format(path, err.to_string())
        }
    }
}

/// Judge-specific errors
///
/// Errors that occur when asking the external language model for a verdict.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// The request never produced a response
    #[error("Request to judge failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Judge API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response contained no candidate text
    #[error("Empty response from judge")]
    EmptyResponse,

    /// The response text is not a valid verdict
    #[error("Invalid judge response: {0}")]
    InvalidResponse(String),

    /// The judge was asked to fail (test stubs)
    #[error("{0}")]
    Rejected(String),
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AuditError {
    fn from(err: toml::de::Error) -> Self {
        AuditError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for AuditError {
    fn from(err: csv::Error) -> Self {
        AuditError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_error_display() {
        let err = AuditError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_format_error_mentions_path() {
        let err = AuditError::format("data/tweets.csv", "line 3: expected 2 fields, got 1");
        let msg = err.to_string();
        assert!(msg.contains("data/tweets.csv"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_evaluation_error_keeps_source() {
        let err = AuditError::Evaluation {
            record_id: "42".to_string(),
            source: JudgeError::EmptyResponse,
        };
        assert!(err.to_string().contains("record 42"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Empty response from judge");
    }

    #[test]
    fn test_from_input_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err = AuditError::from_input_io("missing.json", io_err);
        assert!(matches!(err, AuditError::NotFound(p) if p == PathBuf::from("missing.json")));
    }

    #[test]
    fn test_from_input_io_other_is_format() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = AuditError::from_input_io("tweets.csv", io_err);
        assert!(matches!(err, AuditError::Format { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AuditError = io_err.into();
        assert!(matches!(err, AuditError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: AuditError = toml_err.into();
        assert!(matches!(err, AuditError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_judge_error_api_display() {
        let err = JudgeError::Api {
            status: 429,
            message: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "Judge API error: 429 - quota");
    }
}
