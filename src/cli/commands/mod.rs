//! CLI command implementations
//!
//! Each command loads the configuration itself and returns a process exit
//! code. Errors are printed here, so `main` only sees unexpected failures.

pub mod analyze;
pub mod extract;
pub mod init;
pub mod status;
pub mod validate;

use crate::config::{load_config_or_default, AuditConfig};
use std::path::Path;

/// Loads the configuration, printing the error on failure
fn load_or_report(config_path: Option<&Path>) -> Result<AuditConfig, i32> {
    load_config_or_default(config_path).map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        println!("❌ Failed to load configuration");
        println!("   Error: {e}");
        super::EXIT_CONFIG
    })
}
