//! Error types for environment loading and configuration validation.
//!
//! Resolution itself never fails. These errors come from reading env files
//! that exist but are malformed, from building a chunk plan that breaks the
//! partition rule, and from the opt-in validators.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Env file loading
    #[error("failed to parse env file {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },

    // Chunk plan construction
    #[error("module '{module}' is assigned to both '{first}' and '{second}' chunks")]
    OverlappingChunk {
        module: String,
        first: String,
        second: String,
    },

    #[error("chunk names cannot be empty")]
    EmptyChunkName,

    // Schema validation (no filesystem checks)
    #[error("invalid value for '{field}': {value}{}", hint_suffix(.hint))]
    InvalidValue {
        field: String,
        value: String,
        hint: Option<String>,
    },

    // Filesystem validation (for CLI use)
    #[error("alias '{alias}' points to a missing directory: {}", .path.display())]
    AliasNotFound { alias: String, path: PathBuf },

    #[error("entry document not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(" (hint: {hint})"),
        None => String::new(),
    }
}
