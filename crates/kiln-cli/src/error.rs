//! Error handling for the Kiln CLI.
//!
//! Resolution itself never fails, so most errors here come from reading
//! settings, loading env files and the opt-in `check` validation.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`SettingsError`, `kiln_config::ConfigError`)
//!   carry the details
//! - **Error conversion** is automatic via `#[from]` attributes
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::error::{Result, ResultExt};
//! use std::io::Write;
//!
//! fn emit(json: &str) -> Result<()> {
//!     writeln!(std::io::stdout(), "{json}").context("Failed to write to stdout")
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use kiln_config::ConfigError;
pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution inputs or validation failed (env files, invariants)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tool settings could not be loaded
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Another error prefixed with what was being done
    #[error("{0}")]
    Custom(String),
}

/// Errors from loading `kiln.toml`, `KILN_*` variables and CLI overrides.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file given with `--config` doesn't exist
    #[error("Settings file not found: {}\n\nHint: Create a kiln.toml file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// A layer produced a value of the wrong type
    #[error("Invalid settings: {message}\n\nHint: {hint}")]
    Extract {
        /// Figment's description of the failure
        message: String,
        /// Helpful hint for fixing the source
        hint: String,
    },
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        SettingsError::Extract {
            message: err.to_string(),
            hint: "Check kiln.toml syntax and KILN_* environment variables".to_string(),
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Settings(err.into())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
