//! Kiln CLI - build configuration resolver for single-page apps.
//!
//! Thin command-line layer over `kiln-config`:
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages
//! - `commands` - `resolve`, `check` and `env`
//! - `config` - Layered tool settings (`kiln.toml`, `KILN_*`, flags)

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt, SettingsError};
