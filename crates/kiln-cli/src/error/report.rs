//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Settings(e) => miette::miette!("{}", e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::AliasNotFound { alias, path } => miette::miette!(
            help = "Create the directory or point the project root elsewhere with --root",
            "Alias '{}' points to a missing directory: {}",
            alias,
            path.display()
        ),
        ConfigError::EntryNotFound { path } => miette::miette!(
            help = "The HTML entry document must exist before building",
            "Entry document not found: {}",
            path.display()
        ),
        ConfigError::EnvFile { path, message } => miette::miette!(
            help = "Env files use KEY=value lines; '#' starts a comment",
            "Failed to parse {}: {}",
            path.display(),
            message
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
