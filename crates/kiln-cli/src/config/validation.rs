use crate::config::Settings;
use crate::error::{CliError, Result};
use std::path::{Component, Path};

/// Reject paths that escape the project root or are absolute.
fn validate_relative(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidArgument(format!("{field} cannot be empty")));
    }

    let path = Path::new(value);
    if path.is_absolute() || path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::InvalidArgument(format!(
            "{field} must be a path inside the project root (got '{value}')"
        )));
    }

    Ok(())
}

impl Settings {
    /// Validate settings for logical consistency.
    pub fn validate(&self) -> Result<()> {
        validate_relative("source_dir", &self.source_dir)?;
        validate_relative("entry_html", &self.entry_html)?;

        if self.mode.trim().is_empty() {
            return Err(CliError::InvalidArgument("mode cannot be empty".to_string()));
        }

        Ok(())
    }
}
