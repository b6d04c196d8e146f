//! Pluggable config validation strategies
//!
//! Resolution never fails on its own. Callers that want a build to stop on a
//! malformed value opt in here. Schema checks are separate from filesystem
//! checks so library users can validate records for projects that are not on
//! disk.

use crate::bundle::ResolvedConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, BuildMode, ConfigValidator, EnvironmentSnapshot, ProjectLayout, SchemaValidator};
///
/// let config = resolve(
///     &BuildMode::Production,
///     &EnvironmentSnapshot::new(),
///     &ProjectLayout::new("/work/app"),
/// );
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()> {
        if !config.base_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "basePath".to_string(),
                value: config.base_path.clone(),
                hint: Some("The base path must start with '/'".to_string()),
            });
        }

        if config.is_production != config.mode.is_production() {
            return Err(ConfigError::InvalidValue {
                field: "isProduction".to_string(),
                value: config.is_production.to_string(),
                hint: Some(format!("Mode '{}' disagrees with this flag", config.mode)),
            });
        }

        validate_project_id(&config.project_id)?;

        let assets_prefix = format!("{}/", config.output.assets_dir);
        for (field, template) in config.output.templates() {
            if !template.contains("[hash]") {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: template.to_string(),
                    hint: Some("Include [hash] so emitted files can be cached long-term".to_string()),
                });
            }
            if !template.starts_with(&assets_prefix) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: template.to_string(),
                    hint: Some(format!("Emit files under '{assets_prefix}'")),
                });
            }
        }

        config.chunk_plan.validate()?;

        for module in &config.prebundle {
            if module.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "prebundleList".to_string(),
                    value: module.clone(),
                    hint: Some("Remove empty strings from the pre-bundle list".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Project identifiers are opaque, but a present one must be a plain token.
fn validate_project_id(id: &str) -> Result<()> {
    if let Some(bad) = id
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(ConfigError::InvalidValue {
            field: "projectId".to_string(),
            value: id.to_string(),
            hint: Some(format!(
                "Invalid character '{bad}'; use letters, digits, '-' or '_'"
            )),
        });
    }
    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then verifies that alias targets are existing
/// directories and that the entry document exists.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (alias, path) in &config.path_aliases {
            if !path.is_absolute() || !path.is_dir() {
                return Err(ConfigError::AliasNotFound {
                    alias: alias.clone(),
                    path: path.clone(),
                });
            }
        }

        if !config.output.entry.is_file() {
            return Err(ConfigError::EntryNotFound {
                path: config.output.entry.clone(),
            });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ResolvedConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &ResolvedConfig) -> Result<()> {
    FsValidator.validate(config)
}
