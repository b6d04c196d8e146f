//! The resolved options record consumed by the bundler.

mod chunks;
mod defines;
pub(crate) mod helpers;
mod output;
mod types;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use chunks::{
    ChunkPlan, ChunkPlanBuilder, BACKEND_VENDOR_CHUNK, BACKEND_VENDOR_MODULES, UI_VENDOR_CHUNK,
    UI_VENDOR_MODULES,
};
pub(crate) use defines::build_defines;
pub use output::{render_file_name, OutputSpec};
pub use types::Minifier;

use crate::error::ConfigError;
use crate::mode::BuildMode;

/// Alias token mapped to the primary source directory.
pub const SOURCE_ALIAS: &str = "@";

/// Fully resolved build configuration.
///
/// Every field is always present; only the values vary with the mode and
/// environment. Produced once by [`crate::resolve`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub mode: BuildMode,

    /// Public URL root for deployed assets
    pub base_path: String,

    pub is_production: bool,

    /// Hosted backend project identifier, passed through untouched
    pub project_id: String,

    /// Import aliases (e.g., "@" → "/abs/project/src")
    pub path_aliases: IndexMap<String, PathBuf>,

    /// Compile-time constants (expression → JavaScript literal)
    pub defines: IndexMap<String, String>,

    #[serde(rename = "outputSpec")]
    pub output: OutputSpec,

    /// Vendor chunk groups
    pub chunk_plan: ChunkPlan,

    /// Modules eagerly pre-bundled by the dev server
    #[serde(rename = "prebundleList")]
    pub prebundle: Vec<String>,
}

impl ResolvedConfig {
    /// Absolute directory the `@` alias points to.
    pub fn source_alias(&self) -> Option<&PathBuf> {
        self.path_aliases.get(SOURCE_ALIAS)
    }

    /// Convert to serde_json::Value for handing to a JavaScript bundler.
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            value: e.to_string(),
            hint: None,
        })
    }

    /// Parse a previously emitted record.
    ///
    /// The chunk plan's partition rule is re-checked while deserializing.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            value: e.to_string(),
            hint: Some("Expected the JSON emitted by `kiln resolve`".to_string()),
        })
    }
}
