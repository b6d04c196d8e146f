//! Tool settings with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and `kiln.toml`.
//! Priority: CLI > Environment > File > Defaults
//!
//! These settings describe where the project is and how to read its
//! environment. They never change what the resolver produces for a given
//! mode and snapshot.

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use kiln_config::{BuildMode, EnvLoader, ProjectLayout};

pub use defaults::*;

/// File name looked up in the project root when `--config` is not given.
pub const SETTINGS_FILE: &str = "kiln.toml";

/// Prefix of environment variables that override settings (`KILN_MODE`, ...).
pub const SETTINGS_ENV_PREFIX: &str = "KILN_";

/// Kiln settings - loaded from kiln.toml, KILN_* variables or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Settings {
    /// Project root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Build mode used when the command line doesn't name one
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Primary source directory, relative to the root
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// HTML entry document, relative to the root
    #[serde(default = "default_entry_html")]
    pub entry_html: String,

    /// Directory holding .env files (defaults to the root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
}

/// Values given on the command line. Only present fields override lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl From<&crate::cli::TargetArgs> for SettingsOverrides {
    fn from(args: &crate::cli::TargetArgs) -> Self {
        Self {
            root: args.root.clone(),
            mode: args.mode.clone(),
        }
    }
}

impl Settings {
    pub fn build_mode(&self) -> BuildMode {
        BuildMode::from(self.mode.as_str())
    }

    pub fn project_layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root)
            .with_source_dir(self.source_dir.clone())
            .with_entry_html(self.entry_html.clone())
    }

    /// Env loader reading from `env_dir`, or from the project root.
    pub fn env_loader(&self) -> EnvLoader {
        let layout = self.project_layout();
        let dir = match &self.env_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => layout.root().join(dir),
            None => layout.root().to_path_buf(),
        };
        EnvLoader::new(dir)
    }
}
