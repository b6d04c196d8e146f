use crate::config::{Settings, SettingsOverrides, SETTINGS_ENV_PREFIX, SETTINGS_FILE};
use crate::error::{Result, SettingsError};
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;

const SETTINGS_KEYS: [&str; 5] = ["root", "mode", "source_dir", "entry_html", "env_dir"];

impl Settings {
    /// Load settings from every source.
    /// Priority: CLI overrides > KILN_* variables > settings file > defaults
    ///
    /// Without an explicit `config_path`, `kiln.toml` is looked up in the
    /// root given by `--root` or `KILN_ROOT`, else the current directory. A
    /// missing default file is fine; a missing explicit one is an error.
    pub fn load(overrides: &SettingsOverrides, config_path: Option<&Path>) -> Result<Self> {
        let settings_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(SettingsError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let root: PathBuf = Self::figment(overrides, None)
                    .extract_inner("root")
                    .map_err(SettingsError::from)?;
                let candidate = root.join(SETTINGS_FILE);
                candidate.is_file().then_some(candidate)
            }
        };

        Self::figment(overrides, settings_file.as_deref())
            .extract()
            .map_err(|e| SettingsError::from(e).into())
    }

    /// Layered figment, exposed for tests and for `--verbose` diagnostics.
    pub fn figment(overrides: &SettingsOverrides, settings_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_settings()));

        if let Some(path) = settings_file {
            debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Toml::file_exact(path));
        }

        // KILN_MODE, KILN_ROOT, KILN_ENV_DIR, ...
        figment = figment.merge(Env::prefixed(SETTINGS_ENV_PREFIX).only(&SETTINGS_KEYS));

        figment.merge(Serialized::defaults(overrides))
    }

    /// Get default settings values.
    pub fn default_settings() -> Self {
        use crate::config::defaults::*;

        Self {
            root: default_root(),
            mode: default_mode(),
            source_dir: default_source_dir(),
            entry_html: default_entry_html(),
            env_dir: None,
        }
    }
}
