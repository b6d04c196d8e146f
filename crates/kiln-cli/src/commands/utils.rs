//! Shared plumbing for command implementations.

use std::path::Path;

use kiln_config::{BuildMode, ConfigResolver, EnvironmentSnapshot, ResolvedConfig};
use tracing::{debug, info};

use crate::cli::TargetArgs;
use crate::config::{Settings, SettingsOverrides};
use crate::error::Result;

/// Everything a command needs after settings and env files are read.
pub(crate) struct Session {
    pub settings: Settings,
    pub mode: BuildMode,
    pub env: EnvironmentSnapshot,
}

impl Session {
    /// Load settings, then the environment snapshot for the selected mode.
    pub(crate) fn load(target: &TargetArgs, config_path: Option<&Path>) -> Result<Self> {
        let settings = Settings::load(&SettingsOverrides::from(target), config_path)?;
        settings.validate()?;

        let mode = settings.build_mode();
        let env = settings.env_loader().load(&mode)?;
        debug!(%mode, variables = env.len(), "loaded environment snapshot");

        Ok(Self {
            settings,
            mode,
            env,
        })
    }

    /// Resolve and emit the diagnostic line.
    pub(crate) fn resolve(&self) -> ResolvedConfig {
        let resolver = ConfigResolver::new(self.settings.project_layout());
        let config = resolver.resolve(&self.mode, &self.env);
        info!(
            mode = %config.mode,
            base_path = %config.base_path,
            "resolved build configuration"
        );
        config
    }
}
