//! Environment snapshots and `.env` file loading.
//!
//! The snapshot is the only input of [`crate::resolve`] that comes from the
//! outside world. Everything that touches the filesystem or the process
//! environment lives in [`EnvLoader`]; the snapshot itself is a plain value.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Prefix a variable needs to be visible to the resolver and client code.
pub const DEFAULT_ENV_PREFIX: &str = "VITE_";

/// Variable holding the hosted backend project identifier.
pub const PROJECT_ID_VAR: &str = "VITE_PROJECT_ID";

/// Ordered, read-only view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentSnapshot {
    vars: IndexMap<String, String>,
}

impl EnvironmentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and programmatic callers.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep only the keys that start with `prefix`, preserving order.
    pub fn filter_prefix(&self, prefix: &str) -> Self {
        self.vars
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Loads an [`EnvironmentSnapshot`] for a mode from `.env` files and the
/// process environment.
///
/// Files are read from `dir` in increasing precedence:
///
/// 1. `.env`
/// 2. `.env.local`
/// 3. `.env.<mode>`
/// 4. `.env.<mode>.local`
///
/// Process variables override file values. Only keys carrying
/// [`DEFAULT_ENV_PREFIX`] survive, which always includes [`PROJECT_ID_VAR`].
///
/// # Example
///
/// ```no_run
/// use kiln_config::{BuildMode, EnvLoader};
///
/// let env = EnvLoader::new(".").load(&BuildMode::Production).unwrap();
/// println!("{} public variables", env.len());
/// ```
#[derive(Debug, Clone)]
pub struct EnvLoader {
    dir: PathBuf,
    include_process: bool,
}

impl EnvLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            include_process: true,
        }
    }

    /// Skip the process environment and read env files only.
    pub fn files_only(mut self) -> Self {
        self.include_process = false;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate env files for `mode`, lowest precedence first.
    pub fn candidate_files(&self, mode: &BuildMode) -> Vec<PathBuf> {
        vec![
            self.dir.join(".env"),
            self.dir.join(".env.local"),
            self.dir.join(format!(".env.{mode}")),
            self.dir.join(format!(".env.{mode}.local")),
        ]
    }

    /// Load using the current process environment.
    pub fn load(&self, mode: &BuildMode) -> Result<EnvironmentSnapshot> {
        self.load_from(mode, std::env::vars())
    }

    /// Load with explicitly supplied process variables.
    pub fn load_from<I>(&self, mode: &BuildMode, process: I) -> Result<EnvironmentSnapshot>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars: IndexMap<String, String> = IndexMap::new();

        for path in self.candidate_files(mode) {
            if !path.is_file() {
                debug!(path = %path.display(), "env file not present, skipping");
                continue;
            }
            let loaded = read_env_file(&path)?;
            debug!(path = %path.display(), count = loaded.len(), "loaded env file");
            vars.extend(loaded);
        }

        if self.include_process {
            vars.extend(process);
        }

        vars.retain(|key, _| key.starts_with(DEFAULT_ENV_PREFIX));
        Ok(EnvironmentSnapshot { vars })
    }
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path).map_err(|err| env_file_error(path, &err))?;
    iter.map(|item| item.map_err(|err| env_file_error(path, &err)))
        .collect()
}

fn env_file_error(path: &Path, err: &dotenvy::Error) -> ConfigError {
    ConfigError::EnvFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_defaults_missing_keys() {
        let env = EnvironmentSnapshot::new();
        assert_eq!(env.get_or(PROJECT_ID_VAR, ""), "");

        let env = env.with(PROJECT_ID_VAR, "abc123");
        assert_eq!(env.get_or(PROJECT_ID_VAR, ""), "abc123");
    }

    #[test]
    fn filter_prefix_preserves_order() {
        let env: EnvironmentSnapshot = [
            ("VITE_B", "2"),
            ("HOME", "/root"),
            ("VITE_A", "1"),
        ]
        .into_iter()
        .collect();

        let public = env.filter_prefix("VITE_");
        let keys: Vec<_> = public.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["VITE_B", "VITE_A"]);
    }

    #[test]
    fn candidate_files_follow_mode() {
        let loader = EnvLoader::new("/project");
        let files = loader.candidate_files(&BuildMode::Custom("staging".into()));
        assert_eq!(
            files,
            vec![
                PathBuf::from("/project/.env"),
                PathBuf::from("/project/.env.local"),
                PathBuf::from("/project/.env.staging"),
                PathBuf::from("/project/.env.staging.local"),
            ]
        );
    }

    #[test]
    fn missing_directory_yields_process_vars_only() {
        let loader = EnvLoader::new("/definitely/not/a/real/dir");
        let env = loader
            .load_from(
                &BuildMode::Development,
                vec![
                    ("VITE_PROJECT_ID".to_string(), "p1".to_string()),
                    ("PATH".to_string(), "/bin".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("VITE_PROJECT_ID"), Some("p1"));
    }
}
