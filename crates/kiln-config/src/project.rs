//! Project layout on disk.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_entry_html, default_source_dir};

/// Where the application lives. All absolute paths in a
/// [`ResolvedConfig`](crate::ResolvedConfig) are derived from this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLayout {
    root: PathBuf,

    #[serde(default = "default_source_dir")]
    source_dir: String,

    #[serde(default = "default_entry_html")]
    entry_html: String,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    ///
    /// Relative roots are joined onto the current directory. The result is
    /// lexically cleaned, not canonicalized, so the root does not need to
    /// exist yet.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let absolute = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(root))
                .unwrap_or_else(|_| Path::new("/").join(root))
        };

        Self {
            root: absolute.clean(),
            source_dir: default_source_dir(),
            entry_html: default_entry_html(),
        }
    }

    pub fn with_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_entry_html(mut self, file: impl Into<String>) -> Self {
        self.entry_html = file.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> &str {
        &self.source_dir
    }

    /// Absolute path of the primary source directory.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir).clean()
    }

    /// Absolute path of the HTML entry document.
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry_html).clean()
    }
}
