use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::helpers::{
    default_asset_file_names, default_assets_dir, default_chunk_file_names,
    default_entry_file_names, default_out_dir, default_true,
};
use super::types::Minifier;

/// Output directory layout and file naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Clear the output directory before writing
    #[serde(default = "default_true")]
    pub empty_out_dir: bool,

    /// Emit source maps
    #[serde(default)]
    pub sourcemap: bool,

    #[serde(default)]
    pub minify: Minifier,

    /// Absolute path of the HTML entry document
    pub entry: PathBuf,

    /// Subdirectory of `out_dir` holding every emitted file
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_entry_file_names")]
    pub entry_file_names: String,

    #[serde(default = "default_chunk_file_names")]
    pub chunk_file_names: String,

    #[serde(default = "default_asset_file_names")]
    pub asset_file_names: String,
}

impl OutputSpec {
    /// Output settings for an app with the given entry document.
    pub fn for_entry(entry: impl Into<PathBuf>, is_production: bool) -> Self {
        Self {
            out_dir: default_out_dir(),
            empty_out_dir: true,
            sourcemap: !is_production,
            minify: if is_production {
                Minifier::Terser
            } else {
                Minifier::None
            },
            entry: entry.into(),
            assets_dir: default_assets_dir(),
            entry_file_names: default_entry_file_names(),
            chunk_file_names: default_chunk_file_names(),
            asset_file_names: default_asset_file_names(),
        }
    }

    /// The three naming templates, labelled by their option name.
    pub fn templates(&self) -> [(&'static str, &str); 3] {
        [
            ("entryFileNames", self.entry_file_names.as_str()),
            ("chunkFileNames", self.chunk_file_names.as_str()),
            ("assetFileNames", self.asset_file_names.as_str()),
        ]
    }
}

/// Expand the `[name]`, `[hash]` and `[ext]` placeholders of a file name
/// template.
///
/// ```
/// use kiln_config::render_file_name;
///
/// let name = render_file_name("assets/[name]-[hash].js", "vendor", "a1b2c3", "js");
/// assert_eq!(name, "assets/vendor-a1b2c3.js");
/// ```
pub fn render_file_name(template: &str, name: &str, hash: &str, ext: &str) -> String {
    template
        .replace("[name]", name)
        .replace("[hash]", hash)
        .replace("[ext]", ext)
}
