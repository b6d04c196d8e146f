use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_base_path() -> String {
    "/".to_string()
}

pub(crate) fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_assets_dir() -> String {
    "assets".to_string()
}

pub(crate) fn default_source_dir() -> String {
    "src".to_string()
}

pub(crate) fn default_entry_html() -> String {
    "index.html".to_string()
}

pub(crate) fn default_entry_file_names() -> String {
    "assets/[name]-[hash].js".to_string()
}

pub(crate) fn default_chunk_file_names() -> String {
    "assets/[name]-[hash].js".to_string()
}

pub(crate) fn default_asset_file_names() -> String {
    "assets/[name]-[hash].[ext]".to_string()
}
