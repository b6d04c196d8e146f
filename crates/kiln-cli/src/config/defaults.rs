use std::path::PathBuf;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_mode() -> String {
    "development".to_string()
}

pub fn default_source_dir() -> String {
    "src".to_string()
}

pub fn default_entry_html() -> String {
    "index.html".to_string()
}
