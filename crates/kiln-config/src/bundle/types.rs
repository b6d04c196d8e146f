use serde::{Deserialize, Serialize};

/// Minification strategy handed to the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    /// Leave output unminified (default outside production)
    #[default]
    None,
    /// Minify with terser (production builds)
    Terser,
}

impl Minifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Minifier::None => "none",
            Minifier::Terser => "terser",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Minifier::None)
    }
}

impl std::fmt::Display for Minifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
