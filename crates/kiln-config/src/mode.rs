//! Build modes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named build profile chosen by the invoking command.
///
/// Any identifier other than `development` or `production` is kept as a
/// custom mode. Custom modes are never production.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
    Custom(String),
}

impl BuildMode {
    pub fn as_str(&self) -> &str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
            BuildMode::Custom(name) => name,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl From<&str> for BuildMode {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" | "development" => BuildMode::Development,
            "production" => BuildMode::Production,
            other => BuildMode::Custom(other.to_string()),
        }
    }
}

impl From<String> for BuildMode {
    fn from(value: String) -> Self {
        BuildMode::from(value.as_str())
    }
}

impl From<BuildMode> for String {
    fn from(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for BuildMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BuildMode::from(s))
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
