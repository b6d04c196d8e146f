use indexmap::IndexMap;
use serde_json::Value;

use crate::env::{EnvironmentSnapshot, PROJECT_ID_VAR};
use crate::mode::BuildMode;

const ENV_OBJECT: &str = "import.meta.env";

/// Compile-time constants substituted into client code.
///
/// Keys are the expressions the bundler replaces, values are JavaScript
/// literals (JSON encoded).
pub(crate) fn build_defines(
    mode: &BuildMode,
    base_path: &str,
    project_id: &str,
    public_env: &EnvironmentSnapshot,
) -> IndexMap<String, String> {
    let mut defines = IndexMap::new();
    let is_production = mode.is_production();

    defines.insert(env_key("MODE"), js_string(mode.as_str()));
    defines.insert(env_key("BASE_URL"), js_string(base_path));
    defines.insert(env_key("PROD"), is_production.to_string());
    defines.insert(env_key("DEV"), (!is_production).to_string());

    for (key, value) in public_env.iter() {
        defines.insert(env_key(key), js_string(value));
    }
    defines.insert(env_key(PROJECT_ID_VAR), js_string(project_id));

    defines
}

fn env_key(name: &str) -> String {
    format!("{ENV_OBJECT}.{name}")
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
