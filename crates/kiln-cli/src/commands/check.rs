//! Check command implementation.
//!
//! Resolves the configuration and validates it without building.

use std::path::Path;

use kiln_config::{render_file_name, ConfigValidator, FsValidator, ResolvedConfig};

use crate::cli::CheckArgs;
use crate::commands::utils::Session;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load settings and env files
/// 2. Resolve for the selected mode
/// 3. Schema checks (project id, base path, naming templates, chunk plan)
/// 4. Filesystem checks (alias targets, entry document)
///
/// # Errors
///
/// Returns the first failing check.
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    ui::info("Checking configuration...");

    let session = Session::load(&args.target, config_path)?;
    let config = session.resolve();

    if config.project_id.is_empty() {
        ui::warning(&format!(
            "{} is not set; the backend client will have no project id",
            kiln_config::PROJECT_ID_VAR
        ));
    }

    if let Err(err) = FsValidator.validate(&config) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    report(&config);
    ui::success("All checks passed!");
    Ok(())
}

fn report(config: &ResolvedConfig) {
    ui::success(&format!(
        "mode '{}' ({})",
        config.mode,
        if config.is_production {
            "production"
        } else {
            "not production"
        }
    ));

    for (alias, path) in &config.path_aliases {
        ui::success(&format!("  {alias} → {}", path.display()));
    }
    ui::success(&format!("  entry {}", config.output.entry.display()));

    for (chunk, modules) in config.chunk_plan.iter() {
        let file = render_file_name(&config.output.chunk_file_names, chunk, "<hash>", "js");
        ui::info(&format!("  {file}: {}", modules.join(", ")));
    }
}
