//! Env command implementation.

use std::io::Write;
use std::path::Path;

use crate::cli::EnvArgs;
use crate::commands::utils::Session;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the env command.
///
/// Prints `KEY=value` lines for the public variables of the selected mode,
/// masked unless `--reveal` is given.
pub fn execute(args: EnvArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(&args.target, config_path)?;

    if session.env.is_empty() {
        ui::warning(&format!(
            "No {}* variables visible for mode '{}'",
            kiln_config::DEFAULT_ENV_PREFIX,
            session.mode
        ));
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for (key, value) in session.env.iter() {
        let shown = if args.reveal {
            value.to_string()
        } else {
            ui::mask(value)
        };
        writeln!(stdout, "{key}={shown}").context("Failed to write environment to stdout")?;
    }
    Ok(())
}
