//! Resolve command implementation.

use std::io::Write;
use std::path::Path;

use crate::cli::ResolveArgs;
use crate::commands::utils::Session;
use crate::error::{Result, ResultExt};

/// Execute the resolve command.
///
/// Writes the record as JSON to stdout.
pub fn execute(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(&args.target, config_path)?;
    let config = session.resolve();

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write configuration to stdout")
}
