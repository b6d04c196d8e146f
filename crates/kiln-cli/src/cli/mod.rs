//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln resolve` - Print the resolved build configuration as JSON
//! - `kiln check` - Resolve and validate against the filesystem
//! - `kiln env` - Show the public environment variables for a mode

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, EnvArgs, ResolveArgs, TargetArgs};

/// Kiln - build configuration resolver for single-page apps
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve build configuration for a single-page app",
    long_about = "Kiln reads a build mode, .env files and the process environment and\n\
                  produces the options record a bundler consumes: base path, compile-time\n\
                  constants, output layout, vendor chunks and pre-bundling hints."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file (defaults to kiln.toml in the project root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
