use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration and print it as JSON
    ///
    /// The record is written to stdout so it can be piped into a bundler
    /// config. Diagnostics go to stderr.
    Resolve(ResolveArgs),

    /// Resolve and validate the configuration
    ///
    /// Checks that the project id is well formed, that alias targets exist
    /// and that the HTML entry document is present.
    Check(CheckArgs),

    /// Show the public environment variables visible for a mode
    Env(EnvArgs),
}

/// Mode and project selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Build mode (development, production, or any custom name)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Project root directory
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the env command
#[derive(Args, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print values in full instead of masking them
    #[arg(long)]
    pub reveal: bool,
}
