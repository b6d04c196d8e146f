//! Kiln CLI entry point: argument parsing, logging initialization and
//! command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, config_path),
        cli::Command::Check(check_args) => commands::check_execute(check_args, config_path),
        cli::Command::Env(env_args) => commands::env_execute(env_args, config_path),
    };

    result.map_err(error::cli_error_to_miette)
}
