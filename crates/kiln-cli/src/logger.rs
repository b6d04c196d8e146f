//! Logging infrastructure for the Kiln CLI.
//!
//! Structured logging on top of `tracing`. Verbosity comes from the global
//! flags, falling back to `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!(mode = "production", "resolving build configuration");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "kiln=debug,kiln_config=debug,kiln_cli=debug";
const QUIET_FILTER: &str = "kiln=error,kiln_config=error,kiln_cli=error";
const DEFAULT_FILTER: &str = "kiln=info,kiln_config=info,kiln_cli=info";

/// Pick the filter directives for the given flags.
///
/// 1. `--verbose`: DEBUG for kiln crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` when set
/// 4. INFO for kiln crates
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program. Logs go to stderr so that stdout
/// stays machine-readable for `kiln resolve`.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // only exercise filter selection.

    #[test]
    fn test_verbose_wins() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("kiln_config=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().contains("kiln_cli=error"));
    }
}
