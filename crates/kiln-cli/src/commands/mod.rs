//! Command implementations for the Kiln CLI.
//!
//! - [`resolve`] - Print the resolved configuration
//! - [`check`] - Validate the configuration against the filesystem
//! - [`env`] - Show the visible environment
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments plus the optional settings file and returns a Result.

pub mod check;
pub mod env;
pub mod resolve;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use env::execute as env_execute;
pub use resolve::execute as resolve_execute;
