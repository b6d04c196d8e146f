//! Status message functions for terminal output.
//!
//! Everything goes to stderr; stdout is reserved for command output.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::error;
///
/// error("Entry document not found");
/// ```
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
