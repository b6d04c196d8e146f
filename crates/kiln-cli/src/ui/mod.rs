//! Terminal UI utilities.
//!
//! # Examples
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::info("Checking configuration...");
//! ui::success("Configuration is valid");
//! ```

mod messages;

pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Mask a value for display, keeping a short prefix.
///
/// Used by `kiln env` so identifiers and keys don't end up in CI logs.
pub fn mask(value: &str) -> String {
    const VISIBLE: usize = 4;
    let count = value.chars().count();
    if count <= VISIBLE {
        return "*".repeat(count);
    }
    let prefix: String = value.chars().take(VISIBLE).collect();
    format!("{prefix}{}", "*".repeat(count - VISIBLE))
}
