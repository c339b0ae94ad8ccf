//! Terminal diagnostics
//!
//! Everything here writes to stderr; stdout is reserved for the report.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(error: &anyhow::Error) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Print a recovery hint
    pub fn suggestion(message: &str) {
        eprintln!("  {} {}", "Suggestion:".yellow(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}
