//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;
use std::fmt::Display;

/// Quote a table cell and right-align it to `width` columns.
///
/// Cells wider than `width` are kept whole, so a long CIDR pushes the row
/// out rather than being cut.
pub fn format_field<T: Display>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{value}\""))
}

/// Section banner printed above a table.
pub fn header(title: &str) -> String {
    format!("# {}", title.bold())
}

/// One-line error banner for a failed calculation.
pub fn error_line(message: &str) -> String {
    format!("#{}# {message}", "ERROR".on_red())
}

/// One-line note, e.g. for truncated or partial output.
pub fn note_line(message: &str) -> String {
    format!("#{}# {message}", "NOTE".on_red())
}
