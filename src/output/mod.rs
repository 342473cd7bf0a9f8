//! Report rendering for reconciliation results.
//!
//! - [`csv`] - timestamped CSV report file
//! - [`terminal`] - colored stdout tables and summary

mod csv;
mod terminal;

// Re-export public functions
pub use csv::{build_report, write_report};
pub use terminal::{format_field, print_report, print_summary};
