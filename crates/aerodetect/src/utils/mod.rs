//! Utility modules for common patterns.

pub mod formatting;

pub use formatting::{format_file_size, selection_summary};
