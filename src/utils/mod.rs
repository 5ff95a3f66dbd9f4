//! Utility modules for the banner editor.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_dimensions, format_file_name, format_px};
