//! Text formatting utilities for the banner editor.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use std::path::Path;

/// Formats image dimensions.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_dimensions(1080, 1350), "1080 × 1350");
/// ```
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{} × {}", width, height)
}

/// Formats a file path as its file name, falling back to the full path.
pub fn format_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a pixel size with one decimal, dropping a trailing `.0`.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_px(22.0), "22px");
/// assert_eq!(format_px(41.04), "41.0px");
/// ```
pub fn format_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{:.1}px", value)
    }
}
