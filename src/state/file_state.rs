//! Source file and name input state.
//!
//! This module tracks where the current template, photo and font came from, and the text
//! buffer bound to the name input.

use std::path::{Path, PathBuf};

/// State related to user-provided files and text.
///
/// Responsibilities:
/// - Remembering the template, photo and font paths
/// - Holding the name input buffer between frames
#[derive(Debug, Clone, Default)]
pub struct FileState {
    /// Path of the loaded template
    template_path: Option<PathBuf>,
    /// Path of the loaded photo
    photo_path: Option<PathBuf>,
    /// Custom font path; `None` means the built-in font
    font_path: Option<PathBuf>,
    /// Text buffer for the name input
    name_buffer: String,
}

impl FileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    pub fn photo_path(&self) -> Option<&Path> {
        self.photo_path.as_deref()
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    pub fn set_template_path(&mut self, path: Option<PathBuf>) {
        self.template_path = path;
    }

    pub fn set_photo_path(&mut self, path: Option<PathBuf>) {
        self.photo_path = path;
    }

    pub fn set_font_path(&mut self, path: Option<PathBuf>) {
        self.font_path = path;
    }

    /// Returns a mutable reference to the name input buffer.
    pub fn name_buffer_mut(&mut self) -> &mut String {
        &mut self.name_buffer
    }

    pub fn name_buffer(&self) -> &str {
        &self.name_buffer
    }

    /// Directory to open file dialogs in: next to the template, else the working directory.
    pub fn dialog_directory(&self) -> Option<PathBuf> {
        self.template_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
    }

    /// Human-readable label for the active font.
    pub fn font_label(&self) -> String {
        self.font_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Built-in".to_string())
    }
}
