//! Centralized application state for the banner editor.
//!
//! This module composes focused state components that each manage a specific aspect of
//! the editor, next to the library's `BannerSession` and `Compositor`.

use crate::state::{FileState, LayoutState, PreviewState};
use rbanner::{BannerSession, Compositor, NameFont};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Banner Data =====
    /// Template, photo and name for this session
    pub session: BannerSession,

    /// Renderer configured with the active layout and font
    pub compositor: Compositor,

    // ===== Focused State Components =====
    /// Placement constants and editor toggles
    pub layout: LayoutState,

    /// Rendered preview and texture
    pub preview: PreviewState,

    /// Source paths and name input buffer
    pub files: FileState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates a new application state with the default layout and built-in font.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_layout(LayoutState::new(), NameFont::fallback()?)
    }

    /// Creates a new AppState from persisted layout settings and a loaded font.
    ///
    /// Falls back to the default layout if the persisted one no longer validates.
    pub fn with_layout(layout: LayoutState, font: NameFont) -> anyhow::Result<Self> {
        let mut layout = layout;
        if let Err(e) = layout.banner_layout().validate() {
            log::warn!("Ignoring stored layout: {:#}", e);
            layout.set_banner_layout(Default::default());
        }

        let compositor = Compositor::new(layout.banner_layout().clone(), font)?
            .with_debug_guides(layout.debug_guides());

        Ok(Self {
            session: BannerSession::new(),
            compositor,
            layout,
            preview: PreviewState::new(),
            files: FileState::new(),
            error_message: None,
        })
    }

    // ===== High-Level Coordination Methods =====

    /// Records an error for display and logs it.
    pub fn report_error(&mut self, message: String) {
        log::error!("{}", message);
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Returns true once a template is available to draw on.
    pub fn has_template(&self) -> bool {
        self.session.template_size().is_some()
    }
}
