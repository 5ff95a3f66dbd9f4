//! Banner layout and editor toggles.
//!
//! This module encapsulates the placement constants the user can tune in the layout panel,
//! plus the display toggles that are persisted alongside them.

use rbanner::BannerLayout;
use serde::{Deserialize, Serialize};

/// State related to banner layout editing.
///
/// Responsibilities:
/// - Holding the active `BannerLayout`
/// - Tracking layout panel visibility and debug guides
/// - Reporting whether the layout differs from the defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Active placement constants
    banner_layout: BannerLayout,
    /// Whether the layout side panel is shown
    show_layout_panel: bool,
    /// Whether positioning guides are drawn into the preview
    debug_guides: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with the default layout and panels hidden.
    pub fn new() -> Self {
        Self {
            banner_layout: BannerLayout::default(),
            show_layout_panel: false,
            debug_guides: false,
        }
    }

    // ===== Layout Queries =====

    pub fn banner_layout(&self) -> &BannerLayout {
        &self.banner_layout
    }

    pub fn show_layout_panel(&self) -> bool {
        self.show_layout_panel
    }

    pub fn debug_guides(&self) -> bool {
        self.debug_guides
    }

    /// Returns true if the layout has been changed from the defaults.
    pub fn is_customized(&self) -> bool {
        self.banner_layout != BannerLayout::default()
    }

    // ===== Layout Mutations =====

    /// Replaces the active layout. Callers validate before storing.
    pub fn set_banner_layout(&mut self, layout: BannerLayout) {
        self.banner_layout = layout;
    }

    pub fn set_show_layout_panel(&mut self, show: bool) {
        self.show_layout_panel = show;
    }

    pub fn set_debug_guides(&mut self, enabled: bool) {
        self.debug_guides = enabled;
    }
}
