//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the banner editor:
//! - Header panel (template, photo and font controls, download, toggles)
//! - Preview panel (scaled banner with photo picker and name input overlays)
//! - Layout panel (placement sliders, layout files)
//! - Status bar (template, photo and name summary)
//! - Native file dialogs
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod preview_panel;
pub mod layout_panel;
pub mod status_bar;
pub mod dialogs;
pub mod panel_manager;
