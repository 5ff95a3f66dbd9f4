//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, layout, preview, status) and translates their
//! interactions into a single result for the application coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, layout_panel, preview_panel, status_bar};
use rbanner::BannerLayout;
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a template
    OpenTemplateRequested(PathBuf),
    /// User requested to open a photo
    OpenPhotoRequested(PathBuf),
    /// User removed the photo
    ClearPhotoRequested,
    /// User requested a custom font
    OpenFontRequested(PathBuf),
    /// User switched back to the built-in font
    ResetFontRequested,
    /// The name input changed
    NameChanged(String),
    /// User requested the banner be saved
    DownloadRequested(PathBuf),
    /// User toggled positioning guides
    DebugGuidesToggled(bool),
    /// The layout was edited
    LayoutChanged(BannerLayout),
    /// User requested a layout file be loaded
    LoadLayoutRequested(PathBuf),
    /// User requested the layout be saved
    SaveLayoutRequested(PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenTemplateRequested(path) => {
                        PanelInteraction::OpenTemplateRequested(path)
                    }
                    header::HeaderInteraction::OpenPhotoRequested(path) => {
                        PanelInteraction::OpenPhotoRequested(path)
                    }
                    header::HeaderInteraction::ClearPhotoRequested => PanelInteraction::ClearPhotoRequested,
                    header::HeaderInteraction::OpenFontRequested(path) => {
                        PanelInteraction::OpenFontRequested(path)
                    }
                    header::HeaderInteraction::ResetFontRequested => PanelInteraction::ResetFontRequested,
                    header::HeaderInteraction::DownloadRequested(path) => {
                        PanelInteraction::DownloadRequested(path)
                    }
                    header::HeaderInteraction::DebugGuidesToggled(enabled) => {
                        PanelInteraction::DebugGuidesToggled(enabled)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Layout editor on the right, only when toggled on
        if state.layout.show_layout_panel() {
            egui::SidePanel::right("layout_panel")
                .default_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    ui.heading("Layout");
                    ui.separator();

                    if let Some(layout_interaction) = layout_panel::render_layout_panel(ui, state) {
                        interaction = Some(match layout_interaction {
                            layout_panel::LayoutPanelInteraction::LayoutEdited(layout) => {
                                PanelInteraction::LayoutChanged(layout)
                            }
                            layout_panel::LayoutPanelInteraction::LoadLayoutRequested(path) => {
                                PanelInteraction::LoadLayoutRequested(path)
                            }
                            layout_panel::LayoutPanelInteraction::SaveLayoutRequested(path) => {
                                PanelInteraction::SaveLayoutRequested(path)
                            }
                        });
                    }
                });
        }

        // Centre: banner preview
        let preview_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.extreme_bg_color);

        egui::CentralPanel::default()
            .frame(preview_frame)
            .show(ctx, |ui| {
                if let Some(preview_interaction) = preview_panel::render_preview_panel(ui, ctx, state, loader) {
                    interaction = Some(match preview_interaction {
                        preview_panel::PreviewPanelInteraction::PhotoPicked(path) => {
                            PanelInteraction::OpenPhotoRequested(path)
                        }
                        preview_panel::PreviewPanelInteraction::NameEdited(name) => {
                            PanelInteraction::NameChanged(name)
                        }
                    });
                }
            });

        interaction
    }
}
