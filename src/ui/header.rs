//! Header panel UI rendering
//!
//! Handles the top bar with template/photo/font controls, the download button and the
//! layout/guide toggles.

use crate::app::AppState;
use crate::ui::dialogs;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a new template
    OpenTemplateRequested(PathBuf),
    /// User picked a new photo
    OpenPhotoRequested(PathBuf),
    /// User removed the photo
    ClearPhotoRequested,
    /// User picked a custom font
    OpenFontRequested(PathBuf),
    /// User switched back to the built-in font
    ResetFontRequested,
    /// User chose where to save the banner
    DownloadRequested(PathBuf),
    /// User toggled positioning guides
    DebugGuidesToggled(bool),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let directory = state.files.dialog_directory();

    ui.horizontal(|ui| {
        if ui.button("🖼 Open Template").clicked() {
            if let Some(path) = dialogs::pick_image("Open Template", directory.as_deref()) {
                interaction = Some(HeaderInteraction::OpenTemplateRequested(path));
            }
        }

        if ui.button("📷 Choose Photo").clicked() {
            if let Some(path) = dialogs::pick_image("Choose Photo", directory.as_deref()) {
                interaction = Some(HeaderInteraction::OpenPhotoRequested(path));
            }
        }

        if state.session.photo().is_some() && ui.button("✖ Remove Photo").clicked() {
            interaction = Some(HeaderInteraction::ClearPhotoRequested);
        }

        ui.separator();

        let font_response = ui.button(format!("🔤 Font: {}", state.files.font_label()));
        if font_response.clicked() {
            if let Some(path) = dialogs::pick_font(directory.as_deref()) {
                interaction = Some(HeaderInteraction::OpenFontRequested(path));
            }
        }
        font_response.on_hover_text("Use a font that covers the script of the name");

        if state.files.font_path().is_some() && ui.button("Built-in Font").clicked() {
            interaction = Some(HeaderInteraction::ResetFontRequested);
        }

        ui.separator();

        let can_download = state.has_template();
        if ui
            .add_enabled(can_download, egui::Button::new("⬇ Download PNG"))
            .clicked()
        {
            if let Some(path) = dialogs::save_banner(state.session.name()) {
                interaction = Some(HeaderInteraction::DownloadRequested(path));
            }
        }

        // Push the editor toggles to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut show_panel = state.layout.show_layout_panel();
            if ui.toggle_value(&mut show_panel, "📐 Layout").changed() {
                state.layout.set_show_layout_panel(show_panel);
            }

            let mut guides = state.layout.debug_guides();
            let guides_response = ui.checkbox(&mut guides, "Guides");
            if guides_response.changed() {
                interaction = Some(HeaderInteraction::DebugGuidesToggled(guides));
            }
            guides_response.on_hover_text("Outline the photo circle and mark the name anchor");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
