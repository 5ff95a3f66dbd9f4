//! Status bar UI rendering
//!
//! Handles the bottom status bar describing the loaded template, photo and name.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_dimensions, format_file_name, format_px};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Background loader, for the loading spinner
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        if loader.is_loading() {
            ui.spinner();
            ui.label(RichText::new("Loading...").strong());
            ui.label(RichText::new("|").strong());
        }

        let Some((width, height)) = state.session.template_size() else {
            ui.label(RichText::new("No template loaded").strong());
            return;
        };

        let template_name = state
            .files
            .template_path()
            .map(format_file_name)
            .unwrap_or_else(|| "template".to_string());
        ui.label(RichText::new(format!("Template: {} ({})", template_name, format_dimensions(width, height))).strong());

        ui.label(RichText::new("|").strong());
        match state.session.photo() {
            Some(photo) => {
                let photo_name = state
                    .files
                    .photo_path()
                    .map(format_file_name)
                    .unwrap_or_else(|| "photo".to_string());
                ui.label(RichText::new(format!(
                    "Photo: {} ({})",
                    photo_name,
                    format_dimensions(photo.width(), photo.height())
                )).strong());
            }
            None => {
                ui.label(RichText::new("No photo").strong());
            }
        }

        ui.label(RichText::new("|").strong());
        let anchor = state.layout.banner_layout().resolve(width, height).name;
        ui.label(RichText::new(format!(
            "Name: {} chars | Font: {} {}",
            state.session.name().chars().count(),
            state.files.font_label(),
            format_px(anchor.font_px)
        )).strong());

        if state.layout.is_customized() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new("Custom layout").strong().color(egui::Color32::YELLOW));
        }
    });
}
