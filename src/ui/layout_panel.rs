//! Layout panel UI rendering
//!
//! Sliders for the photo circle and name anchor, expressed as percentages of the template,
//! plus layout file import/export.

use crate::app::AppState;
use crate::ui::dialogs;
use rbanner::BannerLayout;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result of layout panel interactions
pub enum LayoutPanelInteraction {
    /// A slider or the reset button produced a new layout
    LayoutEdited(BannerLayout),
    /// User chose a layout file to load
    LoadLayoutRequested(PathBuf),
    /// User chose where to save the layout
    SaveLayoutRequested(PathBuf),
}

/// Adds a percentage slider bound to a 0..1 fraction. Returns true if it changed.
fn percent_slider(ui: &mut egui::Ui, label: &str, fraction: &mut f32, range: RangeInclusive<f32>) -> bool {
    let mut percent = *fraction * 100.0;
    let changed = ui
        .add(egui::Slider::new(&mut percent, range).text(label).suffix("%").max_decimals(1))
        .changed();
    if changed {
        *fraction = percent / 100.0;
    }
    changed
}

/// Renders the layout editor.
pub fn render_layout_panel(ui: &mut egui::Ui, state: &AppState) -> Option<LayoutPanelInteraction> {
    let mut interaction = None;
    let mut layout = state.layout.banner_layout().clone();
    let mut edited = false;

    ui.heading("Photo");
    edited |= percent_slider(ui, "X", &mut layout.photo_x, 0.0..=100.0);
    edited |= percent_slider(ui, "Y", &mut layout.photo_y, 0.0..=100.0);
    edited |= percent_slider(ui, "Size", &mut layout.photo_radius, 1.0..=50.0);

    ui.separator();
    ui.heading("Name");
    edited |= percent_slider(ui, "X", &mut layout.name_x, 0.0..=100.0);
    edited |= percent_slider(ui, "Y", &mut layout.name_y, 0.0..=100.0);
    edited |= percent_slider(ui, "Font", &mut layout.font_size_ratio, 0.5..=15.0);

    let mut color = layout
        .text_rgba()
        .map(|c| egui::Color32::from_rgba_unmultiplied(c.0[0], c.0[1], c.0[2], c.0[3]))
        .unwrap_or(egui::Color32::WHITE);
    ui.horizontal(|ui| {
        ui.label("Color");
        if ui.color_edit_button_srgba(&mut color).changed() {
            let [r, g, b, a] = color.to_srgba_unmultiplied();
            layout.text_color = format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a);
            edited = true;
        }
    });

    if edited {
        interaction = Some(LayoutPanelInteraction::LayoutEdited(layout));
    }

    ui.separator();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.layout.is_customized(), egui::Button::new("↺ Reset"))
            .clicked()
        {
            interaction = Some(LayoutPanelInteraction::LayoutEdited(BannerLayout::default()));
        }

        let directory = state.files.dialog_directory();
        if ui.button("Load…").clicked() {
            if let Some(path) = dialogs::pick_layout(directory.as_deref()) {
                interaction = Some(LayoutPanelInteraction::LoadLayoutRequested(path));
            }
        }
        if ui.button("Save…").clicked() {
            if let Some(path) = dialogs::save_layout(directory.as_deref()) {
                interaction = Some(LayoutPanelInteraction::SaveLayoutRequested(path));
            }
        }
    });

    interaction
}
