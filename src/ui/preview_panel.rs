//! Preview panel UI rendering
//!
//! Shows the composed banner scaled to the window, with the photo picker and name input
//! laid over the exact spots where the photo and name are drawn.

use crate::app::AppState;
use crate::io::{AsyncLoader, ImageSlot};
use crate::ui::dialogs;
use egui::{vec2, Color32, Rect, Stroke, Vec2};
use rbanner::{fit_display_size, overlay_placement, DisplayReserve};
use std::path::PathBuf;

/// Smallest height of the name input overlay in points
const MIN_NAME_INPUT_HEIGHT: f32 = 20.0;

/// Result of preview panel interactions that need to be handled by the application.
pub enum PreviewPanelInteraction {
    /// The photo circle was clicked and a file chosen
    PhotoPicked(PathBuf),
    /// The name input changed
    NameEdited(String),
}

/// Renders the preview panel.
pub fn render_preview_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
) -> Option<PreviewPanelInteraction> {
    if loader.is_loading_slot(ImageSlot::Template) {
        render_loading_indicator(ui, "Loading template...");
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return None;
    }

    let (Some((template_w, template_h)), Some(texture)) = (state.session.template_size(), state.preview.texture())
    else {
        render_loading_indicator(ui, "Open a template to start");
        return None;
    };
    let texture_id = texture.id();
    let template = vec2(template_w as f32, template_h as f32);

    // Fit against the window like a page would, then never overflow the panel itself
    let panel = ui.available_rect_before_wrap();
    let window = ctx.content_rect().size();
    let mut display = fit_display_size(template, DisplayReserve::default().available(window));
    if display.x > panel.width() || display.y > panel.height() {
        display = fit_display_size(template, panel.size());
    }
    if display == Vec2::ZERO {
        return None;
    }

    let image_rect = Rect::from_center_size(panel.center(), display);
    ui.painter().image(
        texture_id,
        image_rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );

    let overlay = overlay_placement(display, template, state.layout.banner_layout())?;

    let mut interaction = None;

    // Photo picker over the circle
    let photo_rect = overlay.photo.translate(image_rect.min.to_vec2());
    let photo_response = ui.interact(photo_rect, ui.id().with("photo_overlay"), egui::Sense::click());
    let radius = photo_rect.width() / 2.0;
    let pointer_in_circle = photo_response
        .hover_pos()
        .is_some_and(|pos| pos.distance(photo_rect.center()) <= radius);

    if state.session.photo().is_none() {
        if loader.is_loading_slot(ImageSlot::Photo) {
            ui.painter().text(
                photo_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Loading...",
                egui::FontId::proportional(16.0),
                Color32::WHITE,
            );
        } else {
            ui.painter().circle_filled(photo_rect.center(), radius, Color32::from_black_alpha(60));
            ui.painter().text(
                photo_rect.center(),
                egui::Align2::CENTER_CENTER,
                "📷 Choose photo",
                egui::FontId::proportional(16.0),
                Color32::WHITE,
            );
        }
    }

    if pointer_in_circle {
        ui.painter()
            .circle_stroke(photo_rect.center(), radius, Stroke::new(2.0, Color32::from_white_alpha(180)));
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if photo_response.clicked() && pointer_in_circle {
        let directory = state.files.dialog_directory();
        if let Some(path) = dialogs::pick_image("Choose Photo", directory.as_deref()) {
            interaction = Some(PreviewPanelInteraction::PhotoPicked(path));
        }
    }

    // Name input centred on the name anchor and as tall as the rendered line. The typed
    // text itself is transparent: the banner underneath already shows the name.
    let anchor = state.layout.banner_layout().resolve(template_w, template_h).name;
    let (line_top, line_bottom) = state.compositor.font().line_extent(anchor.y, anchor.font_px);
    let name_height = ((line_bottom - line_top) * display.y / template.y).max(MIN_NAME_INPUT_HEIGHT);
    let name_rect = Rect::from_center_size(
        overlay.name_center + image_rect.min.to_vec2(),
        vec2(overlay.name_width, name_height),
    );
    let name_edit = egui::TextEdit::singleline(state.files.name_buffer_mut())
        .frame(false)
        .text_color(Color32::TRANSPARENT)
        .hint_text("Type your name")
        .horizontal_align(egui::Align::Center)
        .desired_width(overlay.name_width);
    let name_response = ui.put(name_rect, name_edit);

    if name_response.changed() {
        interaction = Some(PreviewPanelInteraction::NameEdited(state.files.name_buffer().to_string()));
    }

    interaction
}

fn render_loading_indicator(ui: &mut egui::Ui, message: &str) {
    let canvas_rect = ui.available_rect_before_wrap();
    let color = ui.visuals().weak_text_color();

    ui.painter().text(
        canvas_rect.center(),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(32.0),
        color,
    );
}
