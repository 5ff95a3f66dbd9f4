//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like image loading, name edits, layout changes and
//! export, coordinating between the session, the compositor and the preview.

use crate::app::AppState;
use crate::io::{AsyncLoader, ImageSlot, LoadResult};
use rbanner::{save_png, BannerLayout, NameFont};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Starting background image loads and applying their results
/// - Keeping the session in sync with the name input
/// - Applying layout, font and guide changes to the compositor
/// - Writing the finished banner to disk
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a new template in the background.
    pub fn open_template(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.clear_error();
        loader.start_image_load(ImageSlot::Template, path, ctx);
    }

    /// Starts loading a new photo in the background.
    pub fn open_photo(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.clear_error();
        loader.start_image_load(ImageSlot::Photo, path, ctx);
    }

    /// Applies every finished background load to the session.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if at least one load completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        let mut completed = false;
        loop {
            match loader.check_completion() {
                LoadResult::Success { slot, image, path } => {
                    log::info!(
                        "Loaded {} {}x{} from {}",
                        slot.label(),
                        image.width(),
                        image.height(),
                        path.display()
                    );
                    match slot {
                        ImageSlot::Template => {
                            state.session.set_template(image);
                            state.files.set_template_path(Some(path));
                        }
                        ImageSlot::Photo => {
                            state.session.set_photo(image);
                            state.files.set_photo_path(Some(path));
                        }
                    }
                    completed = true;
                }
                LoadResult::Error { slot, path, message } => {
                    state.report_error(format!("Error loading {} {}: {}", slot.label(), path.display(), message));
                    completed = true;
                }
                LoadResult::None => break,
            }
        }
        completed
    }

    /// Copies the name input into the session.
    pub fn set_name(state: &mut AppState, name: String) {
        state.session.set_name(name);
    }

    /// Removes the current photo.
    pub fn clear_photo(state: &mut AppState) {
        state.session.clear_photo();
        state.files.set_photo_path(None);
    }

    /// Validates and applies a new layout, re-rendering on success.
    pub fn update_layout(state: &mut AppState, layout: BannerLayout) {
        match state.compositor.set_layout(layout.clone()) {
            Ok(()) => {
                state.layout.set_banner_layout(layout);
                state.session.invalidate();
            }
            Err(e) => state.report_error(format!("Invalid layout: {:#}", e)),
        }
    }

    /// Loads a layout JSON file and applies it.
    pub fn load_layout_file(state: &mut AppState, path: PathBuf) {
        match BannerLayout::from_json_file(&path) {
            Ok(layout) => {
                log::info!("Loaded layout from {}", path.display());
                Self::update_layout(state, layout);
            }
            Err(e) => state.report_error(format!("{:#}", e)),
        }
    }

    /// Writes the active layout to a JSON file.
    pub fn save_layout_file(state: &mut AppState, path: PathBuf) {
        match state.layout.banner_layout().to_json_file(&path) {
            Ok(()) => log::info!("Saved layout to {}", path.display()),
            Err(e) => state.report_error(format!("{:#}", e)),
        }
    }

    /// Switches to a custom font file; the current font stays on failure.
    pub fn open_font(state: &mut AppState, path: PathBuf) {
        match NameFont::from_file(&path) {
            Ok(font) => {
                log::info!("Using font {}", path.display());
                state.compositor.set_font(font);
                state.files.set_font_path(Some(path));
                state.session.invalidate();
                state.clear_error();
            }
            Err(e) => state.report_error(format!("{:#}", e)),
        }
    }

    /// Switches back to the built-in font.
    pub fn reset_font(state: &mut AppState) {
        match NameFont::fallback() {
            Ok(font) => {
                state.compositor.set_font(font);
                state.files.set_font_path(None);
                state.session.invalidate();
            }
            Err(e) => state.report_error(format!("{:#}", e)),
        }
    }

    /// Turns the positioning guides on or off.
    pub fn set_debug_guides(state: &mut AppState, enabled: bool) {
        state.layout.set_debug_guides(enabled);
        state.compositor.set_debug_guides(enabled);
        state.session.invalidate();
    }

    /// Re-renders the preview if anything changed since the last frame.
    pub fn refresh_preview(state: &mut AppState, ctx: &egui::Context) {
        state.preview.refresh(ctx, &state.session, &state.compositor);
    }

    /// Writes the full-resolution banner as PNG.
    ///
    /// Guides are never part of the downloaded file. The preview composite is reused when it
    /// is current and drawn without guides; otherwise the banner is rendered again.
    pub fn export_banner(state: &mut AppState, path: PathBuf) {
        if !state.has_template() {
            state.report_error("Nothing to download: no template loaded".to_string());
            return;
        }

        let reuse_preview = !state.compositor.debug_guides() && !state.preview.is_stale(&state.session);
        let result = match state.preview.rendered().filter(|_| reuse_preview) {
            Some(banner) => save_png(banner, &path),
            None => {
                let mut compositor = state.compositor.clone();
                compositor.set_debug_guides(false);
                match state.session.render(&compositor) {
                    Some(banner) => save_png(&banner, &path),
                    None => Err(anyhow::anyhow!("Nothing to download: no template loaded")),
                }
            }
        };

        match result {
            Ok(()) => state.clear_error(),
            Err(e) => state.report_error(format!("{:#}", e)),
        }
    }
}
