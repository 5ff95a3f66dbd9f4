//! Rendered preview and its GPU texture.
//!
//! This module caches the last full-resolution composite so the UI only re-renders when
//! the session changes, and keeps the texture egui draws it with.

use image::RgbaImage;
use rbanner::{BannerSession, Compositor};

const TEXTURE_NAME: &str = "banner-preview";

/// State related to the rendered banner preview.
///
/// Responsibilities:
/// - Holding the last composite, which export reuses while it is current
/// - Tracking which session revision it was rendered from
/// - Owning the egui texture handle
#[derive(Default)]
pub struct PreviewState {
    /// Last full-resolution composite
    rendered: Option<RgbaImage>,
    /// Session revision `rendered` corresponds to
    rendered_revision: Option<u64>,
    /// Texture uploaded from `rendered`
    texture: Option<egui::TextureHandle>,
}

impl std::fmt::Debug for PreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewState")
            .field("rendered_revision", &self.rendered_revision)
            .field("has_texture", &self.texture.is_some())
            .finish_non_exhaustive()
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the session changed since the last render.
    pub fn is_stale(&self, session: &BannerSession) -> bool {
        self.rendered_revision != Some(session.revision())
    }

    /// Re-renders and re-uploads the preview when the session changed.
    ///
    /// Returns true if a new frame was rendered.
    pub fn refresh(&mut self, ctx: &egui::Context, session: &BannerSession, compositor: &Compositor) -> bool {
        if !self.is_stale(session) {
            return false;
        }
        self.rendered_revision = Some(session.revision());

        let Some(rendered) = session.render(compositor) else {
            self.rendered = None;
            self.texture = None;
            return false;
        };

        let size = [rendered.width() as usize, rendered.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rendered.as_raw());
        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(TEXTURE_NAME, color_image, egui::TextureOptions::LINEAR));
            }
        }

        self.rendered = Some(rendered);
        true
    }

    /// Forces the next `refresh` to render.
    pub fn invalidate(&mut self) {
        self.rendered_revision = None;
    }

    pub fn rendered(&self) -> Option<&RgbaImage> {
        self.rendered.as_ref()
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}
