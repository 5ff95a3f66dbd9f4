//! In-memory state of a single banner editing session.

use crate::compositor::{scale_photo, Compositor};
use image::{DynamicImage, RgbaImage};
use std::cell::RefCell;

/// The photo resampled for the current circle size.
#[derive(Debug)]
struct ScaledPhoto {
    diameter: u32,
    image: RgbaImage,
}

/// The template, photo and name the user has provided so far.
///
/// Nothing here outlives the process. `revision` increments on every mutation so callers can
/// cheaply tell whether a re-render is needed. The resampled photo is cached until the photo
/// or the circle size changes, so name edits only redraw.
#[derive(Debug, Default)]
pub struct BannerSession {
    template: Option<RgbaImage>,
    photo: Option<DynamicImage>,
    name: String,
    revision: u64,
    scaled_photo: RefCell<Option<ScaledPhoto>>,
}

impl BannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replaces the background template.
    pub fn set_template(&mut self, template: DynamicImage) {
        self.template = Some(template.to_rgba8());
        self.bump();
    }

    /// Replaces the user photo.
    pub fn set_photo(&mut self, photo: DynamicImage) {
        self.photo = Some(photo);
        *self.scaled_photo.get_mut() = None;
        self.bump();
    }

    pub fn clear_photo(&mut self) {
        if self.photo.take().is_some() {
            *self.scaled_photo.get_mut() = None;
            self.bump();
        }
    }

    /// Updates the name; unchanged names do not bump the revision.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name != self.name {
            self.name = name;
            self.bump();
        }
    }

    /// Marks the session as changed without touching its contents (e.g. after a layout edit).
    pub fn invalidate(&mut self) {
        self.bump();
    }

    pub fn template(&self) -> Option<&RgbaImage> {
        self.template.as_ref()
    }

    pub fn photo(&self) -> Option<&DynamicImage> {
        self.photo.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Natural size of the loaded template.
    pub fn template_size(&self) -> Option<(u32, u32)> {
        self.template
            .as_ref()
            .filter(|t| t.width() > 0 && t.height() > 0)
            .map(|t| (t.width(), t.height()))
    }

    /// Renders the banner, or `None` while no usable template is loaded.
    pub fn render(&self, compositor: &Compositor) -> Option<RgbaImage> {
        let (width, height) = self.template_size()?;
        let template = self.template.as_ref()?;
        self.refresh_scaled_photo(compositor.photo_diameter(width, height));

        let cache = self.scaled_photo.borrow();
        let scaled = cache.as_ref().map(|c| &c.image);
        Some(compositor.compose_scaled(template, scaled, &self.name))
    }

    fn refresh_scaled_photo(&self, diameter: u32) {
        let Some(photo) = &self.photo else {
            return;
        };

        let mut cache = self.scaled_photo.borrow_mut();
        if cache.as_ref().is_some_and(|c| c.diameter == diameter) {
            return;
        }

        log::debug!("Resampling {}x{} photo to {}px", photo.width(), photo.height(), diameter);
        *cache = scale_photo(photo, diameter).map(|image| ScaledPhoto { diameter, image });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::NameFont;
    use crate::layout::BannerLayout;
    use image::Rgba;

    fn compositor() -> Compositor {
        Compositor::new(BannerLayout::default(), NameFont::fallback().unwrap()).unwrap()
    }

    #[test]
    fn test_render_requires_template() {
        let mut session = BannerSession::new();
        session.set_name("Meera");
        assert!(session.render(&compositor()).is_none());

        session.set_template(DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 200, Rgba([5, 5, 5, 255]))));
        let out = session.render(&compositor()).unwrap();
        assert_eq!((out.width(), out.height()), (300, 200));
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut session = BannerSession::new();
        let start = session.revision();

        session.set_name("A");
        let after_name = session.revision();
        assert!(after_name > start);

        session.set_name("A");
        assert_eq!(session.revision(), after_name);

        session.clear_photo();
        assert_eq!(session.revision(), after_name);

        session.set_photo(DynamicImage::new_rgba8(2, 2));
        assert!(session.revision() > after_name);
        assert!(session.photo().is_some());

        session.clear_photo();
        assert!(session.photo().is_none());
    }

    #[test]
    fn test_scaled_photo_survives_name_edits() {
        let compositor = compositor();
        let mut session = BannerSession::new();
        session.set_template(DynamicImage::ImageRgba8(RgbaImage::from_pixel(500, 500, Rgba([5, 5, 5, 255]))));
        session.set_photo(DynamicImage::ImageRgba8(RgbaImage::from_pixel(3000, 2000, Rgba([200, 0, 0, 255]))));

        let cached_buffer = |session: &BannerSession| {
            session.scaled_photo.borrow().as_ref().map(|c| (c.diameter, c.image.as_raw().as_ptr()))
        };

        session.render(&compositor).unwrap();
        let first = cached_buffer(&session);
        assert_eq!(first.map(|(d, _)| d), Some(compositor.photo_diameter(500, 500)));

        for name in ["S", "Sa", "Sam"] {
            session.set_name(name);
            session.render(&compositor).unwrap();
            assert_eq!(cached_buffer(&session), first);
        }

        // A bigger circle resamples
        let mut layout = BannerLayout::default();
        layout.photo_radius = 0.25;
        let bigger = Compositor::new(layout, NameFont::fallback().unwrap()).unwrap();
        session.render(&bigger).unwrap();
        assert_eq!(cached_buffer(&session).map(|(d, _)| d), Some(250));

        session.clear_photo();
        assert!(cached_buffer(&session).is_none());
        let out = session.render(&bigger).unwrap();
        assert_eq!(*out.get_pixel(250, 204), Rgba([5, 5, 5, 255]));
    }

    #[test]
    fn test_empty_template_is_not_rendered() {
        let mut session = BannerSession::new();
        session.set_template(DynamicImage::new_rgba8(0, 0));
        assert_eq!(session.template_size(), None);
        assert!(session.render(&compositor()).is_none());
    }
}
