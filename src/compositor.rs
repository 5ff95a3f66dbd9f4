//! Banner compositing: template background, circular photo, centred name.

use crate::font::NameFont;
use crate::geometry::cover_crop;
use crate::layout::{BannerLayout, PhotoSlot};
use crate::raster::{blend_pixel, circle_coverage, fill_rect, stroke_circle};
use anyhow::Result;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

const GUIDE_CIRCLE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GUIDE_CROSS_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GUIDE_LINE_WIDTH: f32 = 2.0;
const GUIDE_CROSS_HALF_LENGTH: f32 = 20.0;

/// Renders personalized banners for a fixed layout and font.
#[derive(Debug, Clone)]
pub struct Compositor {
    layout: BannerLayout,
    font: NameFont,
    text_color: Rgba<u8>,
    debug_guides: bool,
}

impl Compositor {
    /// Creates a compositor, validating the layout up front.
    pub fn new(layout: BannerLayout, font: NameFont) -> Result<Self> {
        layout.validate()?;
        let text_color = layout.text_rgba()?;
        Ok(Self {
            layout,
            font,
            text_color,
            debug_guides: false,
        })
    }

    /// Enables red/blue positioning guides over the photo circle and name anchor.
    pub fn with_debug_guides(mut self, enabled: bool) -> Self {
        self.debug_guides = enabled;
        self
    }

    pub fn layout(&self) -> &BannerLayout {
        &self.layout
    }

    pub fn font(&self) -> &NameFont {
        &self.font
    }

    pub fn debug_guides(&self) -> bool {
        self.debug_guides
    }

    /// Replaces the layout; the previous layout is kept if the new one is invalid.
    pub fn set_layout(&mut self, layout: BannerLayout) -> Result<()> {
        layout.validate()?;
        self.text_color = layout.text_rgba()?;
        self.layout = layout;
        Ok(())
    }

    pub fn set_font(&mut self, font: NameFont) {
        self.font = font;
    }

    pub fn set_debug_guides(&mut self, enabled: bool) {
        self.debug_guides = enabled;
    }

    /// Side length in pixels of the square the photo is resampled to for a template size.
    pub fn photo_diameter(&self, template_w: u32, template_h: u32) -> u32 {
        let radius = self.layout.resolve(template_w, template_h).photo.radius;
        (radius * 2.0).ceil().max(1.0) as u32
    }

    /// Composes the banner at the template's natural resolution.
    ///
    /// The photo is drawn only when present and the name only when non-empty.
    pub fn compose(&self, template: &RgbaImage, photo: Option<&DynamicImage>, name: &str) -> RgbaImage {
        let diameter = self.photo_diameter(template.width(), template.height());
        let scaled = photo.and_then(|photo| scale_photo(photo, diameter));
        self.compose_scaled(template, scaled.as_ref(), name)
    }

    /// Same as `compose`, with the photo already passed through `scale_photo`.
    ///
    /// `scaled_photo` is stretched over the circle's bounding square; callers keep it at
    /// `photo_diameter` so no resampling happens here.
    pub fn compose_scaled(&self, template: &RgbaImage, scaled_photo: Option<&RgbaImage>, name: &str) -> RgbaImage {
        let mut canvas = template.clone();
        let placement = self.layout.resolve(template.width(), template.height());

        if let Some(scaled) = scaled_photo {
            draw_photo_in_circle(&mut canvas, scaled, &placement.photo);
            if self.debug_guides {
                stroke_circle(
                    &mut canvas,
                    placement.photo.center_x,
                    placement.photo.center_y,
                    placement.photo.radius,
                    GUIDE_LINE_WIDTH,
                    GUIDE_CIRCLE_COLOR,
                );
            }
        }

        if !name.is_empty() {
            let anchor = placement.name;
            self.font
                .draw_centered(&mut canvas, name, anchor.x, anchor.y, anchor.font_px, self.text_color);
            if self.debug_guides {
                draw_crosshair(&mut canvas, anchor.x, anchor.y);
            }
        }

        log::debug!(
            "Composed {}x{} banner (photo: {}, name: {} chars)",
            canvas.width(),
            canvas.height(),
            scaled_photo.is_some(),
            name.chars().count()
        );
        canvas
    }
}

/// Cover-fits `photo` into a `diameter` x `diameter` square.
///
/// Only the centred region that can land in the circle is resampled, so the cost depends on
/// the circle size and not on the photo's aspect ratio. Returns `None` for empty input.
pub fn scale_photo(photo: &DynamicImage, diameter: u32) -> Option<RgbaImage> {
    let (img_w, img_h) = photo.dimensions();
    if img_w == 0 || img_h == 0 || diameter == 0 {
        return None;
    }

    let (x, y, width, height) = cover_crop(img_w, img_h);
    let crop = photo.crop_imm(x, y, width, height).to_rgba8();
    Some(imageops::resize(&crop, diameter, diameter, FilterType::Triangle))
}

/// Blends a scaled photo into the circle, anti-aliasing the edge.
fn draw_photo_in_circle(canvas: &mut RgbaImage, scaled: &RgbaImage, slot: &PhotoSlot) {
    if slot.radius <= 0.0 || scaled.width() == 0 || scaled.height() == 0 {
        return;
    }

    let side = slot.radius * 2.0;
    let left = slot.center_x - slot.radius;
    let top = slot.center_y - slot.radius;
    let scale_x = scaled.width() as f32 / side;
    let scale_y = scaled.height() as f32 / side;
    let max_sx = scaled.width() as i64 - 1;
    let max_sy = scaled.height() as i64 - 1;

    let reach = slot.radius + 1.0;
    let x0 = ((slot.center_x - reach).floor() as i64).max(0);
    let y0 = ((slot.center_y - reach).floor() as i64).max(0);
    let x1 = ((slot.center_x + reach).ceil() as i64).min(canvas.width() as i64 - 1);
    let y1 = ((slot.center_y + reach).ceil() as i64).min(canvas.height() as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - slot.center_x;
            let dy = py - slot.center_y;
            let coverage = circle_coverage((dx * dx + dy * dy).sqrt(), slot.radius);
            if coverage <= 0.0 {
                continue;
            }

            let sx = (((px - left) * scale_x).floor() as i64).clamp(0, max_sx) as u32;
            let sy = (((py - top) * scale_y).floor() as i64).clamp(0, max_sy) as u32;
            blend_pixel(canvas, x, y, *scaled.get_pixel(sx, sy), coverage);
        }
    }
}

fn draw_crosshair(canvas: &mut RgbaImage, x: f32, y: f32) {
    let half_line = GUIDE_LINE_WIDTH / 2.0;
    fill_rect(
        canvas,
        x - GUIDE_CROSS_HALF_LENGTH,
        y - half_line,
        GUIDE_CROSS_HALF_LENGTH * 2.0,
        GUIDE_LINE_WIDTH,
        GUIDE_CROSS_COLOR,
    );
    fill_rect(
        canvas,
        x - half_line,
        y - GUIDE_CROSS_HALF_LENGTH,
        GUIDE_LINE_WIDTH,
        GUIDE_CROSS_HALF_LENGTH * 2.0,
        GUIDE_CROSS_COLOR,
    );
}
