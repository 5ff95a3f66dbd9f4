//! Name text rendering on top of `rusttype`.
//!
//! Font sizes follow canvas/CSS semantics: `font_px` is the em size, not the
//! ascent-to-descent height rusttype scales by.

use crate::raster::blend_pixel;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use once_cell::sync::Lazy;
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::fs;
use std::path::Path;

/// Proportional font bundled with egui, used when no font file is configured.
static FALLBACK_FONT: Lazy<Option<Font<'static>>> = Lazy::new(|| {
    let definitions = egui::FontDefinitions::default();
    let data = definitions
        .font_data
        .get("Ubuntu-Light")
        .or_else(|| definitions.font_data.values().next())?;
    Font::try_from_vec(data.font.to_vec())
});

/// A font used to draw the name onto the banner.
#[derive(Clone)]
pub struct NameFont {
    font: Font<'static>,
}

impl std::fmt::Debug for NameFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameFont")
            .field("glyph_count", &self.font.glyph_count())
            .finish_non_exhaustive()
    }
}

impl NameFont {
    /// Parses a TrueType/OpenType font from raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(data).context("Invalid font data")?;
        Ok(Self { font })
    }

    /// Loads a TrueType/OpenType font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        Self::from_bytes(data).with_context(|| format!("Failed to load font: {}", path.display()))
    }

    /// Returns the bundled fallback font.
    pub fn fallback() -> Result<Self> {
        let font = FALLBACK_FONT
            .clone()
            .context("Bundled fallback font is unavailable")?;
        Ok(Self { font })
    }

    /// Loads `path` if given, otherwise the fallback font.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::fallback(),
        }
    }

    /// Converts an em size in pixels into the rusttype scale.
    fn scale_for_em(&self, font_px: f32) -> Scale {
        let metrics = self.font.v_metrics_unscaled();
        let units_per_em = self.font.units_per_em().max(1) as f32;
        let height = metrics.ascent - metrics.descent;
        if height <= 0.0 {
            return Scale::uniform(font_px);
        }
        Scale::uniform(font_px * height / units_per_em)
    }

    fn layout_line(&self, text: &str, scale: Scale, x: f32, baseline: f32) -> Vec<PositionedGlyph<'static>> {
        self.font.layout(text, scale, point(x, baseline)).collect()
    }

    /// Advance width of `text` at the given em size.
    pub fn measure(&self, text: &str, font_px: f32) -> f32 {
        let scale = self.scale_for_em(font_px);
        let glyphs = self.layout_line(text, scale, 0.0, 0.0);
        glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Draws `text` centred on (`x`, `y`), both horizontally and on the middle of the em box.
    ///
    /// Glyph pixels outside the canvas are clipped.
    pub fn draw_centered(&self, canvas: &mut RgbaImage, text: &str, x: f32, y: f32, font_px: f32, color: Rgba<u8>) {
        if text.is_empty() {
            return;
        }

        let scale = self.scale_for_em(font_px);
        let v_metrics = self.font.v_metrics(scale);
        let width = self.measure(text, font_px);
        let start_x = x - width / 2.0;
        let baseline = y + (v_metrics.ascent + v_metrics.descent) / 2.0;

        for glyph in self.layout_line(text, scale, start_x, baseline) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = gx as i64 + bb.min.x as i64;
                    let py = gy as i64 + bb.min.y as i64;
                    blend_pixel(canvas, px, py, color, v);
                });
            }
        }
    }

    /// Vertical extent (top, bottom) of a line drawn by `draw_centered` at `y`.
    pub fn line_extent(&self, y: f32, font_px: f32) -> (f32, f32) {
        let v_metrics = self.font.v_metrics(self.scale_for_em(font_px));
        let baseline = y + (v_metrics.ascent + v_metrics.descent) / 2.0;
        (baseline - v_metrics.ascent, baseline - v_metrics.descent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_font_loads() {
        assert!(NameFont::fallback().is_ok());
    }

    #[test]
    fn test_invalid_font_bytes() {
        assert!(NameFont::from_bytes(vec![0, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_measure_grows_with_text_and_size() {
        let font = NameFont::fallback().unwrap();
        assert_eq!(font.measure("", 30.0), 0.0);

        let short = font.measure("Ann", 30.0);
        let long = font.measure("Annabelle", 30.0);
        assert!(short > 0.0);
        assert!(long > short);

        let bigger = font.measure("Ann", 60.0);
        assert!((bigger - short * 2.0).abs() < 1.0);
    }

    #[test]
    fn test_draw_centered_is_symmetric() {
        let font = NameFont::fallback().unwrap();
        let mut canvas = RgbaImage::from_pixel(200, 80, Rgba([0, 0, 0, 255]));
        font.draw_centered(&mut canvas, "HOH", 100.0, 40.0, 32.0, Rgba([255, 255, 255, 255]));

        let lit: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] > 128)
            .map(|(x, _, _)| x)
            .collect();
        assert!(!lit.is_empty());

        let min_x = *lit.iter().min().unwrap() as f32;
        let max_x = *lit.iter().max().unwrap() as f32;
        let center = (min_x + max_x) / 2.0;
        assert!((center - 100.0).abs() < 4.0, "text centre was {}", center);
    }

    #[test]
    fn test_line_extent_straddles_anchor() {
        let font = NameFont::fallback().unwrap();
        let (top, bottom) = font.line_extent(50.0, 40.0);
        assert!(top < 50.0 && bottom > 50.0);
        // Middle baseline: the line is centred on the anchor
        assert!(((top + bottom) / 2.0 - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_line_extent_scales_with_font_size() {
        let font = NameFont::fallback().unwrap();
        let (top, bottom) = font.line_extent(0.0, 20.0);
        let (big_top, big_bottom) = font.line_extent(0.0, 40.0);
        assert!(((big_bottom - big_top) - 2.0 * (bottom - top)).abs() < 1e-2);
    }

    #[test]
    fn test_drawn_glyphs_stay_within_line_extent() {
        let font = NameFont::fallback().unwrap();
        let mut canvas = RgbaImage::from_pixel(240, 120, Rgba([0, 0, 0, 255]));
        font.draw_centered(&mut canvas, "Hgjy", 120.0, 60.0, 36.0, Rgba([255, 255, 255, 255]));
        let (top, bottom) = font.line_extent(60.0, 36.0);

        for (_, y, p) in canvas.enumerate_pixels() {
            if p.0[0] > 0 {
                assert!(y as f32 >= top.floor() - 1.0 && y as f32 <= bottom.ceil() + 1.0, "row {}", y);
            }
        }
    }

    #[test]
    fn test_draw_clips_outside_canvas() {
        let font = NameFont::fallback().unwrap();
        let mut canvas = RgbaImage::new(10, 10);
        font.draw_centered(&mut canvas, "Wide name", 0.0, 0.0, 40.0, Rgba([255, 255, 255, 255]));
    }
}
