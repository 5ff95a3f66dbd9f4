//! Geometry helpers for cover-fit scaling and responsive preview layout.
//!
//! This module provides pure functions for:
//! - Scaling a photo so it fully covers the photo circle
//! - Fitting the template into the available display area
//! - Placing the input overlays on the scaled preview
//!
//! These functions are stateless and can be tested independently.

use crate::layout::BannerLayout;
use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Destination rectangle for a photo drawn in cover mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scales an image so it covers the square circumscribing the photo circle.
///
/// Wider images fit the height and overflow horizontally; taller (or square) images fit the
/// width and overflow vertically. The result is centred on the circle centre.
///
/// # Arguments
/// * `img_w`, `img_h` - Natural size of the photo
/// * `center_x`, `center_y` - Circle centre in template pixels
/// * `radius` - Circle radius in template pixels
pub fn cover_fit(img_w: u32, img_h: u32, center_x: f32, center_y: f32, radius: f32) -> DrawRect {
    let size = radius * 2.0;
    if img_w == 0 || img_h == 0 {
        return DrawRect {
            x: center_x - radius,
            y: center_y - radius,
            width: size,
            height: size,
        };
    }

    let aspect = img_w as f32 / img_h as f32;
    let (width, height) = if aspect > 1.0 {
        (size * aspect, size)
    } else {
        (size, size / aspect)
    };

    DrawRect {
        x: center_x - width / 2.0,
        y: center_y - height / 2.0,
        width,
        height,
    }
}

/// Source region of an image that `cover_fit` maps onto the circle's bounding square.
///
/// Returns `(x, y, width, height)` in source pixels. Everything outside this region lands
/// outside the square and can never show through the circle.
pub fn cover_crop(img_w: u32, img_h: u32) -> (u32, u32, u32, u32) {
    if img_w == 0 || img_h == 0 {
        return (0, 0, img_w, img_h);
    }

    // Unit circle at the origin: the square spans [-1, 1] on both axes
    let rect = cover_fit(img_w, img_h, 0.0, 0.0, 1.0);
    let width = ((2.0 * img_w as f32 / rect.width).round() as u32).clamp(1, img_w);
    let height = ((2.0 * img_h as f32 / rect.height).round() as u32).clamp(1, img_h);

    ((img_w - width) / 2, (img_h - height) / 2, width, height)
}

/// Space kept free around the preview for padding and the action row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayReserve {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for DisplayReserve {
    fn default() -> Self {
        Self {
            horizontal: 20.0,
            vertical: 100.0,
        }
    }
}

impl DisplayReserve {
    /// Area left for the preview inside a viewport of the given size.
    pub fn available(&self, viewport: Vec2) -> Vec2 {
        vec2(
            (viewport.x - self.horizontal).max(0.0),
            (viewport.y - self.vertical).max(0.0),
        )
    }
}

/// Computes the on-screen preview size, preserving the template aspect ratio.
///
/// Fills the available width first; if that makes the preview too tall, fits by height.
pub fn fit_display_size(template: Vec2, available: Vec2) -> Vec2 {
    if template.x <= 0.0 || template.y <= 0.0 || available.x <= 0.0 || available.y <= 0.0 {
        return Vec2::ZERO;
    }

    let aspect = template.x / template.y;
    let mut width = available.x;
    let mut height = available.x / aspect;

    if height > available.y {
        height = available.y;
        width = available.y * aspect;
    }

    vec2(width, height)
}

/// Overlay positions relative to the top-left corner of the displayed preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    /// Square around the photo circle
    pub photo: Rect,
    /// Centre of the name input
    pub name_center: Pos2,
    /// Width of the name input
    pub name_width: f32,
}

/// Minimum width of the name input overlay
const NAME_INPUT_MIN_WIDTH: f32 = 150.0;
/// Maximum width of the name input overlay before the minimum is applied
const NAME_INPUT_MAX_WIDTH: f32 = 250.0;
/// Share of the display width the name input may take
const NAME_INPUT_WIDTH_RATIO: f32 = 0.35;

/// Places the photo picker and name input over the scaled preview.
///
/// Returns `None` until both the display and template sizes are known.
pub fn overlay_placement(display: Vec2, template: Vec2, layout: &BannerLayout) -> Option<OverlayPlacement> {
    if display.x <= 0.0 || display.y <= 0.0 || template.x <= 0.0 || template.y <= 0.0 {
        return None;
    }

    let scale_x = display.x / template.x;
    let photo_center = pos2(display.x * layout.photo_x, display.y * layout.photo_y);
    let photo_radius = template.x * layout.photo_radius * scale_x;
    let photo = Rect::from_center_size(photo_center, Vec2::splat(photo_radius * 2.0));

    let base_width = (display.x * NAME_INPUT_WIDTH_RATIO).min(NAME_INPUT_MAX_WIDTH);
    let name_width = base_width.max(NAME_INPUT_MIN_WIDTH);

    Some(OverlayPlacement {
        photo,
        name_center: pos2(display.x * layout.name_x, display.y * layout.name_y),
        name_width,
    })
}

/// Maps a point on the displayed preview back to template pixels.
pub fn display_to_template(point: Pos2, display: Vec2, template: Vec2) -> Option<Pos2> {
    if display.x <= 0.0 || display.y <= 0.0 {
        return None;
    }
    Some(pos2(
        point.x * template.x / display.x,
        point.y * template.y / display.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_cover_fit_wide_image() {
        let rect = cover_fit(400, 200, 100.0, 100.0, 50.0);
        assert!(approx(rect.height, 100.0));
        assert!(approx(rect.width, 200.0));
        assert!(approx(rect.x, 0.0));
        assert!(approx(rect.y, 50.0));
    }

    #[test]
    fn test_cover_fit_tall_image() {
        let rect = cover_fit(200, 400, 100.0, 100.0, 50.0);
        assert!(approx(rect.width, 100.0));
        assert!(approx(rect.height, 200.0));
        assert!(approx(rect.x, 50.0));
        assert!(approx(rect.y, 0.0));
    }

    #[test]
    fn test_cover_fit_square_image_fills_square() {
        let rect = cover_fit(640, 640, 300.0, 200.0, 80.0);
        assert_eq!(
            rect,
            DrawRect {
                x: 220.0,
                y: 120.0,
                width: 160.0,
                height: 160.0
            }
        );
    }

    #[test]
    fn test_cover_crop_is_centred_square() {
        assert_eq!(cover_crop(640, 480), (80, 0, 480, 480));
        assert_eq!(cover_crop(300, 900), (0, 300, 300, 300));
        assert_eq!(cover_crop(256, 256), (0, 0, 256, 256));
        assert_eq!(cover_crop(4000, 1), (1999, 0, 1, 1));
        assert_eq!(cover_crop(0, 10), (0, 0, 0, 10));
    }

    #[test]
    fn test_cover_fit_always_covers_circle() {
        for (w, h) in [(1, 1000), (1000, 1), (333, 777), (1920, 1080)] {
            let rect = cover_fit(w, h, 0.0, 0.0, 10.0);
            assert!(rect.width >= 20.0 - 1e-3);
            assert!(rect.height >= 20.0 - 1e-3);
        }
    }

    #[test]
    fn test_fit_display_size_width_limited() {
        let size = fit_display_size(vec2(1000.0, 500.0), vec2(500.0, 1000.0));
        assert!(approx(size.x, 500.0));
        assert!(approx(size.y, 250.0));
    }

    #[test]
    fn test_fit_display_size_height_limited() {
        let size = fit_display_size(vec2(1080.0, 1920.0), vec2(1000.0, 800.0));
        assert!(approx(size.y, 800.0));
        assert!(approx(size.x, 450.0));
    }

    #[test]
    fn test_fit_display_size_degenerate() {
        assert_eq!(fit_display_size(Vec2::ZERO, vec2(100.0, 100.0)), Vec2::ZERO);
        assert_eq!(fit_display_size(vec2(100.0, 100.0), vec2(0.0, 100.0)), Vec2::ZERO);
    }

    #[test]
    fn test_display_reserve() {
        let available = DisplayReserve::default().available(vec2(1200.0, 900.0));
        assert_eq!(available, vec2(1180.0, 800.0));
        let tiny = DisplayReserve::default().available(vec2(10.0, 10.0));
        assert_eq!(tiny, Vec2::ZERO);
    }

    #[test]
    fn test_overlay_placement_scales_with_display() {
        let layout = BannerLayout::default();
        let overlay = overlay_placement(vec2(500.0, 1000.0), vec2(1000.0, 2000.0), &layout).unwrap();

        assert!(approx(overlay.photo.center().x, 250.0));
        assert!(approx(overlay.photo.center().y, 408.0));
        // 1000 * 0.141 * 0.5 = 70.5 radius
        assert!(approx(overlay.photo.width(), 141.0));
        assert!(approx(overlay.name_center.x, 250.0));
        assert!(approx(overlay.name_center.y, 547.0));
        // min(500 * 0.35, 250) = 175
        assert!(approx(overlay.name_width, 175.0));
    }

    #[test]
    fn test_name_input_width_bounds() {
        let layout = BannerLayout::default();
        let narrow = overlay_placement(vec2(200.0, 200.0), vec2(200.0, 200.0), &layout).unwrap();
        assert!(approx(narrow.name_width, 150.0));

        let wide = overlay_placement(vec2(2000.0, 1000.0), vec2(2000.0, 1000.0), &layout).unwrap();
        assert!(approx(wide.name_width, 250.0));
    }

    #[test]
    fn test_overlay_placement_needs_sizes() {
        let layout = BannerLayout::default();
        assert!(overlay_placement(Vec2::ZERO, vec2(10.0, 10.0), &layout).is_none());
        assert!(overlay_placement(vec2(10.0, 10.0), Vec2::ZERO, &layout).is_none());
    }

    #[test]
    fn test_display_to_template() {
        let p = display_to_template(pos2(50.0, 25.0), vec2(100.0, 50.0), vec2(1000.0, 500.0)).unwrap();
        assert!(approx(p.x, 500.0));
        assert!(approx(p.y, 250.0));
    }
}
