//! Pixel-level drawing primitives shared by the compositor and the text renderer.

use image::{Rgba, RgbaImage};

/// Blends `src` over the pixel at (`x`, `y`) with the given coverage (0.0..=1.0).
///
/// Out-of-bounds coordinates are ignored. Uses straight (non-premultiplied) "source over"
/// compositing so transparent templates keep their alpha channel.
pub fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, src: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }

    let src_a = (src.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }

    for c in 0..3 {
        let s = src.0[c] as f32;
        let d = dst.0[c] as f32;
        let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Coverage of the pixel whose centre is `dist` away from a circle edge of radius `radius`.
///
/// 1.0 well inside, 0.0 well outside, linear across a one pixel band.
pub fn circle_coverage(dist: f32, radius: f32) -> f32 {
    (radius - dist + 0.5).clamp(0.0, 1.0)
}

/// Strokes a circle outline of the given line width.
pub fn stroke_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, line_width: f32, color: Rgba<u8>) {
    let half = line_width / 2.0;
    let reach = radius + half + 1.0;
    let (x0, x1) = ((cx - reach).floor() as i64, (cx + reach).ceil() as i64);
    let (y0, y1) = ((cy - reach).floor() as i64, (cy + reach).ceil() as i64);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (half - (dist - radius).abs() + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(canvas, x, y, color, coverage);
            }
        }
    }
}

/// Fills an axis-aligned rectangle given in (possibly fractional) pixel coordinates.
pub fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
    let (x0, x1) = (x.round() as i64, (x + width).round() as i64);
    let (y0, y1) = (y.round() as i64, (y + height).round() as i64);
    for py in y0..y1 {
        for px in x0..x1 {
            blend_pixel(canvas, px, py, color, 1.0);
        }
    }
}
