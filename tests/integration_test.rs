use rbanner::{
    decode_image, download_file_name, encode_png, open_image, save_png, BannerLayout, BannerSession,
    Compositor, NameFont,
};
use anyhow::Result;
use image::{DynamicImage, Rgba, RgbaImage};
use std::env;
use std::fs;

const BANNER_TEAL: Rgba<u8> = Rgba([0, 95, 100, 255]);

fn template(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, BANNER_TEAL)
}

fn compositor() -> Result<Compositor> {
    Compositor::new(BannerLayout::default(), NameFont::fallback()?)
}

/// Builds a photo whose quadrants have distinct colours.
fn quadrant_photo(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = match (x < width / 2, y < height / 2) {
            (true, true) => Rgba([255, 0, 0, 255]),
            (false, true) => Rgba([0, 255, 0, 255]),
            (true, false) => Rgba([0, 0, 255, 255]),
            (false, false) => Rgba([255, 255, 0, 255]),
        };
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn test_full_banner_from_files() -> Result<()> {
    let dir = env::temp_dir();
    let template_path = dir.join("rbanner_it_template.png");
    let photo_path = dir.join("rbanner_it_photo.png");
    let output_path = dir.join(download_file_name("Kavya"));

    save_png(&template(1080, 1350), &template_path)?;
    save_png(&quadrant_photo(640, 480).to_rgba8(), &photo_path)?;

    let mut session = BannerSession::new();
    session.set_template(open_image(&template_path)?);
    session.set_photo(open_image(&photo_path)?);
    session.set_name("Kavya");

    let banner = session.render(&compositor()?).expect("template is loaded");
    assert_eq!((banner.width(), banner.height()), (1080, 1350));
    save_png(&banner, &output_path)?;

    let reloaded = open_image(&output_path)?.to_rgba8();
    assert_eq!(reloaded, banner);

    // Quadrants of the photo meet at the circle centre
    let slot = BannerLayout::default().resolve(1080, 1350).photo;
    let (cx, cy) = (slot.center_x, slot.center_y);
    let offset = slot.radius / 2.0;
    assert_eq!(*banner.get_pixel((cx - offset) as u32, (cy - offset) as u32), Rgba([255, 0, 0, 255]));
    assert_eq!(*banner.get_pixel((cx + offset) as u32, (cy - offset) as u32), Rgba([0, 255, 0, 255]));
    assert_eq!(*banner.get_pixel((cx - offset) as u32, (cy + offset) as u32), Rgba([0, 0, 255, 255]));
    assert_eq!(*banner.get_pixel((cx + offset) as u32, (cy + offset) as u32), Rgba([255, 255, 0, 255]));

    // Background outside the circle and away from the text is untouched
    assert_eq!(*banner.get_pixel(10, 10), BANNER_TEAL);
    assert_eq!(*banner.get_pixel(1070, 1340), BANNER_TEAL);

    for path in [&template_path, &photo_path, &output_path] {
        let _ = fs::remove_file(path);
    }
    Ok(())
}

#[test]
fn test_name_text_is_centred_on_anchor() -> Result<()> {
    let banner = compositor()?.compose(&template(800, 600), None, "MMMM");
    let anchor = BannerLayout::default().resolve(800, 600).name;

    let white: Vec<(u32, u32)> = banner
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] > 200 && p.0[1] > 200 && p.0[2] > 200)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!white.is_empty(), "name should be drawn in white");

    let min_x = white.iter().map(|p| p.0).min().unwrap() as f32;
    let max_x = white.iter().map(|p| p.0).max().unwrap() as f32;
    let min_y = white.iter().map(|p| p.1).min().unwrap() as f32;
    let max_y = white.iter().map(|p| p.1).max().unwrap() as f32;

    assert!(((min_x + max_x) / 2.0 - anchor.x).abs() < 4.0);
    // Capitals sit above the em-box middle but must straddle the anchor line
    assert!(min_y < anchor.y && max_y > anchor.y - anchor.font_px / 2.0);
    Ok(())
}

#[test]
fn test_layout_file_changes_output() -> Result<()> {
    let layout_path = env::temp_dir().join("rbanner_it_layout.json");
    fs::write(&layout_path, r#"{ "photo_x": 0.2, "photo_y": 0.2, "photo_radius": 0.1 }"#)?;

    let layout = BannerLayout::from_json_file(&layout_path)?;
    let compositor = Compositor::new(layout, NameFont::fallback()?)?;
    let red = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
    let banner = compositor.compose(&template(500, 500), Some(&red), "");

    assert_eq!(*banner.get_pixel(100, 100), Rgba([255, 0, 0, 255]));
    // Default photo centre is no longer covered
    let default_slot = BannerLayout::default().resolve(500, 500).photo;
    assert_eq!(
        *banner.get_pixel(default_slot.center_x as u32, default_slot.center_y as u32),
        BANNER_TEAL
    );

    let _ = fs::remove_file(&layout_path);
    Ok(())
}

#[test]
fn test_invalid_layout_file_is_rejected() -> Result<()> {
    let layout_path = env::temp_dir().join("rbanner_it_bad_layout.json");
    fs::write(&layout_path, r#"{ "name_y": 3.0 }"#)?;
    assert!(BannerLayout::from_json_file(&layout_path).is_err());
    let _ = fs::remove_file(&layout_path);
    Ok(())
}

#[test]
fn test_png_bytes_decode_back() -> Result<()> {
    let banner = compositor()?.compose(&template(64, 64), Some(&quadrant_photo(8, 8)), "X");
    let decoded = decode_image(&encode_png(&banner)?)?;
    assert_eq!(decoded.to_rgba8(), banner);
    Ok(())
}

#[test]
fn test_transparent_template_keeps_alpha_outside_content() -> Result<()> {
    let transparent = RgbaImage::new(200, 200);
    let banner = compositor()?.compose(&transparent, Some(&quadrant_photo(20, 20)), "");
    let slot = BannerLayout::default().resolve(200, 200).photo;

    assert_eq!(banner.get_pixel(0, 0).0[3], 0);
    assert_eq!(banner.get_pixel(slot.center_x as u32, slot.center_y as u32).0[3], 255);
    Ok(())
}
