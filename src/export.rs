//! PNG export of finished banners.

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs;
use std::path::Path;

/// Suffix appended to the user's name to form the download file name
pub const DOWNLOAD_SUFFIX: &str = "-image.png";

/// Encodes an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .context("Failed to encode PNG")?;
    Ok(bytes)
}

/// Encodes and writes a PNG file.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(image)?;
    fs::write(path, &bytes).with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    log::info!(
        "Saved {}x{} banner to {} ({} bytes)",
        image.width(),
        image.height(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// File name offered for a banner: `<name>-image.png`.
///
/// Characters that are not allowed in file names are replaced with `_`.
///
/// # Examples
/// ```
/// use rbanner::download_file_name;
///
/// assert_eq!(download_file_name("Asha"), "Asha-image.png");
/// assert_eq!(download_file_name("a/b"), "a_b-image.png");
/// assert_eq!(download_file_name(""), "-image.png");
/// ```
pub fn download_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, DOWNLOAD_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_encode_png_signature() -> Result<()> {
        let bytes = encode_png(&RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4])))?;
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        Ok(())
    }

    #[test]
    fn test_save_png_writes_file() -> Result<()> {
        let path = std::env::temp_dir().join("rbanner_export_test.png");
        let _ = fs::remove_file(&path);

        save_png(&RgbaImage::from_pixel(3, 2, Rgba([0, 0, 0, 255])), &path)?;
        let written = image::open(&path)?;
        assert_eq!((written.width(), written.height()), (3, 2));

        let _ = fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("Ravi Patel"), "Ravi Patel-image.png");
        assert_eq!(download_file_name("રવિ"), "રવિ-image.png");
        assert_eq!(download_file_name("a:b*c?"), "a_b_c_-image.png");
        assert_eq!(download_file_name("tab\there"), "tab_here-image.png");
        assert_eq!(download_file_name(""), "-image.png");
    }
}
