//! Image decoding with format sniffing and EXIF orientation.

use anyhow::{Context, Result};
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// File extensions offered by the file pickers.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Decodes an in-memory image, rotating/flipping it upright per its EXIF orientation.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("Failed to detect image format")?;
    let format = reader.format().context("Unrecognized image format")?;

    let mut decoder = reader
        .into_decoder()
        .with_context(|| format!("Failed to read {:?} image", format))?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)
        .with_context(|| format!("Failed to decode {:?} image", format))?;
    image.apply_orientation(orientation);

    log::debug!(
        "Decoded {:?} image {}x{} ({:?})",
        format,
        image.width(),
        image.height(),
        orientation
    );
    Ok(image)
}

/// Reads and decodes an image file.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;
    decode_image(&bytes).with_context(|| format!("Failed to load image: {}", path.display()))
}
