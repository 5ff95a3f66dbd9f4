//! Template-relative banner layout.
//!
//! Every position is stored as a fraction of the template size so one layout works for any
//! template resolution. `resolve` turns those fractions into pixel placements for a concrete
//! template.

use anyhow::{Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Placement constants for the photo circle and the name text.
///
/// Stored as JSON; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerLayout {
    /// Photo circle centre, fraction of template width
    pub photo_x: f32,
    /// Photo circle centre, fraction of template height
    pub photo_y: f32,
    /// Photo circle radius, fraction of template width
    pub photo_radius: f32,
    /// Name anchor, fraction of template width
    pub name_x: f32,
    /// Name anchor, fraction of template height
    pub name_y: f32,
    /// Font size as a fraction of template width
    pub font_size_ratio: f32,
    /// Lower bound for the font size in pixels
    pub min_font_px: f32,
    /// Name fill colour as `#RRGGBB` or `#RRGGBBAA`
    pub text_color: String,
}

impl Default for BannerLayout {
    fn default() -> Self {
        Self {
            photo_x: 0.5,
            photo_y: 0.408,
            photo_radius: 0.141,
            name_x: 0.5,
            name_y: 0.547,
            font_size_ratio: 0.038,
            min_font_px: 22.0,
            text_color: "#FFFFFF".to_string(),
        }
    }
}

/// Photo circle in template pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoSlot {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Name text anchor in template pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameAnchor {
    pub x: f32,
    pub y: f32,
    pub font_px: f32,
}

/// A layout resolved against a concrete template size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub photo: PhotoSlot,
    pub name: NameAnchor,
}

impl BannerLayout {
    /// Resolves the layout against a template of the given natural size.
    ///
    /// The radius and font size both scale with the template width only.
    pub fn resolve(&self, template_w: u32, template_h: u32) -> Placement {
        let w = template_w as f32;
        let h = template_h as f32;

        Placement {
            photo: PhotoSlot {
                center_x: w * self.photo_x,
                center_y: h * self.photo_y,
                radius: w * self.photo_radius,
            },
            name: NameAnchor {
                x: w * self.name_x,
                y: h * self.name_y,
                font_px: self.min_font_px.max(w * self.font_size_ratio),
            },
        }
    }

    /// Checks that every field is inside its meaningful range.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("photo_x", self.photo_x),
            ("photo_y", self.photo_y),
            ("name_x", self.name_x),
            ("name_y", self.name_y),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{} must be between 0 and 1, got {}", field, value);
            }
        }

        if !(self.photo_radius > 0.0 && self.photo_radius <= 1.0) {
            anyhow::bail!("photo_radius must be in (0, 1], got {}", self.photo_radius);
        }
        if !(self.font_size_ratio > 0.0) {
            anyhow::bail!("font_size_ratio must be positive, got {}", self.font_size_ratio);
        }
        if !(self.min_font_px > 0.0) {
            anyhow::bail!("min_font_px must be positive, got {}", self.min_font_px);
        }

        self.text_rgba()?;
        Ok(())
    }

    /// Parses `text_color` into an RGBA pixel.
    pub fn text_rgba(&self) -> Result<Rgba<u8>> {
        parse_hex_color(&self.text_color)
    }

    /// Loads and validates a layout from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        let layout: BannerLayout = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;
        layout
            .validate()
            .with_context(|| format!("Invalid layout in {}", path.display()))?;
        Ok(layout)
    }

    /// Writes the layout as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write layout file: {}", path.display()))
    }
}

/// Converts `#RRGGBB` or `#RRGGBBAA` into an RGBA pixel.
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
    let digits = hex
        .trim()
        .strip_prefix('#')
        .with_context(|| format!("invalid color (expected #RRGGBB): {}", hex))?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("invalid color: {}", hex);
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).with_context(|| format!("invalid color: {}", hex))
    };

    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}
