pub mod layout;
pub mod geometry;
pub mod raster;
pub mod font;
pub mod compositor;
pub mod decode;
pub mod export;
pub mod session;

// Export layout configuration
pub use layout::{BannerLayout, Placement, PhotoSlot, NameAnchor, parse_hex_color};

// Export geometry helpers
pub use geometry::{
    cover_fit, cover_crop, fit_display_size, overlay_placement, display_to_template,
    DrawRect, DisplayReserve, OverlayPlacement
};

// Export rendering
pub use font::NameFont;
pub use compositor::{scale_photo, Compositor};

// Export image I/O
pub use decode::{decode_image, open_image, IMAGE_EXTENSIONS};
pub use export::{encode_png, save_png, download_file_name};

// Export session state
pub use session::BannerSession;
