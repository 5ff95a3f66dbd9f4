//! Native file dialogs.

use rbanner::{download_file_name, IMAGE_EXTENSIONS};
use std::path::{Path, PathBuf};

fn dialog_in(directory: Option<&Path>) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new();
    match directory {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

/// Asks for an image file (template or photo).
pub fn pick_image(title: &str, directory: Option<&Path>) -> Option<PathBuf> {
    dialog_in(directory)
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Asks for a TrueType/OpenType font.
pub fn pick_font(directory: Option<&Path>) -> Option<PathBuf> {
    dialog_in(directory)
        .set_title("Choose Font")
        .add_filter("Fonts", &["ttf", "otf", "ttc"])
        .pick_file()
}

/// Asks where to save the banner, suggesting `<name>-image.png` in the download directory.
pub fn save_banner(name: &str) -> Option<PathBuf> {
    let directory = dirs::download_dir().or_else(dirs::picture_dir);
    dialog_in(directory.as_deref())
        .set_title("Download Banner")
        .set_file_name(download_file_name(name))
        .add_filter("PNG Image", &["png"])
        .save_file()
}

/// Asks for a layout JSON file to open.
pub fn pick_layout(directory: Option<&Path>) -> Option<PathBuf> {
    dialog_in(directory)
        .set_title("Load Layout")
        .add_filter("Layout JSON", &["json"])
        .pick_file()
}

/// Asks where to save the layout JSON.
pub fn save_layout(directory: Option<&Path>) -> Option<PathBuf> {
    dialog_in(directory)
        .set_title("Save Layout")
        .set_file_name("layout.json")
        .add_filter("Layout JSON", &["json"])
        .save_file()
}
