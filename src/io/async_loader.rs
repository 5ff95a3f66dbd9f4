//! Asynchronous image loading.
//!
//! This module decodes template and photo files in background threads,
//! keeping the GUI responsive while large images are read and decoded.

use crate::io::ImageSlot;
use eframe::egui;
use image::DynamicImage;
use rbanner::open_image;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Result of a completed image loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// Slot the image was requested for
        slot: ImageSlot,
        /// The decoded image
        image: DynamicImage,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error {
        slot: ImageSlot,
        path: PathBuf,
        message: String,
    },
    /// No completed operation available
    None,
}

/// A decode running on a background thread.
struct PendingLoad {
    slot: ImageSlot,
    path: PathBuf,
    receiver: Receiver<Result<DynamicImage, String>>,
}

/// Manages asynchronous decoding of image files.
///
/// A newer request for the same slot supersedes an older one; the older result is
/// discarded when it arrives.
pub struct AsyncLoader {
    /// Loads that have not reported back yet
    pending: Vec<PendingLoad>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Checks if any load has been requested and not yet collected.
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Returns true if a load for `slot` has been requested and not yet collected.
    pub fn is_loading_slot(&self, slot: ImageSlot) -> bool {
        self.pending.iter().any(|p| p.slot == slot)
    }

    /// Starts decoding an image file asynchronously.
    ///
    /// Call `check_completion()` regularly (e.g., once per frame) to collect results.
    ///
    /// # Arguments
    /// * `slot` - Where the decoded image goes
    /// * `path` - Path to the image file
    /// * `ctx` - egui context for requesting repaints when loading completes
    pub fn start_image_load(&mut self, slot: ImageSlot, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();

        // Drop any older request for the same slot
        self.pending.retain(|p| p.slot != slot);
        self.pending.push(PendingLoad {
            slot,
            path: path.clone(),
            receiver,
        });

        let ctx_handle = ctx.clone();

        log::info!("Loading {} from {}", slot.label(), path.display());

        thread::spawn(move || {
            let result = open_image(&path).map_err(|e| format!("{:#}", e));

            // The receiver is gone if the request was superseded
            let _ = sender.send(result);
            ctx_handle.request_repaint();
        });
    }

    /// Returns the next completed load, if any.
    ///
    /// Call repeatedly until it returns `LoadResult::None` to drain all finished loads.
    pub fn check_completion(&mut self) -> LoadResult {
        for index in 0..self.pending.len() {
            let received = match self.pending[index].receiver.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    Some(Err("loader thread exited without a result".to_string()))
                }
            };

            if let Some(result) = received {
                let PendingLoad { slot, path, .. } = self.pending.remove(index);
                return match result {
                    Ok(image) => LoadResult::Success { slot, image, path },
                    Err(message) => LoadResult::Error { slot, path, message },
                };
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::time::{Duration, Instant};

    fn wait_for_result(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match loader.check_completion() {
                LoadResult::None if Instant::now() < deadline => thread::sleep(Duration::from_millis(10)),
                other => return other,
            }
        }
    }

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(!loader.is_loading_slot(ImageSlot::Photo));
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_loads_image_in_background() {
        let path = std::env::temp_dir().join("rbanner_async_loader_test.png");
        rbanner::save_png(&RgbaImage::from_pixel(5, 4, Rgba([1, 2, 3, 255])), &path).unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_image_load(ImageSlot::Template, path.clone(), &ctx);
        assert!(loader.is_loading());
        assert!(loader.is_loading_slot(ImageSlot::Template));
        assert!(!loader.is_loading_slot(ImageSlot::Photo));

        match wait_for_result(&mut loader) {
            LoadResult::Success { slot, image, path: loaded_path } => {
                assert_eq!(slot, ImageSlot::Template);
                assert_eq!((image.width(), image.height()), (5, 4));
                assert_eq!(loaded_path, path);
            }
            _ => panic!("expected a successful load"),
        }
        assert!(!loader.is_loading_slot(ImageSlot::Template));
        assert!(!loader.is_loading());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_image_load(ImageSlot::Photo, PathBuf::from("/nonexistent/first.jpg"), &ctx);
        loader.start_image_load(ImageSlot::Photo, PathBuf::from("/nonexistent/second.jpg"), &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Error { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/second.jpg")),
            _ => panic!("expected an error for the newer request"),
        }
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_image_load(ImageSlot::Photo, PathBuf::from("/nonexistent/photo.jpg"), &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Error { slot, message, .. } => {
                assert_eq!(slot, ImageSlot::Photo);
                assert!(message.contains("photo.jpg"));
            }
            _ => panic!("expected an error"),
        }
    }
}
