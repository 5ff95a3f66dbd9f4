//! I/O modules for background image loading.

pub mod file_loader;
pub mod async_loader;

// Re-export commonly used types
pub use file_loader::ImageSlot;
pub use async_loader::{AsyncLoader, LoadResult};
