//! State management modules for the banner editor.
//!
//! This module contains state-only logic (no UI concerns):
//! - Layout state (placement constants, panel and guide toggles)
//! - Preview state (rendered composite, texture, render revision)
//! - File state (source paths, name input buffer)

mod layout_state;
mod preview_state;
mod file_state;

pub use layout_state::LayoutState;
pub use preview_state::PreviewState;
pub use file_state::FileState;
