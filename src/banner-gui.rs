//! Personalized Banner Editor GUI Application
//!
//! This module provides an interactive editor that composites a user's photo and name onto
//! a banner template, built with the egui framework.
//! The editor features:
//! - Live full-resolution preview scaled to the window
//! - Photo picker and name input placed exactly where they are rendered

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Background image decoding with loading indicators
//! - Adjustable layout with persistent preferences
//! - PNG download at the template's natural resolution
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background image loading
//! - `state/` - State for layout, preview and source files
//! - `ui/` - UI panel rendering and interaction
//! - `utils/` - Utility functions for formatting

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use rbanner::NameFont;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Template loaded when neither the command line nor stored settings name one.
const DEFAULT_TEMPLATE: &str = "template.png";

/// Main application entry point that initializes and launches the banner editor GUI.
fn main() -> eframe::Result {
    env_logger::init();

    // Parse command-line arguments to check for an initial template to load
    let initial_template = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 900.0])
            .with_title("Banner Maker"),
        ..Default::default()
    };

    eframe::run_native(
        "Banner Maker",
        options,
        Box::new(move |cc| Ok(Box::new(BannerApp::new(cc, initial_template)?))),
    )
}

/// The main banner editor application.
///
/// Most functionality is delegated:
/// - `ApplicationCoordinator` handles loading, edits, layout changes and export
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct BannerApp {
    /// Centralized application state
    state: AppState,
    /// Background image loader
    loader: AsyncLoader,
    /// Template to load on first frame
    pending_template_load: Option<PathBuf>,
}

impl BannerApp {
    /// Creates a new editor with layout, font and template restored from persistent storage.
    /// An explicit template path from the command line takes precedence.
    fn new(cc: &eframe::CreationContext, initial_template: Option<PathBuf>) -> anyhow::Result<Self> {
        let settings = SettingsCoordinator::load(cc.storage);

        let (font, font_path, font_error) = match &settings.font_path {
            Some(path) => match NameFont::from_file(path) {
                Ok(font) => (font, Some(path.clone()), None),
                Err(e) => (NameFont::fallback()?, None, Some(format!("{:#}", e))),
            },
            None => (NameFont::fallback()?, None, None),
        };

        let mut state = AppState::with_layout(settings.layout, font)?;
        state.files.set_font_path(font_path);
        if let Some(message) = font_error {
            state.report_error(message);
        }

        let pending_template_load = initial_template
            .or(settings.template_path.filter(|p| p.exists()))
            .or_else(|| Some(PathBuf::from(DEFAULT_TEMPLATE)).filter(|p| p.exists()));

        Ok(Self {
            state,
            loader: AsyncLoader::new(),
            pending_template_load,
        })
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenTemplateRequested(path) => {
                ApplicationCoordinator::open_template(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenPhotoRequested(path) => {
                ApplicationCoordinator::open_photo(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::ClearPhotoRequested => {
                ApplicationCoordinator::clear_photo(&mut self.state);
            }
            PanelInteraction::OpenFontRequested(path) => {
                ApplicationCoordinator::open_font(&mut self.state, path);
            }
            PanelInteraction::ResetFontRequested => {
                ApplicationCoordinator::reset_font(&mut self.state);
            }
            PanelInteraction::NameChanged(name) => {
                ApplicationCoordinator::set_name(&mut self.state, name);
            }
            PanelInteraction::DownloadRequested(path) => {
                ApplicationCoordinator::export_banner(&mut self.state, path);
            }
            PanelInteraction::DebugGuidesToggled(enabled) => {
                ApplicationCoordinator::set_debug_guides(&mut self.state, enabled);
            }
            PanelInteraction::LayoutChanged(layout) => {
                ApplicationCoordinator::update_layout(&mut self.state, layout);
            }
            PanelInteraction::LoadLayoutRequested(path) => {
                ApplicationCoordinator::load_layout_file(&mut self.state, path);
            }
            PanelInteraction::SaveLayoutRequested(path) => {
                ApplicationCoordinator::save_layout_file(&mut self.state, path);
            }
        }
    }
}

impl eframe::App for BannerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save(storage, &self.state);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Apply finished background loads
    /// 2. Load the initial template (first frame only)
    /// 3. Re-render the preview if the session changed
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        if let Some(path) = self.pending_template_load.take() {
            ApplicationCoordinator::open_template(&mut self.state, &mut self.loader, path, ctx);
        }

        ApplicationCoordinator::refresh_preview(&mut self.state, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
            ctx.request_repaint();
        }
    }
}
