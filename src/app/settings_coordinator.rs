//! Editor preference persistence.
//!
//! Stores the layout, editor toggles and the last used template/font paths in eframe's
//! persistent storage as JSON strings, so the editor reopens the way it was left.

use crate::app::AppState;
use crate::state::LayoutState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LAYOUT_KEY: &str = "banner_layout_state";
const TEMPLATE_PATH_KEY: &str = "last_template_path";
const FONT_PATH_KEY: &str = "custom_font_path";

/// Preferences restored at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    pub layout: LayoutState,
    pub template_path: Option<PathBuf>,
    pub font_path: Option<PathBuf>,
}

/// Coordinates settings persistence.
///
/// Values are stored as JSON strings; anything missing or unreadable falls back to its
/// default instead of failing startup.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads all editor preferences.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> StoredSettings {
        StoredSettings {
            layout: Self::load_setting(storage, LAYOUT_KEY),
            template_path: Self::try_load_setting::<Option<PathBuf>>(storage, TEMPLATE_PATH_KEY).flatten(),
            font_path: Self::try_load_setting::<Option<PathBuf>>(storage, FONT_PATH_KEY).flatten(),
        }
    }

    /// Saves all editor preferences from the current state.
    pub fn save(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_setting(storage, LAYOUT_KEY, &state.layout);
        Self::save_setting(storage, TEMPLATE_PATH_KEY, &state.files.template_path());
        Self::save_setting(storage, FONT_PATH_KEY, &state.files.font_path());
    }

    /// Loads a setting from persistent storage with a default fallback.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => log::warn!("Failed to serialize setting {}: {}", key, e),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unreadable setting {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbanner::BannerLayout;
    use std::collections::HashMap;
    use eframe::Storage;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_load_defaults_from_empty_storage() {
        let storage = MockStorage::new();
        assert_eq!(SettingsCoordinator::load(Some(&storage)), StoredSettings::default());
        assert_eq!(SettingsCoordinator::load(None), StoredSettings::default());
    }

    #[test]
    fn test_save_and_load_state() {
        let mut storage = MockStorage::new();
        let mut state = AppState::new().unwrap();

        let mut layout = BannerLayout::default();
        layout.photo_y = 0.3;
        state.layout.set_banner_layout(layout.clone());
        state.layout.set_debug_guides(true);
        state.files.set_template_path(Some(PathBuf::from("/banners/template.png")));

        SettingsCoordinator::save(&mut storage, &state);
        let loaded = SettingsCoordinator::load(Some(&storage));

        assert_eq!(loaded.layout.banner_layout(), &layout);
        assert!(loaded.layout.debug_guides());
        assert_eq!(loaded.template_path, Some(PathBuf::from("/banners/template.png")));
        assert_eq!(loaded.font_path, None);
    }

    #[test]
    fn test_corrupt_setting_is_ignored() {
        let mut storage = MockStorage::new();
        storage.set_string(LAYOUT_KEY, "{not json".to_string());

        let loaded: LayoutState = SettingsCoordinator::load_setting(Some(&storage), LAYOUT_KEY);
        assert_eq!(loaded, LayoutState::default());
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::new();

        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "test", &123i32);
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(123));
    }
}
