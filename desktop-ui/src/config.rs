use dioxus_logger::tracing::info;
use serde::{Deserialize, Serialize};

use crate::storage::{load_json, KeyValueStore};

pub const DEFAULT_STORAGE_PREFIX: &str = "webwindows";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Height of the taskbar strip reserved at the bottom of the viewport
    pub taskbar_height: i32,
    /// Offset of the first window from the top-left corner
    pub cascade_origin: i32,
    /// Diagonal step between successively opened windows
    pub cascade_step: i32,
    /// Stacking counter value before the first window opens
    pub initial_z: u32,
    /// Room kept between a dragged window and the right edge
    pub drag_margin_right: i32,
    /// Room kept between a dragged window and the taskbar
    pub drag_margin_bottom: i32,
    /// Namespace for every storage key the desktop writes
    pub storage_prefix: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 44,
            cascade_origin: 60,
            cascade_step: 28,
            initial_z: 10,
            drag_margin_right: 100,
            drag_margin_bottom: 60,
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }
}

impl DesktopConfig {
    /// Overrides stored as JSON under `webwindows.config`; defaults otherwise.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let key = format!("{DEFAULT_STORAGE_PREFIX}.config");
        match load_json::<DesktopConfig>(store, &key) {
            Some(config) => {
                info!("Loaded desktop config overrides from '{}'", key);
                config
            }
            None => Self::default(),
        }
    }

    pub fn storage_key(&self, suffix: &str) -> String {
        format!("{}.{}", self.storage_prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn missing_config_uses_defaults() {
        let store = MemoryStorage::new();
        assert_eq!(DesktopConfig::load(&store), DesktopConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let store = MemoryStorage::new();
        store
            .set("webwindows.config", r#"{"cascade_step": 40}"#)
            .unwrap();

        let config = DesktopConfig::load(&store);
        assert_eq!(config.cascade_step, 40);
        assert_eq!(config.taskbar_height, 44);
    }

    #[test]
    fn malformed_config_falls_back() {
        let store = MemoryStorage::new();
        store.set("webwindows.config", "not json").unwrap();
        assert_eq!(DesktopConfig::load(&store), DesktopConfig::default());
    }

    #[test]
    fn storage_keys_are_namespaced() {
        let config = DesktopConfig::default();
        assert_eq!(config.storage_key("files"), "webwindows.files");
    }
}
