use dioxus_logger::tracing::warn;

use crate::config::DesktopConfig;
use crate::storage::KeyValueStore;

pub const DEFAULT_THEME: &str = "light";
const THEME_KEY: &str = "theme";

pub fn next_theme(current_theme: &str) -> String {
    if current_theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    }
}

pub fn apply_theme_to_document(theme: &str) {
    if !matches!(theme, "light" | "dark") {
        return;
    }

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
}

pub fn get_cached_theme_preference(
    store: &dyn KeyValueStore,
    config: &DesktopConfig,
) -> Option<String> {
    store
        .get(&config.storage_key(THEME_KEY))
        .filter(|theme| matches!(theme.as_str(), "light" | "dark"))
}

pub fn set_cached_theme_preference(store: &dyn KeyValueStore, config: &DesktopConfig, theme: &str) {
    if !matches!(theme, "light" | "dark") {
        return;
    }

    if let Err(e) = store.set(&config.storage_key(THEME_KEY), theme) {
        warn!("Failed to persist theme preference: {}", e);
    }
}
