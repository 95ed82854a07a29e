//! Key-value string storage used by the desktop and its apps.
//!
//! `BrowserStorage` wraps `window.localStorage`; `MemoryStorage` keeps values
//! in-process and backs tests and browsers where localStorage is disabled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    /// Missing keys and unreadable storage both read as `None`.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Shared handle passed through Dioxus context.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Read and decode a JSON value. Malformed data is logged and reads as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed stored value for '{}': {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// localStorage when the browser exposes it, otherwise an in-memory map.
pub fn default_store() -> SharedStore {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        warn!("localStorage unavailable, documents will not survive a reload");
        Rc::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn memory_storage_reads_back_writes() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn json_helpers_round_trip_through_store() {
        let store = MemoryStorage::new();
        let value = Sample {
            name: "a".to_string(),
        };
        save_json(&store, "sample", &value).unwrap();

        let loaded: Option<Sample> = load_json(&store, "sample");
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn malformed_json_reads_as_none() {
        let store = MemoryStorage::new();
        store.set("sample", "{not json").unwrap();

        let loaded: Option<Sample> = load_json(&store, "sample");
        assert!(loaded.is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_storage_round_trip() {
        let store = BrowserStorage;
        store.set("webwindows.test", "hello").unwrap();
        assert_eq!(store.get("webwindows.test").as_deref(), Some("hello"));
        store.remove("webwindows.test");
        assert_eq!(store.get("webwindows.test"), None);
    }
}
