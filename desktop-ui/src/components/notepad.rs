use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared_types::WindowId;

use crate::components::styles::{TOOLBAR_BUTTON_STYLE, TOOLBAR_STYLE};
use crate::config::DesktopConfig;
use crate::storage::{KeyValueStore, SharedStore, StorageError};

pub const LOREM_LINE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Each Notepad window keeps its own document.
pub fn notepad_key(config: &DesktopConfig, window_id: &WindowId) -> String {
    config.storage_key(&format!("notepad.{window_id}"))
}

pub fn load_note(store: &dyn KeyValueStore, key: &str) -> String {
    store.get(key).unwrap_or_default()
}

/// An empty document is stored as an absent key.
pub fn save_note(store: &dyn KeyValueStore, key: &str, text: &str) -> Result<(), StorageError> {
    if text.is_empty() {
        store.remove(key);
        Ok(())
    } else {
        store.set(key, text)
    }
}

pub fn append_lorem(text: &str) -> String {
    if text.is_empty() {
        LOREM_LINE.to_string()
    } else {
        format!("{text}\n{LOREM_LINE}")
    }
}

#[component]
pub fn NotepadView(window_id: WindowId) -> Element {
    let store = use_context::<SharedStore>();
    let config = use_context::<DesktopConfig>();
    let key = use_hook(|| notepad_key(&config, &window_id));

    let mut text = use_signal({
        let store = store.clone();
        let key = key.clone();
        move || load_note(store.as_ref(), &key)
    });
    let mut saved_text = use_signal(|| text.peek().clone());
    let mut error = use_signal(|| None::<String>);

    let on_save = move |_| {
        let current = text();
        match save_note(store.as_ref(), &key, &current) {
            Ok(()) => {
                saved_text.set(current);
                error.set(None);
            }
            Err(e) => {
                warn!("Failed to save note '{}': {}", key, e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let dirty = text() != saved_text();

    rsx! {
        div {
            class: "app-shell notepad",
            style: "display: flex; flex-direction: column; height: 100%;",

            div {
                class: "notepad-toolbar",
                style: "{TOOLBAR_STYLE}",
                button { class: "win-btn", style: "{TOOLBAR_BUTTON_STYLE}", onclick: on_save, "Save" }
                button {
                    class: "win-btn",
                    style: "{TOOLBAR_BUTTON_STYLE}",
                    onclick: move |_| text.set(String::new()),
                    "Clear"
                }
                button {
                    class: "win-btn",
                    style: "{TOOLBAR_BUTTON_STYLE}",
                    onclick: move |_| {
                        let next = append_lorem(&text());
                        text.set(next);
                    },
                    "Insert Lorem"
                }
                span {
                    style: "margin-left: auto; font-size: 0.75rem; color: var(--text-muted);",
                    if let Some(err) = error() {
                        "Save failed: {err}"
                    } else if dirty {
                        "Unsaved changes"
                    } else {
                        "Saved"
                    }
                }
            }

            textarea {
                class: "notepad-editor",
                style: "flex: 1; width: 100%; resize: none; border: none; outline: none; padding: 0.75rem; font-family: ui-monospace, monospace; font-size: 0.875rem; line-height: 1.5; background: var(--input-bg); color: var(--text-primary);",
                placeholder: "Start typing...",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn saved_text_survives_reload() {
        let store = MemoryStorage::new();
        let config = DesktopConfig::default();
        let window_id = WindowId("notepad-1".to_string());
        let key = notepad_key(&config, &window_id);

        save_note(&store, &key, "hello").unwrap();

        // A fresh view over the same storage reads the document back.
        let reloaded = load_note(&store, &notepad_key(&config, &window_id));
        assert_eq!(reloaded, "hello");
    }

    #[test]
    fn saving_empty_text_drops_the_key() {
        let store = MemoryStorage::new();
        let key = "webwindows.notepad.notepad-1";
        save_note(&store, key, "draft").unwrap();
        save_note(&store, key, "").unwrap();

        assert_eq!(store.get(key), None);
        assert_eq!(load_note(&store, key), "");
    }

    #[test]
    fn missing_note_is_empty() {
        let store = MemoryStorage::new();
        assert_eq!(load_note(&store, "webwindows.notepad.none"), "");
    }

    #[test]
    fn notes_are_keyed_per_window() {
        let config = DesktopConfig::default();
        let a = notepad_key(&config, &WindowId("notepad-a".to_string()));
        let b = notepad_key(&config, &WindowId("notepad-b".to_string()));
        assert_eq!(a, "webwindows.notepad.notepad-a");
        assert_ne!(a, b);
    }

    #[test]
    fn lorem_appends_on_new_line() {
        assert_eq!(append_lorem(""), LOREM_LINE);
        assert_eq!(append_lorem("notes"), format!("notes\n{LOREM_LINE}"));
    }
}
