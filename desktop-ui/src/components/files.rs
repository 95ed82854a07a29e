use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared_types::{StoredFile, WindowId};

use crate::components::styles::{
    MUTED_TEXT_STYLE, PRIMARY_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE, TOOLBAR_STYLE,
};
use crate::config::DesktopConfig;
use crate::storage::{load_json, save_json, KeyValueStore, SharedStore, StorageError};

/// The flat file list the Files app keeps under a single storage key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileLibrary {
    files: Vec<StoredFile>,
}

impl FileLibrary {
    /// Absent or malformed data loads as an empty library.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        Self {
            files: load_json(store, key).unwrap_or_default(),
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
        save_json(store, key, &self.files)
    }

    pub fn files(&self) -> &[StoredFile] {
        &self.files
    }

    pub fn get(&self, id: &str) -> Option<&StoredFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn suggested_name(&self) -> String {
        format!("note-{}.txt", self.files.len() + 1)
    }

    /// New files go to the top of the list. Blank names are rejected.
    pub fn create(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let file = StoredFile::new(name);
        let id = file.id.clone();
        self.files.insert(0, file);
        Some(id)
    }

    pub fn delete(&mut self, id: &str) {
        self.files.retain(|f| f.id != id);
    }

    /// Deletes `id` and returns what remains selected afterwards.
    pub fn delete_and_reselect(&mut self, id: &str, selection: Option<String>) -> Option<String> {
        self.delete(id);
        selection.filter(|selected| selected.as_str() != id)
    }

    pub fn update_content(&mut self, id: &str, content: &str) {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.content = content.to_string();
        }
    }
}

pub fn files_key(config: &DesktopConfig) -> String {
    config.storage_key("files")
}

#[component]
pub fn FilesView(window_id: WindowId) -> Element {
    let store = use_context::<SharedStore>();
    let config = use_context::<DesktopConfig>();
    let key = use_hook(|| files_key(&config));

    let mut library = use_signal({
        let store = store.clone();
        let key = key.clone();
        move || FileLibrary::load(store.as_ref(), &key)
    });
    let mut selected = use_signal(|| None::<String>);
    let mut editing = use_signal(String::new);
    let mut new_file_name = use_signal(|| None::<String>);

    // Every mutation writes the whole list back.
    let commit = use_callback(move |next: FileLibrary| {
        if let Err(e) = next.persist(store.as_ref(), &key) {
            warn!("Failed to persist file list '{}': {}", key, e);
        }
        library.set(next);
    });

    let show_create = move |_| {
        let suggestion = library.read().suggested_name();
        new_file_name.set(Some(suggestion));
    };

    let mut confirm_create = move || {
        let Some(name) = new_file_name() else {
            return;
        };
        let mut next = library();
        if next.create(&name).is_some() {
            commit.call(next);
        }
        new_file_name.set(None);
    };

    let delete_selected = move |_| {
        let Some(id) = selected() else {
            return;
        };
        let mut next = library();
        let remaining = next.delete_and_reselect(&id, Some(id.clone()));
        commit.call(next);
        if remaining.is_none() {
            editing.set(String::new());
        }
        selected.set(remaining);
    };

    let save_selected = move |_| {
        let Some(id) = selected() else {
            return;
        };
        let mut next = library();
        next.update_content(&id, &editing());
        commit.call(next);
    };

    let files = library.read().files().to_vec();
    let selected_file = selected().and_then(|id| library.read().get(&id).cloned());
    let has_selection = selected_file.is_some();

    rsx! {
        div {
            id: "files-{window_id}",
            class: "app-shell files",
            style: "position: relative; display: grid; grid-template-columns: 280px 1fr; height: 100%;",

            div {
                style: "display: flex; flex-direction: column; border-right: 1px solid var(--border-color); background: var(--panel-bg); min-height: 0;",
                div {
                    style: "{TOOLBAR_STYLE}",
                    button { class: "win-btn", style: "{TOOLBAR_BUTTON_STYLE}", onclick: show_create, "New" }
                    button {
                        class: "win-btn",
                        style: "{TOOLBAR_BUTTON_STYLE}",
                        disabled: !has_selection,
                        onclick: delete_selected,
                        "Delete"
                    }
                }
                div {
                    class: "files-grid",
                    style: "flex: 1; overflow-y: auto; padding: 0.5rem; display: flex; flex-direction: column; gap: 0.375rem;",

                    if files.is_empty() {
                        div { style: "{MUTED_TEXT_STYLE}", "No files yet. Create one!" }
                    }
                    for file in files {
                        FileCard {
                            key: "{file.id}",
                            selected: selected_file.as_ref().is_some_and(|s| s.id == file.id),
                            on_select: move |file: StoredFile| {
                                editing.set(file.content.clone());
                                selected.set(Some(file.id));
                            },
                            file: file.clone(),
                        }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; min-height: 0;",
                div {
                    style: "{TOOLBAR_STYLE}",
                    div {
                        style: "font-weight: 700;",
                        if let Some(file) = selected_file.as_ref() {
                            "{file.name}"
                        } else {
                            "No file selected"
                        }
                    }
                    div {
                        style: "margin-left: auto;",
                        button {
                            class: "win-btn",
                            style: "{PRIMARY_BUTTON_STYLE}",
                            disabled: !has_selection,
                            onclick: save_selected,
                            "Save"
                        }
                    }
                }
                if has_selection {
                    textarea {
                        class: "notepad-editor",
                        style: "flex: 1; width: 100%; resize: none; border: none; outline: none; padding: 0.75rem; font-family: ui-monospace, monospace; font-size: 0.875rem; background: var(--input-bg); color: var(--text-primary);",
                        value: "{editing}",
                        oninput: move |e| editing.set(e.value()),
                    }
                } else {
                    div { style: "{MUTED_TEXT_STYLE}", "Select a file on the left to view/edit." }
                }
            }

            if let Some(name) = new_file_name() {
                NameDialog {
                    title: "New file",
                    input_value: name,
                    on_input: move |v: String| new_file_name.set(Some(v)),
                    on_confirm: move |_| confirm_create(),
                    on_cancel: move |_| new_file_name.set(None),
                }
            }
        }
    }
}

#[component]
fn FileCard(file: StoredFile, selected: bool, on_select: Callback<StoredFile>) -> Element {
    let file_for_click = file.clone();
    let chars = file.display_len();

    rsx! {
        div {
            class: if selected { "file-card selected" } else { "file-card" },
            style: if selected {
                "padding: 0.5rem 0.625rem; border-radius: var(--radius-sm, 4px); cursor: pointer; background: var(--accent-bg); color: var(--accent-text);"
            } else {
                "padding: 0.5rem 0.625rem; border-radius: var(--radius-sm, 4px); cursor: pointer; background: var(--card-bg); border: 1px solid var(--border-color);"
            },
            onclick: move |_| on_select.call(file_for_click.clone()),
            div { "📄 {file.name}" }
            div { style: "font-size: 0.75rem; opacity: 0.75;", "{chars} chars" }
        }
    }
}

/// Name prompt shown when creating a file
#[component]
fn NameDialog(
    title: String,
    input_value: String,
    on_input: Callback<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; z-index: 10;",
            onclick: move |_| on_cancel.call(()),
            div {
                style: "background: var(--window-bg); border: 1px solid var(--border-color); border-radius: var(--radius-md, 8px); padding: 1.25rem; min-width: 300px; max-width: 90%;",
                onclick: move |e| e.stop_propagation(),
                h3 { style: "margin: 0 0 0.75rem 0; font-size: 1rem;", "{title}" }
                input {
                    style: "width: 100%; padding: 0.5rem 0.75rem; background: var(--input-bg); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-sm, 4px); font-size: 0.875rem; box-sizing: border-box;",
                    value: "{input_value}",
                    autofocus: true,
                    oninput: move |e| on_input.call(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            on_confirm.call(());
                        } else if e.key() == Key::Escape {
                            on_cancel.call(());
                        }
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1rem;",
                    button {
                        style: "{TOOLBAR_BUTTON_STYLE}",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "{PRIMARY_BUTTON_STYLE}",
                        onclick: move |_| on_confirm.call(()),
                        "Create"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "webwindows.files";

    #[test]
    fn absent_storage_is_empty() {
        let store = MemoryStorage::new();
        let library = FileLibrary::load(&store, KEY);
        assert!(library.files().is_empty());
        assert_eq!(library.suggested_name(), "note-1.txt");
    }

    #[test]
    fn malformed_storage_resets_to_empty() {
        let store = MemoryStorage::new();
        store.set(KEY, "[{\"id\": 1").unwrap();
        assert!(FileLibrary::load(&store, KEY).files().is_empty());
    }

    #[test]
    fn create_prepends_and_persists() {
        let store = MemoryStorage::new();
        let mut library = FileLibrary::default();
        library.create("first.txt").unwrap();
        let second = library.create("second.txt").unwrap();
        library.persist(&store, KEY).unwrap();

        let reloaded = FileLibrary::load(&store, KEY);
        assert_eq!(reloaded, library);
        assert_eq!(reloaded.files()[0].id, second);
        assert_eq!(reloaded.files()[1].name, "first.txt");
        assert_eq!(reloaded.suggested_name(), "note-3.txt");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut library = FileLibrary::default();
        assert!(library.create("   ").is_none());
        assert!(library.files().is_empty());
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut library = FileLibrary::default();
        let keep = library.create("keep.txt").unwrap();
        let drop = library.create("drop.txt").unwrap();

        library.delete(&drop);
        library.delete(&drop);

        assert_eq!(library.files().len(), 1);
        assert!(library.get(&keep).is_some());
    }

    #[test]
    fn update_content_saves_into_selected_file() {
        let store = MemoryStorage::new();
        let mut library = FileLibrary::default();
        let id = library.create("a.txt").unwrap();
        library.update_content(&id, "hello");
        library.update_content("missing", "ignored");
        library.persist(&store, KEY).unwrap();

        let reloaded = FileLibrary::load(&store, KEY);
        assert_eq!(reloaded.get(&id).map(|f| f.content.as_str()), Some("hello"));
    }

    #[test]
    fn deleting_the_selected_file_clears_selection() {
        let mut library = FileLibrary::default();
        let keep = library.create("keep.txt").unwrap();
        let target = library.create("target.txt").unwrap();

        let selection = library.delete_and_reselect(&target, Some(target.clone()));
        assert_eq!(selection, None);
        assert!(library.get(&target).is_none());

        let other = library.create("other.txt").unwrap();
        let selection = library.delete_and_reselect(&other, Some(keep.clone()));
        assert_eq!(selection, Some(keep));
        assert_eq!(library.files().len(), 1);
    }
}
