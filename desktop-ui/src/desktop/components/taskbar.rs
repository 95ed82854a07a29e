use dioxus::prelude::*;
use shared_types::{WindowId, WindowState};

#[component]
pub fn Taskbar(
    height: i32,
    windows: Vec<WindowState>,
    active_window: Option<WindowId>,
    start_open: bool,
    on_toggle_start: Callback<()>,
    on_activate_window: Callback<WindowId>,
    clock: String,
    current_theme: String,
    on_toggle_theme: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "taskbar",
            style: "height: {height}px; flex-shrink: 0; display: flex; align-items: center; gap: 0.375rem; padding: 0 0.5rem; background: var(--taskbar-bg); border-top: 1px solid var(--border-color); position: relative; z-index: 100000;",

            button {
                class: if start_open { "start-btn open" } else { "start-btn" },
                style: "height: 32px; display: flex; align-items: center; gap: 0.375rem; padding: 0 0.75rem; background: var(--accent-bg); color: var(--accent-text); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600; flex-shrink: 0;",
                onclick: move |_| on_toggle_start.call(()),
                span { "🪟" }
                span { "Start" }
            }

            div {
                class: "running-apps",
                style: "flex: 1; display: flex; align-items: center; gap: 0.25rem; min-width: 0; overflow-x: auto;",

                for window in windows.iter() {
                    TaskbarEntry {
                        key: "{window.id}",
                        window: window.clone(),
                        is_active: active_window.as_ref() == Some(&window.id),
                        on_activate: on_activate_window,
                    }
                }
            }

            button {
                class: "taskbar-theme-btn",
                style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: var(--control-bg); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0;",
                onclick: move |_| on_toggle_theme.call(()),
                title: "Toggle theme",
                if current_theme == "dark" {
                    "☀️"
                } else {
                    "🌙"
                }
            }

            div {
                class: "taskbar-clock",
                style: "min-width: 3.5rem; text-align: center; font-variant-numeric: tabular-nums; font-size: 0.8125rem; color: var(--text-primary); flex-shrink: 0;",
                "{clock}"
            }
        }
    }
}

#[component]
pub fn TaskbarEntry(window: WindowState, is_active: bool, on_activate: Callback<WindowId>) -> Element {
    let icon = window.kind.icon();
    let window_id = window.id.clone();
    let (background, color, border) = if is_active {
        ("var(--accent-bg)", "var(--accent-text)", "none")
    } else {
        ("var(--control-bg)", "var(--text-primary)", "1px solid var(--border-color)")
    };
    let opacity = if window.minimized { "0.6" } else { "1" };

    rsx! {
        button {
            class: if is_active { "taskbar-entry active" } else { "taskbar-entry" },
            style: "height: 32px; max-width: 180px; display: flex; align-items: center; gap: 0.375rem; padding: 0 0.625rem; background: {background}; color: {color}; border: {border}; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 0.8125rem; opacity: {opacity};",
            onclick: move |_| on_activate.call(window_id.clone()),
            title: "{window.title}",
            span { "{icon}" }
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{window.title}"
            }
        }
    }
}
