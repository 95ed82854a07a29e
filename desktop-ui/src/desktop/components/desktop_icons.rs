use dioxus::prelude::*;
use shared_types::{AppDefinition, AppKind};

#[component]
pub fn DesktopIcons(apps: Vec<AppDefinition>, on_open_app: Callback<AppKind>) -> Element {
    rsx! {
        div {
            class: "desktop-icons",
            style: "position: absolute; top: 1rem; left: 1rem; z-index: 0; display: grid; grid-auto-flow: row; grid-template-columns: 5.5rem; gap: 1rem;",

            for app in apps {
                DesktopIcon {
                    key: "{app.kind}",
                    app: app.clone(),
                    on_open_app,
                }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(app: AppDefinition, on_open_app: Callback<AppKind>) -> Element {
    let mut selected = use_signal(|| false);
    let kind = app.kind;

    let border_color = if selected() {
        "var(--accent-bg)"
    } else {
        "transparent"
    };

    rsx! {
        button {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.375rem; padding: 0.5rem; background: transparent; border: 1px dashed {border_color}; border-radius: var(--radius-md, 8px); cursor: pointer;",
            onclick: move |_| selected.set(true),
            ondoubleclick: move |_| {
                selected.set(false);
                on_open_app.call(kind);
            },
            onblur: move |_| selected.set(false),

            div {
                style: "width: 3.25rem; height: 3.25rem; display: flex; align-items: center; justify-content: center; background: var(--icon-bg); border-radius: var(--radius-lg, 12px); border: 1px solid var(--border-color);",
                span { style: "font-size: 2rem; pointer-events: none; user-select: none;", "{app.icon}" }
            }
            span {
                style: "font-size: 0.75rem; color: var(--desktop-text); text-align: center; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; text-shadow: 0 1px 2px rgba(0,0,0,0.4); pointer-events: none; user-select: none;",
                "{app.name}"
            }
        }
    }
}
