use dioxus::prelude::*;
use shared_types::{AppDefinition, AppKind};

#[component]
pub fn StartMenu(apps: Vec<AppDefinition>, bottom: i32, on_launch: Callback<AppKind>) -> Element {
    rsx! {
        div {
            class: "start-menu",
            style: "position: absolute; left: 0.5rem; bottom: {bottom}px; z-index: 100001; width: 280px; padding: 0.75rem; background: var(--window-bg); border: 1px solid var(--border-color); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.35));",

            div {
                style: "font-weight: 700; margin-bottom: 0.625rem; color: var(--text-primary);",
                "Web Windows"
            }
            div {
                class: "start-menu-grid",
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.5rem;",

                for app in apps {
                    button {
                        key: "{app.kind}",
                        class: "start-menu-item",
                        style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem; background: var(--control-bg); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8125rem; text-align: left;",
                        onclick: move |_| on_launch.call(app.kind),
                        span { style: "font-size: 1.25rem;", "{app.icon}" }
                        span { "{app.name}" }
                    }
                }
            }
        }
    }
}
