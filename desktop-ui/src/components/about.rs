use dioxus::prelude::*;
use shared_types::AppKind;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            class: "app-shell about",
            style: "height: 100%; overflow-y: auto; padding: 1.25rem 1.5rem; line-height: 1.55; color: var(--text-primary);",

            h2 { style: "margin: 0 0 0.5rem 0; font-size: 1.25rem;", "Web Windows" }
            p {
                style: "margin: 0 0 0.75rem 0;",
                "A small desktop running entirely in the browser. Windows can be dragged by their title bar, \
                 minimized to the taskbar and maximized to fill the screen. Everything you save stays in this \
                 browser's local storage."
            }

            h3 { style: "margin: 0.75rem 0 0.35rem 0; font-size: 0.9375rem;", "Apps" }
            ul {
                style: "margin: 0; padding-left: 1.25rem;",
                for kind in AppKind::ALL {
                    li { key: "{kind}", "{kind.icon()} {kind.label()}: {describe(kind)}" }
                }
            }

            h3 { style: "margin: 0.75rem 0 0.35rem 0; font-size: 0.9375rem;", "Shortcuts" }
            ul {
                style: "margin: 0; padding-left: 1.25rem; color: var(--text-muted);",
                li { "Alt+F4 closes the focused window" }
                li { "Ctrl+M minimizes, Ctrl+Shift+M maximizes" }
                li { "Alt+Arrow keys nudge a window" }
                li { "Double-click a title bar to maximize or restore" }
            }
        }
    }
}

fn describe(kind: AppKind) -> &'static str {
    match kind {
        AppKind::Notepad => "a plain text editor that remembers each window's note",
        AppKind::Terminal => "a toy shell with a handful of built-in commands",
        AppKind::Files => "create, edit and delete small text files",
        AppKind::About => "this page",
    }
}
