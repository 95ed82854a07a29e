use dioxus::prelude::*;
use shared_types::{AppDefinition, AppKind, WindowId};

use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::state::WindowManager;
use crate::desktop_window::WindowFrame;

/// `isolation` gives the canvas its own stacking context, so window layers
/// never compete with the taskbar or the start menu.
pub const CANVAS_STYLE: &str =
    "flex: 1; position: relative; isolation: isolate; overflow: hidden; background: var(--desktop-bg);";

#[component]
pub fn WorkspaceCanvas(
    apps: Vec<AppDefinition>,
    manager: Signal<WindowManager>,
    viewport: Signal<(u32, u32)>,
    on_open_app: Callback<AppKind>,
    on_background_click: Callback<()>,
    on_close: Callback<WindowId>,
    on_focus: Callback<WindowId>,
    on_move: Callback<(WindowId, i32, i32)>,
    on_minimize: Callback<WindowId>,
    on_maximize: Callback<WindowId>,
) -> Element {
    let viewport_value = *viewport.read();
    let windows = manager.read().windows().to_vec();
    let active_window = manager.read().front_window().map(|w| w.id.clone());
    let layers: Vec<u32> = windows
        .iter()
        .map(|w| manager.read().stack_layer(&w.id).unwrap_or(1))
        .collect();

    rsx! {
        div {
            class: "window-canvas",
            style: "{CANVAS_STYLE}",
            onclick: move |_| on_background_click.call(()),

            DesktopIcons { apps, on_open_app }

            // Every window stays mounted; minimized frames hide themselves.
            for (window, layer) in windows.into_iter().zip(layers) {
                WindowFrame {
                    key: "{window.id}",
                    is_active: active_window.as_ref() == Some(&window.id),
                    layer,
                    window: window.clone(),
                    viewport: viewport_value,
                    on_close,
                    on_focus,
                    on_move,
                    on_minimize,
                    on_maximize,
                }
            }
        }
    }
}
