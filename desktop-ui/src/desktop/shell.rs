use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use shared_types::{AppKind, WindowId};

use crate::config::DesktopConfig;
use crate::desktop::actions;
use crate::desktop::apps::core_apps;
use crate::desktop::components::{StartMenu, Taskbar, WorkspaceCanvas};
use crate::desktop::effects;
use crate::desktop::state::{StartMenuState, WindowManager};
use crate::desktop::theme::{
    apply_theme_to_document, next_theme, set_cached_theme_preference, DEFAULT_THEME,
};
use crate::interop::{clock_label, get_viewport_size};
use crate::storage::{default_store, SharedStore};

#[component]
pub fn DesktopShell() -> Element {
    let store: SharedStore = use_context_provider(default_store);
    let config = use_context_provider(|| DesktopConfig::load(store.as_ref()));

    let manager = use_signal(|| WindowManager::new(&config));
    let viewport = use_signal(get_viewport_size);
    let theme_initialized = use_signal(|| false);
    let mut current_theme = use_signal(|| DEFAULT_THEME.to_string());
    let clock = use_signal(clock_label);
    let mut start_menu = use_signal(StartMenuState::default);

    use_hook(|| {
        info!(
            "Desktop starting (storage prefix '{}', taskbar {}px)",
            config.storage_prefix, config.taskbar_height
        );
    });

    use_effect(move || actions::open_welcome_window(manager));

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        spawn(async move {
            effects::run_clock(clock).await;
        });
    });

    {
        let store = store.clone();
        let config = config.clone();
        use_effect(move || {
            effects::initialize_theme(&store, &config, theme_initialized, current_theme);
        });
    }

    use_effect(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = document.body() {
            let _ = body.set_attribute(
                "style",
                "margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; overscroll-behavior: none;",
            );
        }
    });

    let toggle_theme = {
        let store = store.clone();
        let config = config.clone();
        use_callback(move |_| {
            let next = next_theme(&current_theme());
            current_theme.set(next.clone());
            apply_theme_to_document(&next);
            set_cached_theme_preference(store.as_ref(), &config, &next);
        })
    };

    let open_app_window = use_callback(move |kind: AppKind| {
        actions::open_app_window(manager, kind);
    });

    let launch_app = use_callback(move |kind: AppKind| {
        actions::launch_from_start_menu(manager, start_menu, kind);
    });

    let close_window_cb = use_callback(move |window_id: WindowId| {
        actions::close_window_action(manager, window_id);
    });

    let focus_window_cb = use_callback(move |window_id: WindowId| {
        actions::focus_window_action(manager, window_id);
    });

    let move_window_cb = use_callback(move |(window_id, x, y): (WindowId, i32, i32)| {
        actions::move_window_action(manager, window_id, x, y);
    });

    let minimize_window_cb = use_callback(move |window_id: WindowId| {
        actions::minimize_window_action(manager, window_id);
    });

    let maximize_window_cb = use_callback(move |window_id: WindowId| {
        actions::maximize_window_action(manager, window_id);
    });

    let taskbar_activate_cb = use_callback(move |window_id: WindowId| {
        actions::taskbar_activate_action(manager, window_id);
        start_menu.write().dismiss();
    });

    let toggle_start = use_callback(move |_| start_menu.write().toggle());

    let hide_start = use_callback(move |_| {
        if start_menu.peek().is_open() {
            start_menu.write().dismiss();
        }
    });

    let core_apps = core_apps();
    let windows = manager.read().windows().to_vec();
    let active_window = manager.read().front_window().map(|w| w.id.clone());
    let taskbar_height = config.taskbar_height;
    let menu_open = start_menu.read().is_open();

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "width: 100vw; height: 100dvh; display: flex; flex-direction: column; overflow: hidden; position: relative;",

            WorkspaceCanvas {
                apps: core_apps.clone(),
                manager,
                viewport,
                on_open_app: open_app_window,
                on_background_click: hide_start,
                on_close: close_window_cb,
                on_focus: focus_window_cb,
                on_move: move_window_cb,
                on_minimize: minimize_window_cb,
                on_maximize: maximize_window_cb,
            }

            if menu_open {
                StartMenu {
                    apps: core_apps,
                    bottom: taskbar_height + 6,
                    on_launch: launch_app,
                }
            }

            Taskbar {
                height: taskbar_height,
                windows,
                active_window,
                start_open: menu_open,
                on_toggle_start: toggle_start,
                on_activate_window: taskbar_activate_cb,
                clock: clock(),
                current_theme: current_theme(),
                on_toggle_theme: toggle_theme,
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    --desktop-bg: linear-gradient(160deg, #3a7bd5 0%, #00d2ff 100%);
    --desktop-text: #ffffff;
    --body-bg: #f1f5f9;
    --window-bg: #ffffff;
    --titlebar-bg: #e2e8f0;
    --titlebar-text: #0f172a;
    --taskbar-bg: rgba(241, 245, 249, 0.92);
    --toolbar-bg: #f8fafc;
    --panel-bg: #f8fafc;
    --card-bg: #ffffff;
    --icon-bg: rgba(255, 255, 255, 0.25);
    --control-bg: #ffffff;
    --input-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.08);
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;
    --danger-bg: #dc2626;

    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    --shadow-lg: 0 10px 40px rgba(15, 23, 42, 0.25);
}

:root[data-theme="dark"] {
    --desktop-bg: linear-gradient(160deg, #0f172a 0%, #1e3a8a 100%);
    --desktop-text: #e2e8f0;
    --body-bg: #0f172a;
    --window-bg: #1e293b;
    --titlebar-bg: #0f172a;
    --titlebar-text: #f8fafc;
    --taskbar-bg: rgba(15, 23, 42, 0.92);
    --toolbar-bg: #172033;
    --panel-bg: #172033;
    --card-bg: #1e293b;
    --icon-bg: rgba(30, 41, 59, 0.6);
    --control-bg: #1e293b;
    --input-bg: #0f172a;
    --hover-bg: rgba(255, 255, 255, 0.1);
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #94a3b8;
    --accent-bg: #3b82f6;
    --accent-text: #ffffff;
    --border-color: #334155;
    --danger-bg: #ef4444;
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--body-bg);
    color: var(--text-primary);
}

.desktop-icon:hover div {
    transform: scale(1.05);
}

.taskbar-entry:hover,
.start-menu-item:hover,
.win-btn:hover {
    filter: brightness(0.95);
}

.window-close:hover {
    background: var(--danger-bg) !important;
    color: #ffffff !important;
}

.win-btn:disabled {
    opacity: 0.5;
    cursor: default;
}
"#;
