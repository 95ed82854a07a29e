use dioxus::prelude::{Signal, WritableExt};
use dioxus_logger::tracing::{debug, info};
use shared_types::{AppKind, WindowId};

use crate::desktop::state::{StartMenuState, WindowManager};

pub fn open_app_window(mut manager: Signal<WindowManager>, kind: AppKind) -> WindowId {
    let id = manager.write().open(kind);
    info!("Opened {} window {}", kind, id);
    id
}

pub fn close_window_action(mut manager: Signal<WindowManager>, window_id: WindowId) {
    manager.write().close(&window_id);
    debug!("Closed window {}", window_id);
}

pub fn focus_window_action(mut manager: Signal<WindowManager>, window_id: WindowId) {
    manager.write().focus(&window_id);
}

pub fn minimize_window_action(mut manager: Signal<WindowManager>, window_id: WindowId) {
    manager.write().toggle_minimize(&window_id);
    debug!("Toggled minimize on {}", window_id);
}

pub fn maximize_window_action(mut manager: Signal<WindowManager>, window_id: WindowId) {
    manager.write().toggle_maximize(&window_id);
    debug!("Toggled maximize on {}", window_id);
}

pub fn move_window_action(mut manager: Signal<WindowManager>, window_id: WindowId, x: i32, y: i32) {
    manager.write().reposition(&window_id, x, y);
    debug!("Moved window {} to ({}, {})", window_id, x, y);
}

pub fn taskbar_activate_action(mut manager: Signal<WindowManager>, window_id: WindowId) {
    manager.write().activate_from_taskbar(&window_id);
}

/// Opens the About window on first load when nothing else is open.
pub fn open_welcome_window(mut manager: Signal<WindowManager>) {
    // Writes do not subscribe, so the caller's effect runs once.
    if let Some(id) = manager.write().open_welcome_if_empty() {
        info!("Opened welcome window {}", id);
    }
}

pub fn launch_from_start_menu(
    mut manager: Signal<WindowManager>,
    mut menu: Signal<StartMenuState>,
    kind: AppKind,
) -> WindowId {
    let id = manager.write().launch(kind, &mut menu.write());
    info!("Launched {} window {} from the start menu", kind, id);
    id
}
