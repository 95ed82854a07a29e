use chrono::Local;
use web_sys::window;

/// Get the browser viewport dimensions.
///
/// Falls back to the document element size when `innerWidth`/`innerHeight`
/// report zero, and to a 1280x800 desktop when no window is reachable.
pub fn get_viewport_size() -> (u32, u32) {
    current_viewport_size().unwrap_or((1280, 800))
}

pub fn current_viewport_size() -> Option<(u32, u32)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

/// Taskbar clock text, `HH:MM` in local time.
pub fn clock_label() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Long-form local timestamp printed by the terminal `date` command.
pub fn date_label() -> String {
    Local::now().format("%a %b %d %Y %H:%M:%S %:z").to_string()
}
