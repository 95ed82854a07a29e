use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use shared_types::{AppKind, Position, WindowId, WindowState};
use wasm_bindgen::JsCast;

use crate::components::{AboutView, FilesView, NotepadView, TerminalView};
use crate::config::DesktopConfig;

const DRAG_THRESHOLD_PX: i32 = 4;
const KEYBOARD_STEP_PX: i32 = 10;

/// Allowed range for a window's top-left corner while it is dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl DragBounds {
    pub fn for_viewport(viewport: (u32, u32), config: &DesktopConfig) -> Self {
        let (vw, vh) = viewport;
        Self {
            max_x: (vw as i32 - config.drag_margin_right).max(0),
            max_y: (vh as i32 - config.taskbar_height - config.drag_margin_bottom).max(0),
        }
    }

    /// Keeps the title bar reachable: never above or left of the canvas, never
    /// pushed past the right edge or under the taskbar.
    pub fn clamp(self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.max_x),
            position.y.clamp(0, self.max_y),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    pointer_id: i32,
    start_x: i32,
    start_y: i32,
    start_position: Position,
    moved: bool,
}

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.closest(".window-controls").ok().flatten().is_some())
        .unwrap_or(false)
}

fn frame_element(e: &PointerEvent) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".window-frame").ok().flatten())
}

fn capture_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(frame) = frame_element(e) {
        let _ = frame.set_pointer_capture(pointer_id);
    }
}

fn release_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(frame) = frame_element(e) {
        let _ = frame.release_pointer_capture(pointer_id);
    }
}

#[component]
pub fn WindowFrame(
    window: WindowState,
    is_active: bool,
    layer: u32,
    viewport: (u32, u32),
    on_close: Callback<WindowId>,
    on_focus: Callback<WindowId>,
    on_move: Callback<(WindowId, i32, i32)>,
    on_minimize: Callback<WindowId>,
    on_maximize: Callback<WindowId>,
) -> Element {
    let config = use_context::<DesktopConfig>();
    let bounds = DragBounds::for_viewport(viewport, &config);

    let mut drag = use_signal(|| None::<DragState>);
    let mut live_position = use_signal(|| None::<Position>);

    let position = live_position().unwrap_or_else(|| bounds.clamp(window.position));
    let maximized = window.maximized;
    let z_index = layer;
    let active_shadow = if is_active {
        "0 12px 40px rgba(11, 42, 91, 0.45)"
    } else {
        "0 6px 18px rgba(11, 42, 91, 0.2)"
    };
    // Minimized windows stay mounted so app state survives a restore.
    let display = if window.minimized { "none" } else { "flex" };
    let frame_style = if maximized {
        format!(
            "position: absolute; left: 0; top: 0; width: 100%; height: 100%; z-index: {z_index}; \
             display: {display}; flex-direction: column; background: var(--window-bg); border: none; \
             border-radius: 0; overflow: hidden;"
        )
    } else {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: \
             {z_index}; display: {display}; flex-direction: column; background: var(--window-bg); \
             border: 1px solid var(--border-color); border-radius: var(--radius-md, 8px); \
             overflow: hidden; box-shadow: {active_shadow};",
            position.x, position.y, window.size.width, window.size.height
        )
    };

    let id_for_focus = window.id.clone();
    let id_for_keyboard = window.id.clone();
    let id_for_pointer_move = window.id.clone();
    let id_for_pointer_up = window.id.clone();
    let id_for_title_pointer = window.id.clone();
    let id_for_title_double = window.id.clone();
    let id_for_controls = window.id.clone();

    let on_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::F4 && modifiers.alt() {
            e.prevent_default();
            on_close.call(id_for_keyboard.clone());
            return;
        }

        if key == Key::Escape {
            if drag().is_some() {
                e.prevent_default();
                live_position.set(None);
                drag.set(None);
            }
            return;
        }

        // Shift reports the key as "M".
        let is_m = matches!(&key, Key::Character(c) if c.eq_ignore_ascii_case("m"));
        if is_m && modifiers.ctrl() {
            e.prevent_default();
            if modifiers.shift() {
                on_maximize.call(id_for_keyboard.clone());
            } else {
                on_minimize.call(id_for_keyboard.clone());
            }
            return;
        }

        if modifiers.alt() && !maximized {
            let mut next = position;
            match key {
                Key::ArrowLeft => next.x -= KEYBOARD_STEP_PX,
                Key::ArrowRight => next.x += KEYBOARD_STEP_PX,
                Key::ArrowUp => next.y -= KEYBOARD_STEP_PX,
                Key::ArrowDown => next.y += KEYBOARD_STEP_PX,
                _ => return,
            }
            e.prevent_default();
            let next = bounds.clamp(next);
            on_move.call((id_for_keyboard.clone(), next.x, next.y));
        }
    };

    let mut finish_drag = move |id: WindowId| {
        if let Some(active) = drag() {
            if active.moved {
                if let Some(final_position) = live_position() {
                    on_move.call((id, final_position.x, final_position.y));
                }
            }
        }
        live_position.set(None);
        drag.set(None);
    };

    rsx! {
        div {
            class: if is_active { "window-frame active" } else { "window-frame" },
            role: "dialog",
            "aria-label": window.title.clone(),
            tabindex: "0",
            style: "{frame_style}",
            onmousedown: move |_| {
                if !is_active {
                    on_focus.call(id_for_focus.clone());
                }
            },
            onkeydown: on_keydown,
            onpointermove: move |e| {
                let Some(mut active) = drag() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }

                // Capture can be lost across browser focus changes; a move with no
                // buttons held ends the drag instead of leaving it stuck.
                if pointer_buttons(&e) == 0 {
                    finish_drag(id_for_pointer_move.clone());
                    return;
                }

                let (client_x, client_y) = pointer_point(&e);
                let dx = client_x - active.start_x;
                let dy = client_y - active.start_y;
                if !active.moved && dx.abs() < DRAG_THRESHOLD_PX && dy.abs() < DRAG_THRESHOLD_PX {
                    return;
                }

                active.moved = true;
                drag.set(Some(active));
                live_position.set(Some(bounds.clamp(Position::new(
                    active.start_position.x + dx,
                    active.start_position.y + dy,
                ))));
            },
            onpointerup: move |e| {
                let Some(active) = drag() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_pointer(&e, active.pointer_id);
                finish_drag(id_for_pointer_up.clone());
            },
            onpointercancel: move |e| {
                let Some(active) = drag() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_pointer(&e, active.pointer_id);
                live_position.set(None);
                drag.set(None);
            },

            div {
                class: "window-titlebar",
                style: if maximized {
                    "display: flex; align-items: center; gap: 0.5rem; height: 34px; padding: 0 0.5rem 0 0.75rem; background: var(--titlebar-bg); color: var(--titlebar-text); user-select: none; flex-shrink: 0;"
                } else {
                    "display: flex; align-items: center; gap: 0.5rem; height: 34px; padding: 0 0.5rem 0 0.75rem; background: var(--titlebar-bg); color: var(--titlebar-text); user-select: none; flex-shrink: 0; cursor: grab; touch-action: none;"
                },
                ondoubleclick: move |_| on_maximize.call(id_for_title_double.clone()),
                onpointerdown: move |e| {
                    if maximized || pointer_target_is_window_control(&e) {
                        return;
                    }
                    if !is_active {
                        on_focus.call(id_for_title_pointer.clone());
                    }
                    e.prevent_default();
                    let pointer_id = e.data().pointer_id();
                    capture_pointer(&e, pointer_id);

                    let (start_x, start_y) = pointer_point(&e);
                    drag.set(Some(DragState {
                        pointer_id,
                        start_x,
                        start_y,
                        start_position: position,
                        moved: false,
                    }));
                },

                span { style: "font-size: 1rem;", "{window.kind.icon()}" }
                div {
                    class: "window-title",
                    style: "flex: 1; font-weight: 600; font-size: 0.875rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{window.title}"
                }

                WindowControls {
                    window_id: id_for_controls,
                    maximized,
                    on_minimize,
                    on_maximize,
                    on_close,
                }
            }

            div {
                class: "window-body",
                style: "flex: 1; overflow: hidden; background: var(--body-bg); color: var(--text-primary);",

                match window.kind {
                    AppKind::Notepad => rsx! {
                        NotepadView { key: "{window.id}", window_id: window.id.clone() }
                    },
                    AppKind::Terminal => rsx! {
                        TerminalView { key: "{window.id}", window_id: window.id.clone() }
                    },
                    AppKind::Files => rsx! {
                        FilesView { key: "{window.id}", window_id: window.id.clone() }
                    },
                    AppKind::About => rsx! {
                        AboutView {}
                    },
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    window_id: WindowId,
    maximized: bool,
    on_minimize: Callback<WindowId>,
    on_maximize: Callback<WindowId>,
    on_close: Callback<WindowId>,
) -> Element {
    let id_for_minimize = window_id.clone();
    let id_for_maximize = window_id.clone();
    let id_for_close = window_id;
    let button_style = "width: 28px; height: 24px; display: flex; align-items: center; justify-content: center; background: var(--control-bg); color: var(--titlebar-text); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.875rem;";

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",
            ondoubleclick: move |e| e.stop_propagation(),

            button {
                class: "win-btn",
                style: "{button_style}",
                "aria-label": "Minimize",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(id_for_minimize.clone());
                },
                "—"
            }
            button {
                class: "win-btn",
                style: "{button_style}",
                "aria-label": if maximized { "Restore" } else { "Maximize" },
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_maximize.call(id_for_maximize.clone());
                },
                if maximized { "❐" } else { "□" }
            }
            button {
                class: "win-btn window-close",
                style: "{button_style}",
                "aria-label": "Close",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(id_for_close.clone());
                },
                "✕"
            }
        }
    }
}
