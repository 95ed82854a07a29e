use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::DesktopConfig;
use crate::desktop::theme::{
    apply_theme_to_document, get_cached_theme_preference, DEFAULT_THEME,
};
use crate::interop::{clock_label, current_viewport_size};
use crate::storage::SharedStore;

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

pub fn initialize_theme(
    store: &SharedStore,
    config: &DesktopConfig,
    mut theme_initialized: Signal<bool>,
    mut current_theme: Signal<String>,
) {
    if theme_initialized() {
        return;
    }
    theme_initialized.set(true);

    let theme = get_cached_theme_preference(store.as_ref(), config)
        .unwrap_or_else(|| DEFAULT_THEME.to_string());
    apply_theme_to_document(&theme);
    current_theme.set(theme);
}

/// Refreshes the taskbar clock once per second for the lifetime of the shell.
pub async fn run_clock(mut clock: Signal<String>) {
    loop {
        let next = clock_label();
        if *clock.peek() != next {
            clock.set(next);
        }
        TimeoutFuture::new(1_000).await;
    }
}
