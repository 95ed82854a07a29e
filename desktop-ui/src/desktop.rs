//! Desktop foundation: window manager state, shell layout and theme.

use dioxus::prelude::*;

mod actions;
mod apps;
mod components;
mod effects;
mod shell;
pub mod state;
mod theme;

pub use shell::DesktopShell;
pub use state::WindowManager;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
