pub mod components;
pub mod config;
pub mod desktop;
pub mod desktop_window;
pub mod interop;
pub mod storage;

pub use components::*;
pub use config::DesktopConfig;
pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
pub use storage::*;
