pub mod desktop_icons;
pub mod start_menu;
pub mod taskbar;
pub mod workspace_canvas;

pub use start_menu::StartMenu;
pub use taskbar::Taskbar;
pub use workspace_canvas::WorkspaceCanvas;
