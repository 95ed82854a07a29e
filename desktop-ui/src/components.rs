pub mod about;
pub mod files;
pub mod notepad;
pub mod styles;
pub mod terminal;

pub use about::AboutView;
pub use files::{FileLibrary, FilesView};
pub use notepad::NotepadView;
pub use terminal::{ShellSession, TerminalView};
