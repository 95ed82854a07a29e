//! Shared types for the Web Windows desktop
//!
//! These types describe:
//! - the closed set of hosted applications and their window defaults
//! - the per-window state owned by the window manager
//! - the records the file browser persists to key-value storage
//!
//! Serializable with serde so they can be stored as JSON strings.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Applications
// ============================================================================

/// Hosted application kind. The set is closed; every window runs exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Notepad,
    Terminal,
    Files,
    About,
}

impl AppKind {
    /// Launch order used by the desktop icons and the start menu.
    pub const ALL: [AppKind; 4] = [
        AppKind::Notepad,
        AppKind::Terminal,
        AppKind::Files,
        AppKind::About,
    ];

    /// Stable lowercase identifier, also used in storage keys and ids.
    pub fn slug(self) -> &'static str {
        match self {
            AppKind::Notepad => "notepad",
            AppKind::Terminal => "terminal",
            AppKind::Files => "files",
            AppKind::About => "about",
        }
    }

    /// Window title assigned at creation.
    pub fn title(self) -> &'static str {
        match self {
            AppKind::Notepad => "Notepad",
            AppKind::Terminal => "Terminal",
            AppKind::Files => "Files",
            AppKind::About => "About Web Windows",
        }
    }

    /// Short label for launchers.
    pub fn label(self) -> &'static str {
        match self {
            AppKind::About => "About",
            other => other.title(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppKind::Notepad => "📝",
            AppKind::Terminal => "💻",
            AppKind::Files => "🗂️",
            AppKind::About => "ℹ️",
        }
    }

    /// Window size a new instance opens with.
    pub fn default_size(self) -> Size {
        match self {
            AppKind::Notepad => Size::new(720, 480),
            AppKind::Terminal => Size::new(700, 420),
            AppKind::Files => Size::new(820, 520),
            AppKind::About => Size::new(520, 360),
        }
    }

    pub fn definition(self) -> AppDefinition {
        let size = self.default_size();
        AppDefinition {
            kind: self,
            name: self.label().to_string(),
            icon: self.icon().to_string(),
            default_width: size.width,
            default_height: size.height,
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Launcher entry for an application kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppDefinition {
    pub kind: AppKind,
    pub name: String,
    pub icon: String, // emoji
    pub default_width: i32,
    pub default_height: i32,
}

// ============================================================================
// Window State
// ============================================================================

/// Unique identifier for an open window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(kind: AppKind) -> Self {
        Self(format!("{}-{}", kind.slug(), uuid::Uuid::new_v4().simple()))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Individual window state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowState {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub minimized: bool,
    pub maximized: bool,
    /// Stacking order; higher is more front
    pub z_index: u32,
    /// Top-left corner, ignored while maximized
    pub position: Position,
    pub size: Size,
}

// ============================================================================
// Stored Documents
// ============================================================================

/// File record kept by the Files app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl StoredFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            name: name.into(),
            content: String::new(),
        }
    }

    /// Character count shown in the file list, never below one.
    pub fn display_len(&self) -> usize {
        self.content.chars().count().max(1)
    }
}

// ============================================================================
// Tests
// ============================================================================
