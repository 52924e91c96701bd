use std::fmt;

use desktop_app_contract::InstanceState;
use serde::{Deserialize, Serialize};

use crate::{apps::AppRegistry, config::DesktopConfig, shell_context::ShellContext, store::WindowStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of application bodies the shell knows how to mount.
///
/// Ids outside the set are kept verbatim in [`AppKind::Unknown`] so the shell can still open a
/// window for them and render a placeholder body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppKind {
    Settings,
    FileExplorer,
    Calculator,
    Notepad,
    Unknown(String),
}

impl AppKind {
    pub const BUILT_IN: [AppKind; 4] = [
        AppKind::Settings,
        AppKind::FileExplorer,
        AppKind::Calculator,
        AppKind::Notepad,
    ];

    pub fn from_id(raw: &str) -> Self {
        match raw {
            "settings" => Self::Settings,
            "fileexplorer" => Self::FileExplorer,
            "calculator" => Self::Calculator,
            "notepad" => Self::Notepad,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Settings => "settings",
            Self::FileExplorer => "fileexplorer",
            Self::Calculator => "calculator",
            Self::Notepad => "notepad",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn default_title(&self) -> &str {
        match self {
            Self::Settings => "Settings",
            Self::FileExplorer => "File Explorer",
            Self::Calculator => "Calculator",
            Self::Notepad => "Notepad",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Top-left anchored window origin, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Delta travelled from `origin` to `self`.
    pub fn delta_from(self, origin: PointerPosition) -> PointerDelta {
        PointerDelta {
            dx: self.x.saturating_sub(origin.x),
            dy: self.y.saturating_sub(origin.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn includes_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn includes_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn includes_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn includes_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

/// Viewport area available to windows; `chrome_height` is the taskbar strip at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBounds {
    pub width: i32,
    pub height: i32,
    pub chrome_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_kind: AppKind,
    pub title: String,
    /// Restorable geometry; overwritten with the maximized bounds while maximized.
    pub rect: WindowRect,
    /// Pre-maximize snapshot. `Some` exactly when `maximized` is set.
    pub restore_rect: Option<WindowRect>,
    pub maximized: bool,
    pub minimized: bool,
    pub z_index: u64,
    pub instance_state: InstanceState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_kind: AppKind,
    pub title: Option<String>,
    pub instance_state: Option<InstanceState>,
}

impl OpenWindowRequest {
    pub fn new(app_kind: AppKind) -> Self {
        Self {
            app_kind,
            title: None,
            instance_state: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Everything the shell renders from: the window store plus chrome and shell-context state.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub store: WindowStore,
    pub registry: AppRegistry,
    pub shell: ShellContext,
    pub start_menu_open: bool,
}

impl DesktopState {
    pub fn new(config: &DesktopConfig) -> Self {
        Self::with_store(config, WindowStore::new(config.store_config()))
    }

    /// Builds state around a caller-provided store (seeded stores in tests).
    pub fn with_store(config: &DesktopConfig, store: WindowStore) -> Self {
        Self {
            store,
            registry: AppRegistry::from_config(config),
            shell: ShellContext::new(config.profile.clone().into()),
            start_menu_open: false,
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.store.topmost()
    }
}
