//! Desktop configuration: shell limits, default profile, and the app catalog.
//!
//! `desktop.toml` is validated at build time and embedded as JSON; [`DesktopConfig::builtin`]
//! decodes it at startup and falls back to the compiled-in defaults if that ever fails.

mod schema;

use leptos::logging;
use thiserror::Error;

pub use schema::{
    AppCatalogEntry, DesktopConfig, ProfileSettings, ShellSettings, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};

use crate::{
    geometry::MinimumSize,
    model::WorkspaceBounds,
    shell_context::UserProfile,
    stacking::DEFAULT_INITIAL_Z_ORDER,
    store::{StoreConfig, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH},
};

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("desktop config is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid desktop config: {0}")]
    Invalid(String),
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            taskbar_height: 48,
            min_window_width: MIN_WINDOW_WIDTH,
            min_window_height: MIN_WINDOW_HEIGHT,
            default_window_width: DEFAULT_WINDOW_WIDTH,
            default_window_height: DEFAULT_WINDOW_HEIGHT,
            spawn_x_min: 100,
            spawn_x_max: 300,
            spawn_y_min: 50,
            spawn_y_max: 150,
            initial_z_order: DEFAULT_INITIAL_Z_ORDER,
            fallback_workspace_width: 1280,
            fallback_workspace_height: 800,
        }
    }
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Guest User".to_string(),
            email: "guest@desktop.local".to_string(),
        }
    }
}

impl From<ProfileSettings> for UserProfile {
    fn from(profile: ProfileSettings) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
        }
    }
}

impl AppCatalogEntry {
    fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            pinned: false,
            in_start_menu: false,
            on_desktop: true,
            single_instance: false,
        }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let mut settings = AppCatalogEntry::new("settings", "Settings", "⚙");
        settings.pinned = true;
        settings.in_start_menu = true;
        settings.single_instance = true;
        let mut explorer = AppCatalogEntry::new("fileexplorer", "File Explorer", "📁");
        explorer.pinned = true;
        explorer.in_start_menu = true;
        let mut calculator = AppCatalogEntry::new("calculator", "Calculator", "🖩");
        calculator.pinned = true;
        calculator.single_instance = true;
        let mut notepad = AppCatalogEntry::new("notepad", "Notepad", "📝");
        notepad.in_start_menu = true;

        Self {
            shell: ShellSettings::default(),
            profile: ProfileSettings::default(),
            apps: vec![settings, explorer, calculator, notepad],
        }
    }
}

impl DesktopConfig {
    /// Decodes and validates a JSON-encoded config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] for malformed JSON and [`ConfigError::Invalid`] when a
    /// value violates the shell's limits.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded build-time config, or the defaults if it cannot be decoded.
    pub fn builtin() -> Self {
        match Self::from_json(DESKTOP_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("desktop config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Caller-supplied override if it passes validation, otherwise [`DesktopConfig::builtin`].
    pub fn resolve(config: Option<Self>) -> Self {
        let Some(config) = config else {
            return Self::builtin();
        };
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logging::warn!("desktop config override rejected, using built-in: {err}");
                Self::builtin()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first limit the config violates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        schema::check_limits(self).map_err(ConfigError::Invalid)
    }

    pub fn store_config(&self) -> StoreConfig {
        let shell = &self.shell;
        StoreConfig {
            min_size: MinimumSize {
                width: shell.min_window_width,
                height: shell.min_window_height,
            },
            default_width: shell.default_window_width,
            default_height: shell.default_window_height,
            spawn_x: (shell.spawn_x_min, shell.spawn_x_max),
            spawn_y: (shell.spawn_y_min, shell.spawn_y_max),
            initial_z_order: shell.initial_z_order,
        }
    }

    /// Workspace used when the host cannot report a viewport size.
    pub fn fallback_workspace(&self) -> WorkspaceBounds {
        WorkspaceBounds {
            width: self.shell.fallback_workspace_width,
            height: self.shell.fallback_workspace_height,
            chrome_height: self.shell.taskbar_height,
        }
    }
}
