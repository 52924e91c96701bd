//! Serialized shape of `desktop.toml` and the limits every config must respect.
//!
//! Compiled into the crate and into `build.rs`, so the build-time check and the runtime check
//! are the same code.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSettings {
    pub taskbar_height: i32,
    /// May raise the floor above [`MIN_WINDOW_WIDTH`], never lower it.
    pub min_window_width: i32,
    /// May raise the floor above [`MIN_WINDOW_HEIGHT`], never lower it.
    pub min_window_height: i32,
    pub default_window_width: i32,
    pub default_window_height: i32,
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,
    pub initial_z_order: u64,
    pub fallback_workspace_width: i32,
    pub fallback_workspace_height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalogEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub pinned: bool,
    pub in_start_menu: bool,
    pub on_desktop: bool,
    pub single_instance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub shell: ShellSettings,
    pub profile: ProfileSettings,
    pub apps: Vec<AppCatalogEntry>,
}

/// Checks `config` against the shell's limits, returning the first violation.
pub fn check_limits(config: &DesktopConfig) -> Result<(), String> {
    let shell = &config.shell;
    if shell.min_window_width < MIN_WINDOW_WIDTH || shell.min_window_height < MIN_WINDOW_HEIGHT {
        return Err(format!(
            "minimum window size must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}"
        ));
    }
    if shell.default_window_width < shell.min_window_width
        || shell.default_window_height < shell.min_window_height
    {
        return Err("default window size is below the minimum".to_string());
    }
    if shell.spawn_x_min > shell.spawn_x_max || shell.spawn_y_min > shell.spawn_y_max {
        return Err("spawn band is inverted".to_string());
    }
    if shell.taskbar_height < 0 {
        return Err("taskbar height must not be negative".to_string());
    }

    let mut seen = BTreeSet::new();
    for app in &config.apps {
        if app.id.trim().is_empty() {
            return Err("app id must not be empty".to_string());
        }
        if !seen.insert(app.id.as_str()) {
            return Err(format!("duplicate app id `{}`", app.id));
        }
    }
    Ok(())
}
