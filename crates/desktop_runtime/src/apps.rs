//! App catalog and the closed `AppKind` → app body dispatch.

mod placeholders;

use desktop_app_contract::AppModule;

use crate::{
    config::DesktopConfig,
    model::{AppKind, OpenWindowRequest},
};

/// Catalog entry for one launchable app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    pub kind: AppKind,
    pub label: String,
    pub icon: String,
    /// Shown as a pinned taskbar button.
    pub pinned: bool,
    pub in_start_menu: bool,
    pub on_desktop: bool,
    /// Desktop-icon activation focuses an existing window instead of opening another.
    pub single_instance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppRegistry {
    entries: Vec<AppDescriptor>,
}

impl AppRegistry {
    pub fn from_config(config: &DesktopConfig) -> Self {
        let entries = config
            .apps
            .iter()
            .map(|entry| AppDescriptor {
                kind: AppKind::from_id(&entry.id),
                label: entry.label.clone(),
                icon: entry.icon.clone(),
                pinned: entry.pinned,
                in_start_menu: entry.in_start_menu,
                on_desktop: entry.on_desktop,
                single_instance: entry.single_instance,
            })
            .collect();
        Self { entries }
    }

    pub fn descriptor(&self, kind: &AppKind) -> Option<&AppDescriptor> {
        self.entries.iter().find(|entry| &entry.kind == kind)
    }

    /// Catalog label, or the kind's built-in title for uncatalogued kinds.
    pub fn label_for(&self, kind: &AppKind) -> String {
        self.descriptor(kind)
            .map(|entry| entry.label.clone())
            .unwrap_or_else(|| kind.default_title().to_string())
    }

    pub fn icon_for(&self, kind: &AppKind) -> &str {
        self.descriptor(kind)
            .map(|entry| entry.icon.as_str())
            .unwrap_or("□")
    }

    pub fn is_single_instance(&self, kind: &AppKind) -> bool {
        self.descriptor(kind)
            .map(|entry| entry.single_instance)
            .unwrap_or(false)
    }

    pub fn pinned(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter().filter(|entry| entry.pinned)
    }

    pub fn start_menu(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter().filter(|entry| entry.in_start_menu)
    }

    pub fn desktop_icons(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter().filter(|entry| entry.on_desktop)
    }

    /// Open request titled with the catalog label.
    pub fn open_request(&self, kind: &AppKind) -> OpenWindowRequest {
        OpenWindowRequest::new(kind.clone()).with_title(self.label_for(kind))
    }
}

/// Resolves the body mounted for `kind`. Unrecognized kinds get a visible placeholder.
pub fn app_module(kind: &AppKind) -> AppModule {
    match kind {
        AppKind::Settings => AppModule::new(placeholders::mount_settings_app),
        AppKind::FileExplorer => AppModule::new(placeholders::mount_file_explorer_app),
        AppKind::Calculator => AppModule::new(placeholders::mount_calculator_app),
        AppKind::Notepad => AppModule::new(placeholders::mount_notepad_app),
        AppKind::Unknown(_) => AppModule::new(placeholders::mount_unknown_app),
    }
}
