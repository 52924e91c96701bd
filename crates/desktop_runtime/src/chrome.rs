//! Headless shell chrome: the taskbar partition and launcher decisions.
//!
//! Chrome only ever issues open/focus/restore requests; it never touches geometry.

use crate::{
    apps::AppRegistry,
    model::{AppKind, WindowId},
    store::WindowStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedButton {
    pub kind: AppKind,
    pub label: String,
    pub icon: String,
    /// At least one open, non-minimized window of this kind exists.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizedButton {
    pub window_id: WindowId,
    pub title: String,
    pub kind: AppKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry {
    pub window_id: WindowId,
    pub title: String,
    pub kind: AppKind,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskbarModel {
    pub pinned: Vec<PinnedButton>,
    pub minimized: Vec<MinimizedButton>,
    pub visible: Vec<VisibleEntry>,
}

pub fn build_taskbar_model(store: &WindowStore, registry: &AppRegistry) -> TaskbarModel {
    let active = store.active_kinds();
    let focused = store.topmost();

    let pinned = registry
        .pinned()
        .map(|entry| PinnedButton {
            kind: entry.kind.clone(),
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            active: active.contains(&entry.kind),
        })
        .collect();

    let minimized = store
        .minimized()
        .into_iter()
        .map(|window| MinimizedButton {
            window_id: window.id,
            title: window.title.clone(),
            kind: window.app_kind.clone(),
        })
        .collect();

    let visible = store
        .snapshot()
        .into_iter()
        .map(|window| VisibleEntry {
            window_id: window.id,
            focused: Some(window.id) == focused,
            title: window.title,
            kind: window.app_kind,
        })
        .collect();

    TaskbarModel {
        pinned,
        minimized,
        visible,
    }
}

/// Window a launcher should bring forward for `kind`: the topmost visible one, else the most
/// recently stacked minimized one.
pub fn preferred_window_for_kind(store: &WindowStore, kind: &AppKind) -> Option<WindowId> {
    let mut candidates: Vec<_> = store.windows_of_kind(kind).collect();
    candidates.sort_by_key(|window| (!window.minimized, window.z_index));
    candidates.last().map(|window| window.id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::DesktopConfig, store::StoreConfig};

    fn fixtures() -> (WindowStore, AppRegistry) {
        (
            WindowStore::with_seed(StoreConfig::default(), 11),
            AppRegistry::from_config(&DesktopConfig::default()),
        )
    }

    #[test]
    fn pinned_buttons_are_active_only_for_visible_windows() {
        let (mut store, registry) = fixtures();
        store.open(AppKind::Calculator, "Calculator", None);
        let explorer = store.open(AppKind::FileExplorer, "File Explorer", None);
        store.minimize(explorer);

        let model = build_taskbar_model(&store, &registry);
        let active: Vec<(AppKind, bool)> = model
            .pinned
            .iter()
            .map(|button| (button.kind.clone(), button.active))
            .collect();
        assert_eq!(
            active,
            vec![
                (AppKind::Settings, false),
                (AppKind::FileExplorer, false),
                (AppKind::Calculator, true),
            ]
        );
        assert_eq!(
            model.minimized,
            vec![MinimizedButton {
                window_id: explorer,
                title: "File Explorer".to_string(),
                kind: AppKind::FileExplorer,
            }]
        );
    }

    #[test]
    fn visible_entries_follow_stacking_and_mark_topmost_focused() {
        let (mut store, registry) = fixtures();
        let a = store.open(AppKind::Notepad, "A", None);
        let b = store.open(AppKind::Notepad, "B", None);
        store.focus(a);

        let model = build_taskbar_model(&store, &registry);
        let order: Vec<(WindowId, bool)> = model
            .visible
            .iter()
            .map(|entry| (entry.window_id, entry.focused))
            .collect();
        assert_eq!(order, vec![(b, false), (a, true)]);
    }

    #[test]
    fn preferred_window_prefers_visible_over_minimized() {
        let (mut store, _) = fixtures();
        let visible = store.open(AppKind::Notepad, "Visible", None);
        let hidden = store.open(AppKind::Notepad, "Hidden", None);
        store.minimize(hidden);

        assert_eq!(
            preferred_window_for_kind(&store, &AppKind::Notepad),
            Some(visible)
        );
        store.minimize(visible);
        assert_eq!(
            preferred_window_for_kind(&store, &AppKind::Notepad),
            Some(hidden)
        );
        assert_eq!(preferred_window_for_kind(&store, &AppKind::Settings), None);
    }
}
