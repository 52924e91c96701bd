//! Canonical window collection and the operations that mutate it.
//!
//! Every mutation targeting an id that is no longer present is a silent no-op and reports `false`;
//! UI callbacks routinely race with closes and must never bring the shell down.

use std::{collections::BTreeSet, ops::RangeInclusive};

use desktop_app_contract::{merge_instance_state, InstanceState};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    geometry::{compute_maximized_bounds, MinimumSize},
    model::{AppKind, WindowId, WindowRecord, WindowRect, WorkspaceBounds},
    stacking::{StackingCounter, DEFAULT_INITIAL_Z_ORDER},
};

/// Default managed window width.
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
/// Default managed window height.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;

/// Store knobs, derived from [`crate::config::DesktopConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub min_size: MinimumSize,
    pub default_width: i32,
    pub default_height: i32,
    pub spawn_x: (i32, i32),
    pub spawn_y: (i32, i32),
    pub initial_z_order: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_size: MinimumSize::default(),
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            spawn_x: (100, 300),
            spawn_y: (50, 150),
            initial_z_order: DEFAULT_INITIAL_Z_ORDER,
        }
    }
}

/// Inclusive spawn range; a hand-built config may list the bounds in either order.
fn spawn_range((a, b): (i32, i32)) -> RangeInclusive<i32> {
    a.min(b)..=a.max(b)
}

#[derive(Debug, Clone)]
pub struct WindowStore {
    config: StoreConfig,
    windows: Vec<WindowRecord>,
    next_window_id: u64,
    stacking: StackingCounter,
    rng: SmallRng,
}

impl PartialEq for WindowStore {
    // Spawn RNG state is not part of observable store state.
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.windows == other.windows
            && self.next_window_id == other.next_window_id
            && self.stacking == other.stacking
    }
}

impl WindowStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Creates a store whose spawn positions are reproducible.
    pub fn with_seed(config: StoreConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: StoreConfig, rng: SmallRng) -> Self {
        Self {
            config,
            windows: Vec::new(),
            next_window_id: 1,
            stacking: StackingCounter::new(config.initial_z_order),
            rng,
        }
    }

    pub fn min_size(&self) -> MinimumSize {
        self.config.min_size
    }

    /// Next value the stacking counter will assign.
    pub fn stacking_value(&self) -> u64 {
        self.stacking.peek()
    }

    /// Opens a window with default geometry on top of the stack and returns its id.
    pub fn open(
        &mut self,
        app_kind: AppKind,
        title: impl Into<String>,
        initial_instance_state: Option<InstanceState>,
    ) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;

        let rect = WindowRect {
            x: self.rng.gen_range(spawn_range(self.config.spawn_x)),
            y: self.rng.gen_range(spawn_range(self.config.spawn_y)),
            w: self.config.default_width,
            h: self.config.default_height,
        };

        self.windows.push(WindowRecord {
            id,
            app_kind,
            title: title.into(),
            rect,
            restore_rect: None,
            maximized: false,
            minimized: false,
            z_index: self.stacking.advance(),
            instance_state: initial_instance_state.unwrap_or_default(),
        });
        id
    }

    /// Removes the window irrevocably.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        self.windows.len() != before
    }

    /// Hides the window without touching geometry or stacking.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        self.with_window(id, |window| window.minimized = true)
    }

    /// Un-hides the window and raises it like [`WindowStore::focus`].
    pub fn restore_from_minimized(&mut self, id: WindowId) -> bool {
        self.focus(id)
    }

    /// Enters maximize (snapshotting the current rect) or restores the exact snapshot.
    pub fn toggle_maximize(&mut self, id: WindowId, workspace: WorkspaceBounds) -> bool {
        self.with_window(id, |window| {
            if window.maximized {
                if let Some(prior) = window.restore_rect.take() {
                    window.rect = prior;
                }
                window.maximized = false;
            } else {
                window.restore_rect = Some(window.rect);
                window.rect = compute_maximized_bounds(workspace);
                window.maximized = true;
            }
        })
    }

    /// Raises the window to the top of the stack and un-minimizes it.
    ///
    /// Always consumes a stacking value, even when the window is already on top.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        window.z_index = self.stacking.advance();
        window.minimized = false;
        true
    }

    /// Overwrites the window origin. Off-screen coordinates are accepted.
    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        self.with_window(id, |window| {
            window.rect.x = x;
            window.rect.y = y;
        })
    }

    /// Overwrites the window size, flooring each axis at the configured minimum.
    pub fn resize_window(&mut self, id: WindowId, width: i32, height: i32) -> bool {
        let (w, h) = self.config.min_size.clamp(width, height);
        self.with_window(id, |window| {
            window.rect.w = w;
            window.rect.h = h;
        })
    }

    /// Shallow-merges `patch` into the window's instance state.
    pub fn update_instance_state(&mut self, id: WindowId, patch: InstanceState) -> bool {
        self.with_window(id, |window| merge_instance_state(&mut window.instance_state, patch))
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// All windows, minimized included, in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Visible windows in render order (lowest z first).
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        let mut visible: Vec<WindowRecord> = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Minimized windows in stacking order.
    pub fn minimized(&self) -> Vec<&WindowRecord> {
        let mut hidden: Vec<&WindowRecord> = self.windows.iter().filter(|w| w.minimized).collect();
        hidden.sort_by_key(|w| w.z_index);
        hidden
    }

    /// App kinds with at least one open, non-minimized window.
    pub fn active_kinds(&self) -> BTreeSet<AppKind> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .map(|w| w.app_kind.clone())
            .collect()
    }

    /// Visible window with the highest stacking value.
    pub fn topmost(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn windows_of_kind<'a>(
        &'a self,
        kind: &'a AppKind,
    ) -> impl Iterator<Item = &'a WindowRecord> + 'a {
        self.windows.iter().filter(move |w| &w.app_kind == kind)
    }

    /// Bounds the window is drawn at: the maximized area when maximized, `rect` otherwise.
    pub fn rendered_bounds(&self, id: WindowId, workspace: WorkspaceBounds) -> Option<WindowRect> {
        self.get(id).map(|window| {
            if window.maximized {
                compute_maximized_bounds(workspace)
            } else {
                window.rect
            }
        })
    }

    fn with_window(&mut self, id: WindowId, apply: impl FnOnce(&mut WindowRecord)) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) => {
                apply(window);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    const WORKSPACE: WorkspaceBounds = WorkspaceBounds {
        width: 1280,
        height: 800,
        chrome_height: 48,
    };

    fn store() -> WindowStore {
        WindowStore::with_seed(StoreConfig::default(), 7)
    }

    fn bag(value: Value) -> InstanceState {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn open_with_inverted_spawn_band_stays_inside_band() {
        let config = StoreConfig {
            spawn_x: (300, 100),
            spawn_y: (150, 50),
            ..StoreConfig::default()
        };
        let mut store = WindowStore::with_seed(config, 11);
        for _ in 0..16 {
            let id = store.open(AppKind::Notepad, "Notepad", None);
            let rect = store.get(id).map(|w| w.rect).expect("window");
            assert!((100..=300).contains(&rect.x));
            assert!((50..=150).contains(&rect.y));
        }
    }

    #[test]
    fn open_assigns_default_geometry_inside_spawn_band() {
        let mut store = store();
        for _ in 0..32 {
            let id = store.open(AppKind::Notepad, "Notepad", None);
            let window = store.get(id).expect("window");
            assert!((100..=300).contains(&window.rect.x));
            assert!((50..=150).contains(&window.rect.y));
            assert_eq!((window.rect.w, window.rect.h), (600, 400));
            assert!(!window.maximized && !window.minimized);
            assert!(window.restore_rect.is_none());
        }
    }

    #[test]
    fn focus_reorders_snapshot() {
        let mut store = store();
        let a = store.open(AppKind::Settings, "Settings", None);
        let b = store.open(AppKind::Calculator, "Calculator", None);
        assert_eq!(store.get(a).unwrap().z_index, 100);
        assert_eq!(store.get(b).unwrap().z_index, 101);

        assert!(store.focus(a));
        assert_eq!(store.get(a).unwrap().z_index, 102);
        let order: Vec<WindowId> = store.snapshot().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn focusing_topmost_consumes_counter_but_keeps_order() {
        let mut store = store();
        let a = store.open(AppKind::Settings, "A", None);
        let b = store.open(AppKind::Settings, "B", None);
        let before = store.stacking_value();

        store.focus(b);

        assert_eq!(store.stacking_value(), before + 1);
        let order: Vec<WindowId> = store.snapshot().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn minimize_hides_without_touching_geometry_or_z() {
        let mut store = store();
        let id = store.open(AppKind::Notepad, "Notes", None);
        let before = store.get(id).unwrap().clone();

        assert!(store.minimize(id));

        let after = store.get(id).unwrap();
        assert!(after.minimized);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.z_index, before.z_index);
        assert!(store.snapshot().is_empty());
        assert_eq!(store.minimized().len(), 1);
    }

    #[test]
    fn restore_from_minimized_raises_window() {
        let mut store = store();
        let a = store.open(AppKind::Notepad, "A", None);
        let b = store.open(AppKind::Notepad, "B", None);
        store.minimize(a);

        assert!(store.restore_from_minimized(a));

        let window = store.get(a).unwrap();
        assert!(!window.minimized);
        assert!(window.z_index > store.get(b).unwrap().z_index);
        assert_eq!(store.topmost(), Some(a));
    }

    #[test]
    fn toggle_maximize_snapshots_and_restores_exact_rect() {
        let mut store = store();
        let id = store.open(AppKind::FileExplorer, "Files", None);
        store.move_window(id, 20, 30);
        store.resize_window(id, 500, 350);
        let original = store.get(id).unwrap().rect;

        store.toggle_maximize(id, WORKSPACE);
        let window = store.get(id).unwrap();
        assert!(window.maximized);
        assert_eq!(
            window.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 752
            }
        );
        assert_eq!(window.restore_rect, Some(original));

        store.toggle_maximize(id, WORKSPACE);
        let window = store.get(id).unwrap();
        assert!(!window.maximized);
        assert_eq!(window.rect, original);
        assert_eq!(window.restore_rect, None);
    }

    #[test]
    fn maximized_window_can_be_minimized_and_keeps_full_screen_rect() {
        let mut store = store();
        let id = store.open(AppKind::FileExplorer, "Files", None);
        store.toggle_maximize(id, WORKSPACE);
        store.minimize(id);

        let window = store.get(id).unwrap();
        assert!(window.maximized && window.minimized);

        store.restore_from_minimized(id);
        assert_eq!(
            store.rendered_bounds(id, WORKSPACE),
            Some(compute_maximized_bounds(WORKSPACE))
        );
    }

    #[test]
    fn rendered_bounds_track_workspace_while_maximized() {
        let mut store = store();
        let id = store.open(AppKind::Calculator, "Calc", None);
        store.toggle_maximize(id, WORKSPACE);

        let larger = WorkspaceBounds {
            width: 1920,
            height: 1080,
            chrome_height: 48,
        };
        assert_eq!(
            store.rendered_bounds(id, larger),
            Some(WindowRect {
                x: 0,
                y: 0,
                w: 1920,
                h: 1032
            })
        );
    }

    #[test]
    fn resize_floors_each_axis() {
        let mut store = store();
        let id = store.open(AppKind::Calculator, "Calc", None);

        store.resize_window(id, -4000, 150);
        let rect = store.get(id).unwrap().rect;
        assert_eq!((rect.w, rect.h), (300, 200));

        store.resize_window(id, 900, 700);
        let rect = store.get(id).unwrap().rect;
        assert_eq!((rect.w, rect.h), (900, 700));
    }

    #[test]
    fn move_accepts_off_screen_coordinates() {
        let mut store = store();
        let id = store.open(AppKind::Calculator, "Calc", None);
        store.move_window(id, -5000, 9000);
        assert_eq!(store.get(id).unwrap().rect.origin().x, -5000);
        assert_eq!(store.get(id).unwrap().rect.origin().y, 9000);
    }

    #[test]
    fn instance_state_is_shallow_merged_and_survives_minimize() {
        let mut store = store();
        let id = store.open(
            AppKind::Notepad,
            "Notes",
            Some(bag(json!({ "draft": "", "file": "untitled.txt" }))),
        );

        store.update_instance_state(id, bag(json!({ "draft": "hello" })));
        store.minimize(id);
        store.restore_from_minimized(id);

        assert_eq!(
            Value::Object(store.get(id).unwrap().instance_state.clone()),
            json!({ "draft": "hello", "file": "untitled.txt" })
        );
    }

    #[test]
    fn operations_on_closed_window_are_noops() {
        let mut store = store();
        let id = store.open(AppKind::Notepad, "Notes", None);
        let other = store.open(AppKind::Settings, "Settings", None);
        assert!(store.close(id));
        let counter = store.stacking_value();
        let snapshot = store.clone();

        assert!(!store.close(id));
        assert!(!store.minimize(id));
        assert!(!store.restore_from_minimized(id));
        assert!(!store.toggle_maximize(id, WORKSPACE));
        assert!(!store.focus(id));
        assert!(!store.move_window(id, 1, 1));
        assert!(!store.resize_window(id, 1, 1));
        assert!(!store.update_instance_state(id, InstanceState::new()));

        assert_eq!(store, snapshot);
        assert_eq!(store.stacking_value(), counter);
        assert_eq!(store.rendered_bounds(id, WORKSPACE), None);
        assert!(store.get(other).is_some());
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut store = store();
        let first = store.open(AppKind::Notepad, "A", None);
        store.close(first);
        let second = store.open(AppKind::Notepad, "B", None);
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn active_kinds_ignore_minimized_windows() {
        let mut store = store();
        let notes = store.open(AppKind::Notepad, "Notes", None);
        store.open(AppKind::Calculator, "Calc", None);
        store.minimize(notes);

        let active = store.active_kinds();
        assert!(active.contains(&AppKind::Calculator));
        assert!(!active.contains(&AppKind::Notepad));
        assert_eq!(store.windows_of_kind(&AppKind::Notepad).count(), 1);
    }
}
