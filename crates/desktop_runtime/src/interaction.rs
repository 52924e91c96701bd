//! Pointer gesture state machine for window drag and edge/corner resize.
//!
//! At most one gesture is armed at a time; pointer-move events are routed to it until release.
//! Every armed gesture commits: there is no cancel path, so the last computed geometry stays.

use crate::{
    geometry::{compute_move, compute_resize},
    model::{PointerPosition, ResizeEdge, WindowId, WindowRect},
    store::WindowStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position at the previous tick; drag deltas are incremental.
    pub last_pointer: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    /// Resize deltas are cumulative from this press position.
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionController {
    state: GestureState,
}

impl InteractionController {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Window targeted by the armed gesture, if any.
    pub fn active_window(&self) -> Option<WindowId> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging(session) => Some(session.window_id),
            GestureState::Resizing(session) => Some(session.window_id),
        }
    }

    /// Arms a drag from a header press. Ignored for missing or maximized windows.
    pub fn begin_drag(
        &mut self,
        store: &mut WindowStore,
        window_id: WindowId,
        pointer: PointerPosition,
    ) -> bool {
        if !is_gesture_target(store, window_id) {
            return false;
        }
        store.focus(window_id);
        self.state = GestureState::Dragging(DragSession {
            window_id,
            last_pointer: pointer,
        });
        true
    }

    /// Arms a resize from an edge/corner press. Ignored for missing or maximized windows.
    pub fn begin_resize(
        &mut self,
        store: &mut WindowStore,
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> bool {
        if !is_gesture_target(store, window_id) {
            return false;
        }
        let Some(rect_start) = store.get(window_id).map(|w| w.rect) else {
            return false;
        };
        store.focus(window_id);
        self.state = GestureState::Resizing(ResizeSession {
            window_id,
            edge,
            pointer_start: pointer,
            rect_start,
        });
        true
    }

    /// Feeds one pointer-move event to the armed gesture and writes the result into `store`.
    ///
    /// Returns `false` when no gesture is armed or the target window is gone or maximized.
    pub fn pointer_move(&mut self, store: &mut WindowStore, pointer: PointerPosition) -> bool {
        match &mut self.state {
            GestureState::Idle => false,
            GestureState::Dragging(session) => {
                let window_id = session.window_id;
                let Some(current) = movable_rect(store, window_id) else {
                    return false;
                };
                let delta = pointer.delta_from(session.last_pointer);
                session.last_pointer = pointer;
                let next = compute_move(current.origin(), delta);
                store.move_window(window_id, next.x, next.y)
            }
            GestureState::Resizing(session) => {
                let session = *session;
                let Some(current) = movable_rect(store, session.window_id) else {
                    return false;
                };
                let delta = pointer.delta_from(session.pointer_start);
                let next = compute_resize(session.edge, session.rect_start, delta, store.min_size());
                store.resize_window(session.window_id, next.w, next.h);
                if next.origin() != current.origin() {
                    store.move_window(session.window_id, next.x, next.y);
                }
                true
            }
        }
    }

    /// Disarms the current gesture. Returns `false` for a release with no matching press.
    pub fn release(&mut self) -> bool {
        let was_armed = !self.is_idle();
        self.state = GestureState::Idle;
        was_armed
    }

    /// Drops the gesture if it targets `window_id` (the window was closed mid-gesture).
    pub fn forget_window(&mut self, window_id: WindowId) {
        if self.active_window() == Some(window_id) {
            self.state = GestureState::Idle;
        }
    }
}

fn is_gesture_target(store: &WindowStore, window_id: WindowId) -> bool {
    store
        .get(window_id)
        .map(|w| !w.maximized)
        .unwrap_or(false)
}

fn movable_rect(store: &WindowStore, window_id: WindowId) -> Option<WindowRect> {
    store
        .get(window_id)
        .filter(|w| !w.maximized)
        .map(|w| w.rect)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppKind, WorkspaceBounds},
        store::StoreConfig,
    };

    const WORKSPACE: WorkspaceBounds = WorkspaceBounds {
        width: 1280,
        height: 800,
        chrome_height: 48,
    };

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn placed_window(store: &mut WindowStore) -> WindowId {
        let id = store.open(AppKind::Notepad, "Notes", None);
        store.move_window(id, 100, 100);
        store.resize_window(id, 600, 400);
        id
    }

    fn setup() -> (WindowStore, InteractionController, WindowId) {
        let mut store = WindowStore::with_seed(StoreConfig::default(), 3);
        let id = placed_window(&mut store);
        (store, InteractionController::default(), id)
    }

    #[test]
    fn drag_applies_incremental_deltas_each_tick() {
        let (mut store, mut controller, id) = setup();

        assert!(controller.begin_drag(&mut store, id, pointer(10, 10)));
        controller.pointer_move(&mut store, pointer(15, 20));
        controller.pointer_move(&mut store, pointer(35, 50));

        let rect = store.get(id).unwrap().rect;
        assert_eq!((rect.x, rect.y), (125, 140));
        assert_eq!((rect.w, rect.h), (600, 400));
    }

    #[test]
    fn drag_start_focuses_window() {
        let (mut store, mut controller, id) = setup();
        let other = store.open(AppKind::Calculator, "Calc", None);
        assert_eq!(store.topmost(), Some(other));

        controller.begin_drag(&mut store, id, pointer(0, 0));

        assert_eq!(store.topmost(), Some(id));
        assert_eq!(controller.active_window(), Some(id));
    }

    #[test]
    fn resize_uses_cumulative_delta_from_press() {
        let (mut store, mut controller, id) = setup();

        controller.begin_resize(&mut store, id, ResizeEdge::SouthEast, pointer(700, 500));
        controller.pointer_move(&mut store, pointer(720, 510));
        controller.pointer_move(&mut store, pointer(750, 530));

        assert_eq!(
            store.get(id).unwrap().rect,
            WindowRect {
                x: 100,
                y: 100,
                w: 650,
                h: 430
            }
        );
    }

    #[test]
    fn west_resize_moves_anchor_then_snaps_back_when_shrunk_past_minimum() {
        let (mut store, mut controller, id) = setup();

        controller.begin_resize(&mut store, id, ResizeEdge::West, pointer(100, 300));
        controller.pointer_move(&mut store, pointer(50, 300));
        assert_eq!(
            store.get(id).unwrap().rect,
            WindowRect {
                x: 50,
                y: 100,
                w: 650,
                h: 400
            }
        );

        controller.pointer_move(&mut store, pointer(450, 300));
        assert_eq!(
            store.get(id).unwrap().rect,
            WindowRect {
                x: 100,
                y: 100,
                w: 600,
                h: 400
            }
        );
    }

    #[test]
    fn maximized_window_ignores_gesture_starts() {
        let (mut store, mut controller, id) = setup();
        store.toggle_maximize(id, WORKSPACE);
        let before = store.clone();

        assert!(!controller.begin_drag(&mut store, id, pointer(5, 5)));
        assert!(!controller.begin_resize(&mut store, id, ResizeEdge::East, pointer(5, 5)));
        assert!(controller.is_idle());
        assert!(!controller.pointer_move(&mut store, pointer(200, 200)));
        assert_eq!(store, before);
    }

    #[test]
    fn release_commits_last_geometry_and_returns_to_idle() {
        let (mut store, mut controller, id) = setup();

        controller.begin_drag(&mut store, id, pointer(0, 0));
        controller.pointer_move(&mut store, pointer(-30, 12));
        assert!(controller.release());

        assert!(controller.is_idle());
        assert_eq!(store.get(id).unwrap().rect.origin().x, 70);
        assert!(!controller.pointer_move(&mut store, pointer(500, 500)));
        assert_eq!(store.get(id).unwrap().rect.origin().x, 70);
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut controller = InteractionController::default();
        assert!(!controller.release());
        assert_eq!(controller.state(), GestureState::Idle);
    }

    #[test]
    fn closed_window_mid_gesture_is_ignored() {
        let (mut store, mut controller, id) = setup();
        controller.begin_resize(&mut store, id, ResizeEdge::North, pointer(0, 0));
        store.close(id);

        assert!(!controller.pointer_move(&mut store, pointer(0, -50)));
        controller.forget_window(id);
        assert!(controller.is_idle());
    }

    #[test]
    fn gesture_on_missing_window_is_not_armed() {
        let (mut store, mut controller, _) = setup();
        let counter = store.stacking_value();
        assert!(!controller.begin_drag(&mut store, WindowId(999), pointer(0, 0)));
        assert_eq!(store.stacking_value(), counter);
    }
}
