//! Pure window geometry transitions for drag, edge/corner resize, and maximize.
//!
//! Nothing here looks up windows; callers pass the gesture's start state and pointer delta and
//! write the result back into the store.

use crate::model::{Point, PointerDelta, ResizeEdge, WindowRect, WorkspaceBounds};

pub use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumSize {
    pub width: i32,
    pub height: i32,
}

impl Default for MinimumSize {
    fn default() -> Self {
        Self {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }
    }
}

impl MinimumSize {
    /// Floors `width`/`height` at the minimum.
    pub fn clamp(self, width: i32, height: i32) -> (i32, i32) {
        (width.max(self.width), height.max(self.height))
    }
}

/// Translates `origin` by `delta`. No viewport clamping: windows may leave the screen.
pub fn compute_move(origin: Point, delta: PointerDelta) -> Point {
    Point {
        x: origin.x.saturating_add(delta.dx),
        y: origin.y.saturating_add(delta.dy),
    }
}

/// Applies a resize gesture on `edge` to the gesture's `start` rect.
///
/// East/south edges floor the new size at the minimum. West/north edges are all-or-nothing: if
/// the candidate size would drop below the minimum the edge stays where it started, so neither
/// the size nor the anchor moves on that axis. Compound edges apply each axis independently.
pub fn compute_resize(
    edge: ResizeEdge,
    start: WindowRect,
    delta: PointerDelta,
    min: MinimumSize,
) -> WindowRect {
    let mut next = start;

    if edge.includes_east() {
        next.w = start.w.saturating_add(delta.dx).max(min.width);
    }
    if edge.includes_south() {
        next.h = start.h.saturating_add(delta.dy).max(min.height);
    }
    if edge.includes_west() {
        let candidate = start.w.saturating_sub(delta.dx);
        if candidate >= min.width {
            next.w = candidate;
            next.x = start.x.saturating_add(delta.dx);
        }
    }
    if edge.includes_north() {
        let candidate = start.h.saturating_sub(delta.dy);
        if candidate >= min.height {
            next.h = candidate;
            next.y = start.y.saturating_add(delta.dy);
        }
    }

    next
}

/// Full-width rect anchored at the origin that stops above the taskbar chrome.
pub fn compute_maximized_bounds(workspace: WorkspaceBounds) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: workspace.width,
        h: workspace.height.saturating_sub(workspace.chrome_height),
    }
}
