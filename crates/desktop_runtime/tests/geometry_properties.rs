use desktop_runtime::{
    geometry::{compute_resize, MinimumSize, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    AppKind, InteractionController, PointerDelta, PointerPosition, ResizeEdge, StoreConfig,
    WindowRect, WindowStore, WorkspaceBounds,
};
use proptest::prelude::*;

fn edge() -> impl Strategy<Value = ResizeEdge> {
    prop::sample::select(ResizeEdge::ALL.to_vec())
}

fn valid_rect() -> impl Strategy<Value = WindowRect> {
    (
        -2_000i32..4_000,
        -2_000i32..4_000,
        MIN_WINDOW_WIDTH..3_000,
        MIN_WINDOW_HEIGHT..2_000,
    )
        .prop_map(|(x, y, w, h)| WindowRect { x, y, w, h })
}

fn delta() -> impl Strategy<Value = PointerDelta> {
    (-20_000i32..20_000, -20_000i32..20_000).prop_map(|(dx, dy)| PointerDelta { dx, dy })
}

proptest! {
    /// Ids stay distinct and z-order strictly increases across any run of opens.
    #[test]
    fn opens_yield_distinct_ids_and_increasing_z(count in 1usize..64, seed in any::<u64>()) {
        let mut store = WindowStore::with_seed(StoreConfig::default(), seed);
        let ids: Vec<_> = (0..count)
            .map(|idx| store.open(AppKind::Notepad, format!("n{idx}"), None))
            .collect();

        for pair in ids.windows(2) {
            prop_assert!(pair[0] != pair[1]);
            let z0 = store.get(pair[0]).map(|w| w.z_index);
            let z1 = store.get(pair[1]).map(|w| w.z_index);
            prop_assert!(z0 < z1);
        }
    }

    /// Maximize followed by restore is the identity on geometry.
    #[test]
    fn maximize_is_involutive(rect in valid_rect(), width in 320i32..4_000, height in 240i32..3_000) {
        let workspace = WorkspaceBounds { width, height, chrome_height: 48 };
        let mut store = WindowStore::with_seed(StoreConfig::default(), 1);
        let id = store.open(AppKind::Calculator, "Calc", None);
        store.move_window(id, rect.x, rect.y);
        store.resize_window(id, rect.w, rect.h);

        store.toggle_maximize(id, workspace);
        store.toggle_maximize(id, workspace);

        prop_assert_eq!(store.get(id).map(|w| w.rect), Some(rect));
    }

    /// No resize input can push a window below the minimum size.
    #[test]
    fn resize_never_violates_minimum(edge in edge(), start in valid_rect(), delta in delta()) {
        let next = compute_resize(edge, start, delta, MinimumSize::default());
        prop_assert!(next.w >= MIN_WINDOW_WIDTH);
        prop_assert!(next.h >= MIN_WINDOW_HEIGHT);
    }

    /// A rejected west/north edge leaves that axis' anchor exactly at its start value.
    #[test]
    fn rejected_west_or_north_edge_keeps_anchor(edge in edge(), start in valid_rect(), delta in delta()) {
        let next = compute_resize(edge, start, delta, MinimumSize::default());
        if edge.includes_west() && start.w - delta.dx < MIN_WINDOW_WIDTH {
            prop_assert_eq!(next.x, start.x);
            prop_assert_eq!(next.w, start.w);
        }
        if edge.includes_north() && start.h - delta.dy < MIN_WINDOW_HEIGHT {
            prop_assert_eq!(next.y, start.y);
            prop_assert_eq!(next.h, start.h);
        }
        if !edge.includes_west() && !edge.includes_east() {
            prop_assert_eq!((next.x, next.w), (start.x, start.w));
        }
    }

    /// Gesture-driven resizes respect the minimum on every tick, not only at release.
    #[test]
    fn controller_resize_ticks_respect_minimum(
        edge in edge(),
        moves in prop::collection::vec((-1_500i32..1_500, -1_500i32..1_500), 1..16),
    ) {
        let mut store = WindowStore::with_seed(StoreConfig::default(), 3);
        let id = store.open(AppKind::Notepad, "Notes", None);
        let mut controller = InteractionController::default();
        controller.begin_resize(&mut store, id, edge, PointerPosition { x: 0, y: 0 });

        for (x, y) in moves {
            controller.pointer_move(&mut store, PointerPosition { x, y });
            let rect = store.get(id).map(|w| w.rect).unwrap_or(WindowRect { x: 0, y: 0, w: 0, h: 0 });
            prop_assert!(rect.w >= MIN_WINDOW_WIDTH && rect.h >= MIN_WINDOW_HEIGHT);
        }
        prop_assert!(controller.release());
    }
}
