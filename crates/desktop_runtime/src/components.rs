//! Desktop shell UI composition and interaction surfaces.

mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    model::{AppKind, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: icons, the window layer, the start menu, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.gesture_active() {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.gesture_active() {
            runtime.dispatch_action(DesktopAction::PointerRelease);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-backdrop"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            >
                <DesktopIcons />
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| desktop.store.snapshot())
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = runtime.state.with_untracked(|desktop| {
        desktop
            .registry
            .desktop_icons()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <div class="desktop-icon-grid" role="list">
            <For each=move || icons.clone() key=|app| app.kind.id().to_string() let:app>
                {{
                    let kind: AppKind = app.kind.clone();
                    view! {
                        <button
                            type="button"
                            class="desktop-icon"
                            role="listitem"
                            on:dblclick=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ActivateDesktopIcon {
                                    kind: kind.clone(),
                                });
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{app.icon.clone()}</span>
                            <span class="desktop-icon-label">{app.label.clone()}</span>
                        </button>
                    }
                }}
            </For>
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
