use super::*;
use crate::{apps, host::window_body_dom_id, model::WindowId};
use desktop_app_contract::{AppMountContext, AppServices};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button presses only; secondary touch points never arm gestures.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.store.get(window_id).cloned())
    });
    let bounds = create_memo(move |_| {
        let workspace = runtime.workspace.get();
        runtime
            .state
            .with(|desktop| desktop.store.rendered_bounds(window_id, workspace))
    });
    let focused = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.focused_window_id() == Some(window_id))
    });
    let maximized = create_memo(move |_| window.get().map(|w| w.maximized).unwrap_or(false));

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let minimize = move || runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            workspace: runtime.workspace.get_untracked(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || maximized.get_untracked() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };
    let swallow_press = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let style = move || {
        let Some(rect) = bounds.get() else {
            return String::new();
        };
        let z_index = window.get().map(|w| w.z_index).unwrap_or_default();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x, rect.y, rect.w, rect.h, z_index
        )
    };
    let title = move || window.get().map(|w| w.title).unwrap_or_default();
    let icon = move || {
        window
            .get()
            .map(|w| {
                runtime
                    .state
                    .with(|desktop| desktop.registry.icon_for(&w.app_kind).to_string())
            })
            .unwrap_or_default()
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            <section
                class="desktop-window"
                class:focused=move || focused.get()
                class:maximized=move || maximized.get()
                style=style
                on:pointerdown=focus
                role="dialog"
                aria-label=title
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=titlebar_double_click
                >
                    <span class="titlebar-icon" aria-hidden="true">{icon}</span>
                    <span class="titlebar-title">{title}</span>
                    <div class="titlebar-controls">
                        <button
                            type="button"
                            aria-label="Minimize window"
                            on:pointerdown=swallow_press
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                minimize();
                            }
                        >
                            "_"
                        </button>
                        <button
                            type="button"
                            aria-label=move || {
                                if maximized.get() { "Restore window" } else { "Maximize window" }
                            }
                            on:pointerdown=swallow_press
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        >
                            {move || if maximized.get() { "❐" } else { "□" }}
                        </button>
                        <button
                            type="button"
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=swallow_press
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <WindowBody window_id=window_id />
                <Show when=move || !maximized.get() fallback=|| ()>
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let services = AppServices::new(Callback::new(move |command| {
        runtime.dispatch_action(DesktopAction::HandleAppCommand { window_id, command });
    }));
    let on_update_instance_state = Callback::new(move |patch| {
        runtime.dispatch_action(DesktopAction::UpdateInstanceState { window_id, patch });
    });

    // Mounted once per window lifetime; the body reads its instance state only at mount.
    let contents = runtime
        .state
        .with_untracked(|desktop| desktop.store.get(window_id).cloned())
        .map(|w| {
            apps::app_module(&w.app_kind).mount(AppMountContext {
                window_id: w.id.0,
                app_id: w.app_kind.id().to_string(),
                instance_state: w.instance_state,
                on_update_instance_state,
                services,
            })
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div id=window_body_dom_id(window_id) class="window-body" tabindex="-1">
            {contents}
        </div>
    }
}
