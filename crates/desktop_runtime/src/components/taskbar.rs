use super::*;
use crate::chrome::build_taskbar_model;
use desktop_app_contract::NotificationKind;

fn notification_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "info",
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let model = create_memo(move |_| {
        state.with(|desktop| build_taskbar_model(&desktop.store, &desktop.registry))
    });
    let start_open = create_memo(move |_| state.with(|desktop| desktop.start_menu_open));
    let height = move || format!("height:{}px;", runtime.workspace.get().chrome_height);

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar" style=height>
            <button
                type="button"
                class="taskbar-start"
                class:active=move || start_open.get()
                aria-haspopup="menu"
                aria-expanded=move || start_open.get().to_string()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                "Start"
            </button>

            <div class="taskbar-pinned" role="group" aria-label="Pinned apps">
                <For
                    each=move || model.get().pinned
                    key=|button| (button.kind.id().to_string(), button.active)
                    let:button
                >
                    {{
                        let kind = button.kind.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-app"
                                class:active=button.active
                                title=button.label.clone()
                                aria-label=button.label.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivatePinnedApp {
                                        kind: kind.clone(),
                                    });
                                }
                            >
                                {button.icon.clone()}
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || model.get().visible
                    key=|entry| (entry.window_id.0, entry.focused, entry.title.clone())
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        view! {
                            <button
                                type="button"
                                class="taskbar-window"
                                class:focused=entry.focused
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
                                }
                            >
                                {entry.title.clone()}
                            </button>
                        }
                    }}
                </For>
                <For
                    each=move || model.get().minimized
                    key=|entry| entry.window_id.0
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        view! {
                            <button
                                type="button"
                                class="taskbar-window minimized"
                                title=format!("Restore {}", entry.title)
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
                                }
                            >
                                {entry.title.clone()}
                            </button>
                        }
                    }}
                </For>
            </div>

            <NotificationTray />
        </footer>
    }
}

#[component]
fn NotificationTray() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let latest = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.shell.notifications().last().cloned())
    });
    let count = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.shell.notifications().len())
    });

    view! {
        <div class="taskbar-tray" aria-live="polite">
            {move || {
                latest
                    .get()
                    .map(|notification| {
                        let notification_id = notification.id;
                        view! {
                            <span class=format!("taskbar-notification {}", notification_class(notification.kind))>
                                {notification.message}
                            </span>
                            <button
                                type="button"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::DismissNotification {
                                        notification_id,
                                    });
                                }
                            >
                                "×"
                            </button>
                        }
                    })
            }}
            <Show when=move || { count.get() > 1 } fallback=|| ()>
                <button
                    type="button"
                    class="taskbar-notification-clear"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ClearNotifications)
                >
                    {move || format!("Clear {}", count.get())}
                </button>
            </Show>
        </div>
    }
}
