//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, InstanceState, NotificationKind};
use thiserror::Error;

use crate::{
    chrome::preferred_window_for_kind,
    interaction::InteractionController,
    model::{
        AppKind, DesktopState, OpenWindowRequest, PointerPosition, ResizeEdge, WindowId,
        WorkspaceBounds,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window on top of the stack.
    OpenWindow(OpenWindowRequest),
    /// Close a window; its app body is unmounted.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window (un-minimizing it if needed).
    FocusWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Hide a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window from its taskbar button.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Enter or leave maximize against the current workspace.
    ToggleMaximize {
        /// Window to maximize or restore.
        window_id: WindowId,
        /// Workspace the maximized bounds are computed from.
        workspace: WorkspaceBounds,
    },
    /// Taskbar pinned button: focus an existing window of the kind or open one.
    ActivatePinnedApp {
        /// App behind the pinned button.
        kind: AppKind,
    },
    /// Desktop icon double-activate.
    ActivateDesktopIcon {
        /// App behind the icon.
        kind: AppKind,
    },
    /// Start menu entry: always opens a new window and closes the menu.
    LaunchFromStartMenu {
        /// App to launch.
        kind: AppKind,
    },
    /// Open or close the start menu.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Header press.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at press.
        pointer: PointerPosition,
    },
    /// Edge/corner press.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner that was pressed.
        edge: ResizeEdge,
        /// Pointer position at press.
        pointer: PointerPosition,
    },
    /// Pointer motion routed to the armed gesture.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer release; commits and disarms the gesture.
    PointerRelease,
    /// Shallow-merge app working state into a window.
    UpdateInstanceState {
        /// Window whose instance state is patched.
        window_id: WindowId,
        /// Top-level keys to overwrite.
        patch: InstanceState,
    },
    /// Replace the shell clipboard.
    SetClipboard {
        /// New clipboard contents.
        text: String,
    },
    /// Queue a shell notification.
    PushNotification {
        /// Notification text.
        message: String,
        /// Severity shown in the tray.
        kind: NotificationKind,
    },
    /// Remove one notification from the tray.
    DismissNotification {
        /// Id assigned when the notification was queued.
        notification_id: u64,
    },
    /// Empty the notification tray.
    ClearNotifications,
    /// A request raised by the app mounted in `window_id`.
    HandleAppCommand {
        /// Window whose app raised the command.
        window_id: WindowId,
        /// Command to apply.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly raised window.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action left the state untouched.
///
/// None of these are fatal; the runtime logs them and carries on.
pub enum ReducerError {
    #[error("window {0} not found")]
    WindowNotFound(WindowId),
    #[error("no gesture is armed")]
    NoActiveGesture,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is no longer
/// present and [`ReducerError::NoActiveGesture`] for pointer motion/release with no armed gesture.
/// In both cases the state is unchanged.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionController,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = open_window(state, req);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            ensure(state.store.close(window_id), window_id)?;
            interaction.forget_window(window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            ensure(state.store.focus(window_id), window_id)?;
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            ensure(state.store.minimize(window_id), window_id)?;
            interaction.forget_window(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            ensure(state.store.restore_from_minimized(window_id), window_id)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleMaximize {
            window_id,
            workspace,
        } => {
            ensure(state.store.toggle_maximize(window_id, workspace), window_id)?;
            interaction.forget_window(window_id);
        }
        DesktopAction::ActivatePinnedApp { kind } => {
            let window_id = match preferred_window_for_kind(&state.store, &kind) {
                Some(existing) => {
                    state.store.focus(existing);
                    existing
                }
                None => {
                    let req = state.registry.open_request(&kind);
                    open_window(state, req)
                }
            };
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ActivateDesktopIcon { kind } => {
            let existing = state
                .registry
                .is_single_instance(&kind)
                .then(|| preferred_window_for_kind(&state.store, &kind))
                .flatten();
            let window_id = match existing {
                Some(existing) => {
                    state.store.focus(existing);
                    existing
                }
                None => {
                    let req = state.registry.open_request(&kind);
                    open_window(state, req)
                }
            };
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::LaunchFromStartMenu { kind } => {
            let req = state.registry.open_request(&kind);
            let window_id = open_window(state, req);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            ensure(state.store.get(window_id).is_some(), window_id)?;
            state.start_menu_open = false;
            interaction.begin_drag(&mut state.store, window_id, pointer);
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            ensure(state.store.get(window_id).is_some(), window_id)?;
            state.start_menu_open = false;
            interaction.begin_resize(&mut state.store, window_id, edge, pointer);
        }
        DesktopAction::PointerMove { pointer } => {
            if interaction.is_idle() {
                return Err(ReducerError::NoActiveGesture);
            }
            interaction.pointer_move(&mut state.store, pointer);
        }
        DesktopAction::PointerRelease => {
            if !interaction.release() {
                return Err(ReducerError::NoActiveGesture);
            }
        }
        DesktopAction::UpdateInstanceState { window_id, patch } => {
            ensure(state.store.update_instance_state(window_id, patch), window_id)?;
        }
        DesktopAction::SetClipboard { text } => {
            state.shell.set_clipboard(text);
        }
        DesktopAction::PushNotification { message, kind } => {
            state.shell.push_notification(message, kind);
        }
        DesktopAction::DismissNotification { notification_id } => {
            state.shell.dismiss_notification(notification_id);
        }
        DesktopAction::ClearNotifications => {
            state.shell.clear_notifications();
        }
        DesktopAction::HandleAppCommand { window_id, command } => {
            let action = match command {
                AppCommand::UpdateInstanceState(patch) => {
                    DesktopAction::UpdateInstanceState { window_id, patch }
                }
                AppCommand::SetClipboard(text) => DesktopAction::SetClipboard { text },
                AppCommand::Notify { message, kind } => {
                    DesktopAction::PushNotification { message, kind }
                }
            };
            return reduce_desktop(state, interaction, action);
        }
    }

    Ok(effects)
}

fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> WindowId {
    let title = req
        .title
        .unwrap_or_else(|| state.registry.label_for(&req.app_kind));
    state.start_menu_open = false;
    state.store.open(req.app_kind, title, req.instance_state)
}

fn ensure(found: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if found {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}
