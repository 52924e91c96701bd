//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the interaction controller, the runtime
//! effect queue, and the current workspace size. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::DesktopConfig,
    effect_executor,
    host::DesktopHostContext,
    interaction::InteractionController,
    model::{DesktopState, WorkspaceBounds},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Armed drag/resize gesture, if any.
    pub interaction: RwSignal<InteractionController>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Current workspace; refreshed on viewport resize.
    pub workspace: RwSignal<WorkspaceBounds>,
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Whether a drag or resize gesture is currently armed.
    pub fn gesture_active(&self) -> bool {
        !self.interaction.with_untracked(InteractionController::is_idle)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Overrides the build-time desktop configuration; rejected if it fails validation.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let config = DesktopConfig::resolve(config);
    let host = store_value(DesktopHostContext::new(config.fallback_workspace()));
    let state = create_rw_signal(DesktopState::new(&config));
    let interaction = create_rw_signal(InteractionController::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let workspace = create_rw_signal(host.get_value().workspace_bounds());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut controller = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut controller, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| previous != &desktop) {
                    state.set(desktop);
                }
                if controller != interaction.get_untracked() {
                    interaction.set(controller);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err @ ReducerError::WindowNotFound(_)) => {
                logging::debug_warn!("desktop action ignored: {err}");
            }
            Err(err @ ReducerError::NoActiveGesture) => {
                logging::debug_warn!("pointer event ignored: {err}");
            }
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        workspace,
        dispatch,
    };

    provide_context(runtime);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        workspace.set(host.get_value().workspace_bounds());
    });
    on_cleanup(move || resize_listener.remove());

    effect_executor::install(runtime);
    logging::log!(
        "desktop runtime ready: {} catalog apps, workspace {}x{}",
        config.apps.len(),
        workspace.get_untracked().width,
        workspace.get_untracked().height
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
