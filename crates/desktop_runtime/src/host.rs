//! Host-side helpers: viewport queries and DOM side effects requested by the reducer.
//!
//! Browser access is confined to `wasm32` builds; native builds (tests, tooling) answer from the
//! configured fallback workspace and treat DOM effects as no-ops.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{WindowId, WorkspaceBounds},
    reducer::RuntimeEffect,
};

/// DOM id of a window's body element; the focus effect targets it.
pub fn window_body_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-body-{}", window_id.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopHostContext {
    fallback_workspace: WorkspaceBounds,
}

impl DesktopHostContext {
    pub fn new(fallback_workspace: WorkspaceBounds) -> Self {
        Self { fallback_workspace }
    }

    /// Current workspace: the browser viewport on wasm, the configured fallback elsewhere.
    pub fn workspace_bounds(&self) -> WorkspaceBounds {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(self.fallback_workspace.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(self.fallback_workspace.height);
                return WorkspaceBounds {
                    width,
                    height,
                    chrome_height: self.fallback_workspace.chrome_height,
                };
            }
        }

        self.fallback_workspace
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }

    /// Moves keyboard focus into the window body once the current render settles.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(element) = document.get_element_by_id(&window_body_dom_id(window_id)) else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                let _ = element.focus();
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_host_reports_fallback_workspace() {
        let fallback = WorkspaceBounds {
            width: 1024,
            height: 768,
            chrome_height: 40,
        };
        let host = DesktopHostContext::new(fallback);
        assert_eq!(host.workspace_bounds(), fallback);
        host.run_runtime_effect(RuntimeEffect::FocusWindowInput(WindowId(1)));
    }

    #[test]
    fn body_dom_id_is_stable_per_window() {
        assert_eq!(window_body_dom_id(WindowId(42)), "desktop-window-body-42");
    }
}
