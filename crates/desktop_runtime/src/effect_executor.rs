//! Drains reducer-emitted runtime effects in order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor on the current reactive owner.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects dispatched while draining land in a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(effect);
        }
    });
}
