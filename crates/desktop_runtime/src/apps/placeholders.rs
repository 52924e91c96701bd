//! Placeholder app bodies. Each keeps a draft in its window's instance state so edits survive
//! minimize/restore.

use desktop_app_contract::{
    decode_instance_state, encode_instance_patch, AppMountContext, NotificationKind,
};
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct DraftState {
    #[serde(default)]
    draft: String,
}

fn restore_draft(context: &AppMountContext) -> String {
    match decode_instance_state::<DraftState>(&context.instance_state) {
        Ok(state) => state.draft,
        Err(err) => {
            logging::warn!("{} window {}: {err}", context.app_id, context.window_id);
            String::new()
        }
    }
}

fn persist_draft(context: &AppMountContext, draft: String) {
    match encode_instance_patch(&DraftState { draft }) {
        Ok(patch) => context.on_update_instance_state.call(patch),
        Err(err) => logging::warn!("{} draft encode failed: {err}", context.app_id),
    }
}

pub(super) fn mount_settings_app(context: AppMountContext) -> View {
    view! {
        <DraftBody
            context=context
            class="app-settings"
            heading="Settings"
            hint="Display name"
        />
    }
    .into_view()
}

pub(super) fn mount_file_explorer_app(context: AppMountContext) -> View {
    view! {
        <DraftBody
            context=context
            class="app-explorer"
            heading="File Explorer"
            hint="Path"
        />
    }
    .into_view()
}

pub(super) fn mount_calculator_app(context: AppMountContext) -> View {
    view! {
        <DraftBody
            context=context
            class="app-calculator"
            heading="Calculator"
            hint="Expression"
        />
    }
    .into_view()
}

pub(super) fn mount_notepad_app(context: AppMountContext) -> View {
    view! { <NotepadPlaceholder context=context /> }.into_view()
}

pub(super) fn mount_unknown_app(context: AppMountContext) -> View {
    view! {
        <div class="app-shell app-unknown" role="alert">
            <p><strong>{format!("Unknown app: {}", context.app_id)}</strong></p>
            <p>"No application body is registered for this window."</p>
        </div>
    }
    .into_view()
}

#[component]
fn DraftBody(
    context: AppMountContext,
    class: &'static str,
    heading: &'static str,
    hint: &'static str,
) -> impl IntoView {
    let draft = create_rw_signal(restore_draft(&context));
    let context = store_value(context);

    view! {
        <div class=format!("app-shell {class}")>
            <p><strong>{heading}</strong></p>
            <label class="app-field">
                {hint}
                <input
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.set(value.clone());
                        context.with_value(|context| persist_draft(context, value));
                    }
                />
            </label>
        </div>
    }
}

#[component]
fn NotepadPlaceholder(context: AppMountContext) -> impl IntoView {
    let draft = create_rw_signal(restore_draft(&context));
    let services = context.services;
    let context = store_value(context);

    let copy_all = move |_| {
        let text = draft.get_untracked();
        if text.is_empty() {
            services.notify("Nothing to copy", NotificationKind::Info);
            return;
        }
        services.set_clipboard(text);
        services.notify("Copied to clipboard", NotificationKind::Success);
    };

    view! {
        <div class="app-shell app-notepad">
            <div class="app-toolbar" role="group" aria-label="Notepad actions">
                <button type="button" class="app-action" on:click=copy_all>"Copy all"</button>
            </div>
            <textarea
                class="app-editor"
                aria-label="Notepad text"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.set(value.clone());
                    context.with_value(|context| persist_draft(context, value));
                }
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} chars", draft.get().chars().count())}</span>
            </div>
        </div>
    }
}
