//! Shared contract types between the desktop window manager runtime and mounted apps.
//!
//! The window manager owns every window record. An app body only ever sees the slice handed to it
//! at mount time: its window id, the instance-state bag it previously wrote, and service handles
//! for talking back to the shell.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Opaque per-window key/value bag owned by the mounted app.
///
/// The runtime round-trips it across minimize/restore and drops it on close.
pub type InstanceState = Map<String, Value>;

#[derive(Debug, Error)]
/// Failures converting between typed app state and the [`InstanceState`] bag.
pub enum InstanceStateError {
    /// The stored bag does not match the requested shape.
    #[error("instance state decode failed: {0}")]
    Decode(#[source] serde_json::Error),
    /// The typed value could not be serialized.
    #[error("instance state encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    /// The typed value serialized to something other than a JSON object.
    #[error("instance state patch must serialize to a JSON object")]
    NotAnObject,
}

/// Decodes a typed view of `state`.
///
/// # Errors
///
/// Returns [`InstanceStateError::Decode`] when the bag does not deserialize into `T`.
pub fn decode_instance_state<T: DeserializeOwned>(
    state: &InstanceState,
) -> Result<T, InstanceStateError> {
    serde_json::from_value(Value::Object(state.clone())).map_err(InstanceStateError::Decode)
}

/// Encodes `value` as a patch suitable for [`merge_instance_state`].
///
/// # Errors
///
/// Returns [`InstanceStateError::Encode`] when serialization fails and
/// [`InstanceStateError::NotAnObject`] when `value` is not a struct/map.
pub fn encode_instance_patch<T: Serialize>(value: &T) -> Result<InstanceState, InstanceStateError> {
    match serde_json::to_value(value).map_err(InstanceStateError::Encode)? {
        Value::Object(map) => Ok(map),
        _ => Err(InstanceStateError::NotAnObject),
    }
}

/// Shallow-merges `patch` into `target`: top-level keys in `patch` replace those in `target`.
pub fn merge_instance_state(target: &mut InstanceState, patch: InstanceState) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Severity tag for shell notifications.
pub enum NotificationKind {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
/// Requests an app can send back to the runtime.
pub enum AppCommand {
    /// Shallow-merge a patch into this window's instance state.
    UpdateInstanceState(InstanceState),
    /// Replace the shell clipboard contents.
    SetClipboard(String),
    /// Queue a shell notification.
    Notify {
        /// Notification body text.
        message: String,
        /// Notification severity.
        kind: NotificationKind,
    },
}

#[derive(Clone, Copy)]
/// Service handles injected into a mounted app.
pub struct AppServices {
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Replaces the shell clipboard contents.
    pub fn set_clipboard(&self, text: impl Into<String>) {
        self.sender.call(AppCommand::SetClipboard(text.into()));
    }

    /// Queues a shell notification.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.sender.call(AppCommand::Notify {
            message: message.into(),
            kind,
        });
    }
}

#[derive(Clone)]
/// Mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Raw app kind id (`"notepad"`, `"calculator"`, ...).
    pub app_id: String,
    /// Instance state last written by this app for this window.
    pub instance_state: InstanceState,
    /// Persists a shallow patch into this window's instance state.
    pub on_update_instance_state: Callback<InstanceState>,
    /// Shell service handles.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Draft {
        #[serde(default)]
        text: String,
        #[serde(default)]
        cursor: usize,
    }

    fn bag(value: Value) -> InstanceState {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn merge_replaces_only_top_level_keys_present_in_patch() {
        let mut state = bag(json!({ "text": "hello", "cursor": 5, "nested": { "a": 1 } }));
        merge_instance_state(&mut state, bag(json!({ "cursor": 2, "nested": { "b": 2 } })));

        assert_eq!(
            Value::Object(state),
            json!({ "text": "hello", "cursor": 2, "nested": { "b": 2 } })
        );
    }

    #[test]
    fn typed_state_decodes_with_defaults_for_missing_keys() {
        let state = bag(json!({ "text": "draft" }));
        let draft: Draft = decode_instance_state(&state).expect("decode");
        assert_eq!(
            draft,
            Draft {
                text: "draft".to_string(),
                cursor: 0
            }
        );
    }

    #[test]
    fn typed_state_decode_reports_shape_mismatch() {
        let state = bag(json!({ "text": 12 }));
        let err = decode_instance_state::<Draft>(&state).expect_err("mismatch");
        assert!(matches!(err, InstanceStateError::Decode(_)));
    }

    #[test]
    fn encoding_non_object_values_is_rejected() {
        assert!(matches!(
            encode_instance_patch(&"plain"),
            Err(InstanceStateError::NotAnObject)
        ));
        let patch = encode_instance_patch(&Draft {
            text: "x".to_string(),
            cursor: 1,
        })
        .expect("encode");
        assert_eq!(Value::Object(patch), json!({ "text": "x", "cursor": 1 }));
    }
}
