pub mod apps;
pub mod chrome;
pub mod components;
pub mod config;
pub mod effect_executor;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod shell_context;
pub mod stacking;
pub mod store;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig};
pub use interaction::{GestureState, InteractionController};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use store::{StoreConfig, WindowStore};
