//! PomoWatch: a Pomodoro timer with data-described watchfaces
//!
//! This library wires the workspace crates into an application:
//! - Configuration and the on-disk custom watchface store
//! - The [`PomoWatch`] composition root used by the binary and host UIs

pub mod app;
pub mod config;

// Re-export commonly used types
pub use app::PomoWatch;
pub use config::{AppConfig, JsonFileStore};
pub use pomowatch_core::{WatchFaceError, WatchFaceRegistry};
pub use pomowatch_render::{RenderTree, Variant, WatchFaceRenderer};
pub use pomowatch_types::{TimerUpdate, WatchFaceConfig, WatchFaceProps};
