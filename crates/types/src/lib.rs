//! pomowatch-types: Shared data types for the PomoWatch timer.
//!
//! This crate contains pure data types (the watchface schema, component
//! descriptors and live timer props) that are shared across all PomoWatch
//! crates. These types carry no rendering or storage behavior, making them
//! suitable as a foundation layer.

pub mod component;
pub mod timer;
pub mod watchface;

// Re-export commonly used types at the crate root for convenience
pub use component::{ComponentKind, Coordinate, Position, PropMap, StyleMap, WatchFaceComponent};
pub use timer::{TimerStatus, TimerUpdate, WatchFaceProps};
pub use watchface::{
    Dimension, LayoutSize, LayoutType, ProgressBarConfig, ThemeColors, ThemeFonts,
    WatchFaceConfig, WatchFaceLayout, WatchFaceTheme,
};

/// JavaScript-style truthiness for loosely typed JSON values.
///
/// Imported watchface files were historically authored against a dynamic
/// runtime, so flags like `"scanlines": 1` or `"glow": "yes"` are honored.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
