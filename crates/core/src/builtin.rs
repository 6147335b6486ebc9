//! Built-in watchface catalog
//!
//! The built-in faces ship as JSON documents compiled into the binary, so
//! they follow exactly the same schema as user-imported files.

use crate::WatchFaceError;
use pomowatch_types::WatchFaceConfig;

/// Built-in faces in catalog order: `(id, JSON document)`
pub const BUILT_IN_FACES: &[(&str, &str)] = &[
    ("default", include_str!("../watchfaces/default.json")),
    ("rolodex", include_str!("../watchfaces/rolodex.json")),
    ("terminal", include_str!("../watchfaces/terminal.json")),
    ("retro-digital", include_str!("../watchfaces/retro-digital.json")),
    ("retro-lcd", include_str!("../watchfaces/retro-lcd.json")),
    ("neon", include_str!("../watchfaces/neon.json")),
];

/// Parse every built-in face
pub fn built_in_faces() -> Result<Vec<WatchFaceConfig>, WatchFaceError> {
    BUILT_IN_FACES
        .iter()
        .map(|(_, json)| serde_json::from_str::<WatchFaceConfig>(json).map_err(WatchFaceError::from))
        .collect()
}
