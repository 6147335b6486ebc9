//! Shared constants for the watchface catalog

/// Prefix applied to every user-imported watchface id
pub const CUSTOM_ID_PREFIX: &str = "custom_";

/// Built-in face used when a requested id is not in the catalog
pub const DEFAULT_FACE_ID: &str = "default";
