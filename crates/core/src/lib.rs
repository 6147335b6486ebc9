//! pomowatch-core: Watchface validation, registry and persistence contracts.
//!
//! This crate contains the validator that gates user-imported watchfaces,
//! the [`WatchFaceRegistry`] catalog of built-in and custom faces, the
//! [`WatchFaceStore`] persistence contract, and shared constants.

pub mod builtin;
pub mod constants;
mod error;
mod registry;
mod store;
pub mod validator;

pub use constants::{CUSTOM_ID_PREFIX, DEFAULT_FACE_ID};
pub use error::WatchFaceError;
pub use registry::{namespaced_id, WatchFaceRegistry};
pub use store::{MemoryStore, StoredFaces, WatchFaceStore};
pub use validator::validate;

// Re-export types used in public signatures for convenience
pub use pomowatch_types::{WatchFaceComponent, WatchFaceConfig};
