//! Error taxonomy for watchface catalog operations

use thiserror::Error;

/// Errors raised by the watchface registry.
///
/// Rendering never produces errors; unknown component kinds, custom widgets
/// and variants degrade to empty output instead.
#[derive(Error, Debug)]
pub enum WatchFaceError {
    /// A candidate watchface failed validation; the registry was not touched
    #[error("Invalid watch face configuration: {0}")]
    InvalidConfiguration(String),

    /// The external store rejected a save or load
    #[error("watchface store failure: {0:#}")]
    Persistence(anyhow::Error),

    /// Watchface JSON could not be parsed
    #[error("failed to parse watchface JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WatchFaceError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, WatchFaceError::InvalidConfiguration(_))
    }
}
