//! Configuration and on-disk storage

mod settings;
mod store;

pub use settings::{AppConfig, TimerSettings, WatchFaceSettings};
pub use store::JsonFileStore;

/// Per-user project directories
pub(crate) fn project_dirs() -> anyhow::Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "pomowatch", "pomowatch")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}
