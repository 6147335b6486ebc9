//! Persistence contract for custom watchfaces

use anyhow::{anyhow, Result};
use pomowatch_types::WatchFaceConfig;

/// Custom watchface entries as persisted: `(namespaced id, config)` pairs
pub type StoredFaces = Vec<(String, WatchFaceConfig)>;

/// External key-value store for custom watchfaces
///
/// The registry only needs these two operations; whether the entries end up
/// in a file, a database or a remote service is up to the implementation.
pub trait WatchFaceStore {
    /// Replace the stored entries
    fn save(&mut self, entries: &[(String, WatchFaceConfig)]) -> Result<()>;

    /// Read back all stored entries
    fn load(&self) -> Result<StoredFaces>;
}

/// In-memory store, mostly useful for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: StoredFaces,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: StoredFaces) -> Self {
        Self {
            entries,
            unavailable: false,
        }
    }

    /// Make every subsequent save/load fail, as an unreachable store would
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn entries(&self) -> &[(String, WatchFaceConfig)] {
        &self.entries
    }
}

impl WatchFaceStore for MemoryStore {
    fn save(&mut self, entries: &[(String, WatchFaceConfig)]) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("memory store is unavailable"));
        }
        self.entries = entries.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<StoredFaces> {
        if self.unavailable {
            return Err(anyhow!("memory store is unavailable"));
        }
        Ok(self.entries.clone())
    }
}
