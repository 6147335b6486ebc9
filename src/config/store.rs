//! JSON file backing for custom watchfaces

use anyhow::{Context, Result};
use log::debug;
use pomowatch_core::{StoredFaces, WatchFaceConfig, WatchFaceStore};
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "custom_watchfaces.json";

/// Stores custom watchfaces as a JSON array of `[id, config]` pairs
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the per-user data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(super::project_dirs()?.data_dir().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchFaceStore for JsonFileStore {
    fn save(&mut self, entries: &[(String, WatchFaceConfig)]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("Wrote {} custom watchfaces to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<StoredFaces> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let entries = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomowatch_core::WatchFaceRegistry;
    use serde_json::json;

    fn face(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Stored",
            "version": "1.0",
            "theme": {"colors": {"background": "#000", "foreground": "#fff"}},
            "layout": {"type": "circular"},
            "components": [{"type": "time", "id": "time"}]
        })
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_registry_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("data").join(STORE_FILE));

        let mut registry = WatchFaceRegistry::new();
        registry.load_custom(face("mine")).unwrap();
        registry.export_all(&mut store).unwrap();

        // Persisted as an array of [id, config] pairs
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[0][0], "custom_mine");
        assert_eq!(raw[0][1]["id"], "custom_mine");

        let mut restored = WatchFaceRegistry::new();
        assert_eq!(restored.import_all(&store).unwrap(), 1);
        assert_eq!(restored.get("custom_mine").map(|f| f.name.as_str()), Some("Stored"));
    }

    #[test]
    fn test_corrupt_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, "not json").unwrap();

        let mut registry = WatchFaceRegistry::new();
        let err = registry.import_all(&JsonFileStore::new(path)).unwrap_err();
        assert!(matches!(err, pomowatch_core::WatchFaceError::Persistence(_)));
        assert_eq!(registry.custom_count(), 0);
    }
}
