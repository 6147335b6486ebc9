//! Registry of available watchfaces
//!
//! Built-in faces and user-imported ("custom") faces live in separate maps but
//! share one lookup path. The registry is an ordinary value owned by the
//! application's composition root; it is mutated only by `load_custom`,
//! `remove` and `import_all`, all from the UI thread.

use crate::builtin;
use crate::constants::CUSTOM_ID_PREFIX;
use crate::store::WatchFaceStore;
use crate::validator;
use crate::WatchFaceError;
use log::{debug, info, warn};
use pomowatch_types::WatchFaceConfig;
use serde_json::Value;
use std::collections::HashMap;

/// Namespaced id under which an imported face is stored
pub fn namespaced_id(original: &str) -> String {
    format!("{}{}", CUSTOM_ID_PREFIX, original)
}

/// Insertion-ordered map of faces; re-inserting a key keeps its slot
#[derive(Debug, Default)]
struct FaceMap {
    faces: HashMap<String, WatchFaceConfig>,
    order: Vec<String>,
}

impl FaceMap {
    fn insert(&mut self, id: String, config: WatchFaceConfig) {
        if !self.faces.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.faces.insert(id, config);
    }

    fn remove(&mut self, id: &str) -> bool {
        if self.faces.remove(id).is_some() {
            self.order.retain(|key| key != id);
            true
        } else {
            false
        }
    }

    fn get(&self, id: &str) -> Option<&WatchFaceConfig> {
        self.faces.get(id)
    }

    fn values(&self) -> impl Iterator<Item = &WatchFaceConfig> {
        self.order.iter().filter_map(|id| self.faces.get(id))
    }

    fn entries(&self) -> Vec<(String, WatchFaceConfig)> {
        self.order
            .iter()
            .filter_map(|id| self.faces.get(id).map(|c| (id.clone(), c.clone())))
            .collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Catalog of built-in and custom watchfaces
#[derive(Debug, Default)]
pub struct WatchFaceRegistry {
    built_in: FaceMap,
    custom: FaceMap,
}

impl WatchFaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in catalog already loaded
    pub fn with_built_ins() -> Result<Self, WatchFaceError> {
        let mut registry = Self::new();
        registry.load_built_in()?;
        Ok(registry)
    }

    /// Populate the built-in map from the compiled-in catalog.
    ///
    /// Safe to call repeatedly; the same entries are simply written again.
    pub fn load_built_in(&mut self) -> Result<usize, WatchFaceError> {
        let faces = builtin::built_in_faces()?;
        let count = faces.len();
        for face in faces {
            self.register_built_in(face);
        }
        info!("Loaded {} built-in watchfaces", count);
        Ok(count)
    }

    /// Register a built-in face under its own id
    pub fn register_built_in(&mut self, config: WatchFaceConfig) {
        self.built_in.insert(config.id.clone(), config);
    }

    /// Look up a face: built-ins first, then customs
    pub fn get(&self, id: &str) -> Option<&WatchFaceConfig> {
        self.built_in.get(id).or_else(|| self.custom.get(id))
    }

    /// Whether `id` names a built-in face
    pub fn is_built_in(&self, id: &str) -> bool {
        self.built_in.get(id).is_some()
    }

    /// Built-ins followed by customs, each in insertion order
    pub fn get_all(&self) -> Vec<&WatchFaceConfig> {
        self.built_in.values().chain(self.custom.values()).collect()
    }

    /// Custom faces only
    pub fn get_custom(&self) -> Vec<&WatchFaceConfig> {
        self.custom.values().collect()
    }

    pub fn custom_count(&self) -> usize {
        self.custom.len()
    }

    /// Validate and insert a user-supplied face.
    ///
    /// The candidate's id is rewritten to `custom_<id>` before insertion.
    /// Two imports sharing an original id land on the same key, and the later
    /// one replaces the earlier one. Returns the namespaced id.
    pub fn load_custom(&mut self, candidate: Value) -> Result<String, WatchFaceError> {
        if let Err(reason) = validator::check(&candidate) {
            debug!("Rejected watchface import: {}", reason);
            return Err(WatchFaceError::InvalidConfiguration(reason));
        }

        let mut config: WatchFaceConfig = serde_json::from_value(candidate)
            .map_err(|e| WatchFaceError::InvalidConfiguration(e.to_string()))?;

        let custom_id = namespaced_id(&config.id);
        config.id = custom_id.clone();
        if self.custom.get(&custom_id).is_some() {
            info!("Replacing custom watchface '{}'", custom_id);
        } else {
            info!("Imported custom watchface '{}'", custom_id);
        }
        self.custom.insert(custom_id.clone(), config);
        Ok(custom_id)
    }

    /// Parse JSON text and import it with [`load_custom`](Self::load_custom)
    pub fn load_custom_str(&mut self, json: &str) -> Result<String, WatchFaceError> {
        let candidate: Value = serde_json::from_str(json)?;
        self.load_custom(candidate)
    }

    /// Delete a custom face by its namespaced id. Built-ins are never removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.custom.remove(id);
        if removed {
            info!("Removed custom watchface '{}'", id);
        }
        removed
    }

    /// Write all custom faces to `store`.
    ///
    /// A failing store leaves the registry as it was.
    pub fn export_all(&self, store: &mut dyn WatchFaceStore) -> Result<(), WatchFaceError> {
        let entries = self.custom.entries();
        store.save(&entries).map_err(|e| {
            warn!("Failed to save custom watchfaces: {:#}", e);
            WatchFaceError::Persistence(e)
        })?;
        debug!("Saved {} custom watchfaces", entries.len());
        Ok(())
    }

    /// Restore custom faces from `store` under their stored keys.
    ///
    /// Stored entries were namespaced when first imported, so they are
    /// inserted as-is. A failing store leaves the registry as it was.
    pub fn import_all(&mut self, store: &dyn WatchFaceStore) -> Result<usize, WatchFaceError> {
        let entries = store.load().map_err(|e| {
            warn!("Failed to load custom watchfaces: {:#}", e);
            WatchFaceError::Persistence(e)
        })?;
        let count = entries.len();
        for (id, config) in entries {
            self.custom.insert(id, config);
        }
        info!("Loaded {} custom watchfaces from storage", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn candidate(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "version": "1.0",
            "theme": {"colors": {"background": "#000", "foreground": "#fff"}},
            "layout": {"type": "rectangular"},
            "components": [{"type": "time", "id": "time"}]
        })
    }

    #[test]
    fn test_load_built_in_is_idempotent() {
        let mut registry = WatchFaceRegistry::new();
        registry.load_built_in().unwrap();
        let first = registry.get_all().len();
        registry.load_built_in().unwrap();
        assert_eq!(registry.get_all().len(), first);
        assert!(registry.get("default").is_some());
        assert!(registry.get("neon").is_some());
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let registry = WatchFaceRegistry::with_built_ins().unwrap();
        assert!(registry.get("no-such-face").is_none());
    }

    #[test]
    fn test_load_custom_namespaces_id() {
        let mut registry = WatchFaceRegistry::new();
        let id = registry.load_custom(candidate("myface", "Mine")).unwrap();
        assert_eq!(id, "custom_myface");

        let stored = registry.get("custom_myface").unwrap();
        assert_eq!(stored.id, "custom_myface");
        assert!(registry.get("myface").is_none());
    }

    #[test]
    fn test_reimport_overwrites_same_namespaced_key() {
        let mut registry = WatchFaceRegistry::new();
        registry.load_custom(candidate("myface", "First")).unwrap();
        registry.load_custom(candidate("myface", "Second")).unwrap();

        assert_eq!(registry.custom_count(), 1);
        assert_eq!(registry.get("custom_myface").unwrap().name, "Second");
    }

    #[test]
    fn test_invalid_candidate_leaves_registry_untouched() {
        let mut registry = WatchFaceRegistry::new();
        registry.load_custom(candidate("keep", "Keep")).unwrap();

        let mut bad = candidate("broken", "Broken");
        bad["layout"]["type"] = json!("triangle");
        let err = registry.load_custom(bad).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().starts_with("Invalid watch face configuration"));

        assert_eq!(registry.custom_count(), 1);
        assert!(registry.get("custom_broken").is_none());
    }

    #[test]
    fn test_validated_but_mistyped_candidate_is_invalid() {
        let mut registry = WatchFaceRegistry::new();
        let mut bad = candidate("odd", "Odd");
        bad["theme"]["colors"]["background"] = json!(12);
        let err = registry.load_custom(bad).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(registry.custom_count(), 0);
    }

    #[test]
    fn test_load_custom_str_reports_parse_errors() {
        let mut registry = WatchFaceRegistry::new();
        let err = registry.load_custom_str("{ not json").unwrap_err();
        assert!(matches!(err, WatchFaceError::Parse(_)));
    }

    #[test]
    fn test_get_all_lists_built_ins_before_customs() {
        let mut registry = WatchFaceRegistry::with_built_ins().unwrap();
        registry.load_custom(candidate("zzz", "Z")).unwrap();
        registry.load_custom(candidate("aaa", "A")).unwrap();

        let ids: Vec<&str> = registry.get_all().iter().map(|c| c.id.as_str()).collect();
        let built_in_count = builtin::BUILT_IN_FACES.len();
        assert_eq!(ids[0], "default");
        assert_eq!(&ids[built_in_count..], &["custom_zzz", "custom_aaa"]);
    }

    #[test]
    fn test_remove_only_affects_customs() {
        let mut registry = WatchFaceRegistry::with_built_ins().unwrap();
        registry.load_custom(candidate("mine", "Mine")).unwrap();

        assert!(!registry.remove("default"));
        assert!(registry.get("default").is_some());
        assert!(registry.remove("custom_mine"));
        assert!(!registry.remove("custom_mine"));
        assert!(registry.get_custom().is_empty());
    }

    #[test]
    fn test_built_in_lookup_takes_precedence() {
        let mut registry = WatchFaceRegistry::with_built_ins().unwrap();
        let mut impostor: WatchFaceConfig =
            serde_json::from_value(candidate("default", "Impostor")).unwrap();
        impostor.id = "default".to_string();
        let store = MemoryStore::with_entries(vec![("default".to_string(), impostor)]);

        registry.import_all(&store).unwrap();
        assert_eq!(registry.custom_count(), 1);
        assert_eq!(registry.get("default").unwrap().name, "Default");
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut registry = WatchFaceRegistry::new();
        registry.load_custom(candidate("a", "A")).unwrap();
        registry.load_custom(candidate("b", "B")).unwrap();

        let mut store = MemoryStore::new();
        registry.export_all(&mut store).unwrap();
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.entries()[0].0, "custom_a");

        let mut restored = WatchFaceRegistry::new();
        assert_eq!(restored.import_all(&store).unwrap(), 2);
        assert_eq!(restored.get("custom_b").unwrap().name, "B");
    }

    #[test]
    fn test_unavailable_store_keeps_state() {
        let mut registry = WatchFaceRegistry::new();
        registry.load_custom(candidate("a", "A")).unwrap();

        let mut store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            registry.export_all(&mut store),
            Err(WatchFaceError::Persistence(_))
        ));
        assert!(matches!(
            registry.import_all(&store),
            Err(WatchFaceError::Persistence(_))
        ));
        assert_eq!(registry.custom_count(), 1);
        assert!(registry.get("custom_a").is_some());
    }
}
