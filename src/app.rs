//! Application composition root
//!
//! Ties the registry, its persistence store and the renderer together the way
//! a host UI uses them: populate once at startup, import/remove faces on user
//! request, and render one frame per timer update.

use anyhow::{Context, Result};
use log::{info, warn};
use pomowatch_core::{WatchFaceConfig, WatchFaceError, WatchFaceRegistry, WatchFaceStore, DEFAULT_FACE_ID};
use pomowatch_render::{RenderOptions, RenderTree, StyleSheets, Variant, WatchFaceRenderer};
use pomowatch_types::{TimerUpdate, WatchFaceProps};
use std::path::Path;

use crate::config::AppConfig;

pub struct PomoWatch {
    registry: WatchFaceRegistry,
    renderer: WatchFaceRenderer,
    store: Box<dyn WatchFaceStore>,
    styles: StyleSheets,
    selected: String,
    variant: Variant,
    hide_controls: bool,
}

impl PomoWatch {
    /// Build the registry from the built-in catalog plus whatever the store
    /// holds, then select the configured face.
    ///
    /// A failing store only costs the custom faces; a broken built-in catalog
    /// is an error.
    pub fn new(config: &AppConfig, store: Box<dyn WatchFaceStore>) -> Result<Self, WatchFaceError> {
        let mut registry = WatchFaceRegistry::with_built_ins()?;
        if registry.import_all(store.as_ref()).is_err() {
            warn!("Continuing with built-in watchfaces only");
        }

        let mut app = Self {
            registry,
            renderer: WatchFaceRenderer::new(),
            store,
            styles: StyleSheets::new(),
            selected: DEFAULT_FACE_ID.to_string(),
            variant: config.watchface.variant,
            hide_controls: config.watchface.hide_controls,
        };
        app.select(&config.watchface.selected);
        Ok(app)
    }

    pub fn registry(&self) -> &WatchFaceRegistry {
        &self.registry
    }

    pub fn store(&self) -> &dyn WatchFaceStore {
        self.store.as_ref()
    }

    pub fn styles(&self) -> &StyleSheets {
        &self.styles
    }

    /// Select a face by id, falling back to the default face for unknown ids.
    /// Returns the id actually selected.
    pub fn select(&mut self, id: &str) -> &str {
        if self.registry.get(id).is_some() {
            self.selected = id.to_string();
        } else {
            warn!("Unknown watchface '{}', falling back to '{}'", id, DEFAULT_FACE_ID);
            self.selected = DEFAULT_FACE_ID.to_string();
        }
        &self.selected
    }

    pub fn selected_id(&self) -> &str {
        &self.selected
    }

    pub fn current(&self) -> Option<&WatchFaceConfig> {
        self.registry.get(&self.selected)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    pub fn set_hide_controls(&mut self, hide: bool) {
        self.hide_controls = hide;
    }

    /// Import a watchface from JSON text and persist the custom set.
    ///
    /// Returns the namespaced id. Persistence failures are logged and do not
    /// undo the import.
    pub fn import_json(&mut self, json: &str) -> Result<String, WatchFaceError> {
        let id = self.registry.load_custom_str(json)?;
        self.persist();
        Ok(id)
    }

    /// Import a watchface file
    pub fn import_file(&mut self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let id = self.import_json(&content)?;
        info!("Imported {} as '{}'", path.display(), id);
        Ok(id)
    }

    /// Remove a custom face. Removing the selected face reselects the default.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.registry.remove(id) {
            return false;
        }
        self.persist();
        if self.selected == id {
            self.selected = DEFAULT_FACE_ID.to_string();
        }
        true
    }

    fn persist(&mut self) {
        // export_all already logs the failure
        let _ = self.registry.export_all(self.store.as_mut());
    }

    /// Render the selected face for one timer update
    pub fn render(&mut self, update: &TimerUpdate, time_clickable: bool) -> Option<RenderTree> {
        let props = WatchFaceProps::from(update);
        let options = RenderOptions {
            time_clickable,
            hide_controls: self.hide_controls,
        };
        let config = self.registry.get(&self.selected)?;
        Some(
            self.renderer
                .render(config, &props, self.variant, &options, &mut self.styles),
        )
    }
}
