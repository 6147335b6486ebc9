//! Stylesheet injection and face-level container styling

use log::debug;
use pomowatch_types::{LayoutType, StyleMap, WatchFaceConfig, WatchFaceLayout, WatchFaceTheme};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Scanline overlay applied when `customStyles.scanlines` is set
pub const SCANLINE_BACKGROUND: &str = "repeating-linear-gradient(0deg, rgba(0, 255, 0, 0.03), \
     rgba(0, 255, 0, 0.03) 1px, transparent 1px, transparent 2px)";

/// Document-level stylesheet registry, keyed by node id
pub trait StyleHost {
    fn has_style(&self, id: &str) -> bool;
    fn insert_style(&mut self, id: &str, css: &str);
}

/// In-memory [`StyleHost`]
#[derive(Debug, Clone, Default)]
pub struct StyleSheets {
    sheets: BTreeMap<String, String>,
}

impl StyleSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl StyleHost for StyleSheets {
    fn has_style(&self, id: &str) -> bool {
        self.sheets.contains_key(id)
    }

    fn insert_style(&mut self, id: &str, css: &str) {
        self.sheets.insert(id.to_string(), css.to_string());
    }
}

/// Id of the style node holding a face's raw stylesheet fragment
pub fn style_node_id(face_id: &str) -> String {
    format!("watchface-{}-styles", face_id)
}

/// Ensure the face's `@import` fragment is present in `host`.
///
/// Returns `true` only when a node was created; an existing node for the same
/// face is left untouched.
pub fn inject_custom_styles(config: &WatchFaceConfig, host: &mut dyn StyleHost) -> bool {
    let Some(css) = config.theme.custom_style("@import").and_then(Value::as_str) else {
        return false;
    };
    let id = style_node_id(&config.id);
    if host.has_style(&id) {
        return false;
    }
    debug!("Injecting stylesheet '{}'", id);
    host.insert_style(&id, css);
    true
}

/// Class list of the outer face container
pub fn container_class(theme: &WatchFaceTheme) -> String {
    if theme.custom_flag("scanlines") {
        "watch-face-container scanlines".to_string()
    } else {
        "watch-face-container".to_string()
    }
}

/// Style of the outer face container (full window, palette, overlays)
pub fn container_style(theme: &WatchFaceTheme, layout: &WatchFaceLayout) -> StyleMap {
    let mut style = StyleMap::new();
    style.insert("width".into(), json!("100%"));
    style.insert("height".into(), json!("100%"));
    if let Some(padding) = layout.padding {
        style.insert("padding".into(), json!(padding));
    }
    if let Some(background) = theme.background_color() {
        style.insert("background".into(), json!(background));
    }
    if let Some(color) = theme.foreground_color() {
        style.insert("color".into(), json!(color));
    }
    if let Some(font) = theme.primary_font() {
        style.insert("fontFamily".into(), json!(font));
    }
    style.insert("position".into(), json!("relative"));
    style.insert("display".into(), json!("flex"));
    style.insert("alignItems".into(), json!("center"));
    style.insert("justifyContent".into(), json!("center"));

    if theme.custom_flag("scanlines") {
        style.insert("backgroundImage".into(), json!(SCANLINE_BACKGROUND));
    }
    if theme.custom_flag("glow") {
        style.insert("filter".into(), json!("contrast(1.1)"));
    }
    if let Some(overrides) = theme.custom_style(".container").and_then(Value::as_object) {
        for (key, value) in overrides {
            style.insert(key.clone(), value.clone());
        }
    }
    style
}

/// Style of the padded content box; alignment follows the layout kind
pub fn content_style(layout: &WatchFaceLayout) -> StyleMap {
    let (width, height) = match &layout.size {
        Some(size) => (size.width.to_value(), size.height.to_value()),
        None => (json!("auto"), json!("auto")),
    };
    let align = match layout.kind {
        LayoutType::Rectangular => "flex-start",
        LayoutType::Circular | LayoutType::Custom => "center",
    };

    let mut style = StyleMap::new();
    style.insert("width".into(), width);
    style.insert("height".into(), height);
    style.insert("position".into(), json!("relative"));
    style.insert("display".into(), json!("flex"));
    style.insert("alignItems".into(), json!(align));
    style.insert("justifyContent".into(), json!(align));
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(custom_styles: Value) -> WatchFaceConfig {
        serde_json::from_value(json!({
            "id": "crt",
            "name": "CRT",
            "theme": {
                "colors": {"background": "#000", "foreground": "#0f0"},
                "customStyles": custom_styles
            },
            "layout": {"type": "rectangular", "padding": 20},
            "components": []
        }))
        .unwrap()
    }

    #[test]
    fn test_injection_is_idempotent_per_face() {
        let config = face(json!({"@import": "@keyframes blink {}"}));
        let mut sheets = StyleSheets::new();

        assert!(inject_custom_styles(&config, &mut sheets));
        assert!(!inject_custom_styles(&config, &mut sheets));
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets.get("watchface-crt-styles"), Some("@keyframes blink {}"));
    }

    #[test]
    fn test_no_injection_without_fragment() {
        let config = face(json!({"scanlines": true}));
        let mut sheets = StyleSheets::new();
        assert!(!inject_custom_styles(&config, &mut sheets));
        assert!(sheets.is_empty());
    }

    #[test]
    fn test_container_style_flags_and_overrides() {
        let config = face(json!({
            "scanlines": true,
            "glow": true,
            ".container": {"background": "#111", "letterSpacing": "1px"}
        }));
        let style = container_style(&config.theme, &config.layout);

        assert_eq!(style["padding"], json!(20.0));
        assert_eq!(style["color"], json!("#0f0"));
        assert_eq!(style["backgroundImage"], json!(SCANLINE_BACKGROUND));
        assert_eq!(style["filter"], json!("contrast(1.1)"));
        // `.container` overrides are applied last
        assert_eq!(style["background"], json!("#111"));
        assert_eq!(style["letterSpacing"], json!("1px"));
        assert_eq!(container_class(&config.theme), "watch-face-container scanlines");
    }

    #[test]
    fn test_content_alignment_follows_layout() {
        let config = face(json!({}));
        let style = content_style(&config.layout);
        assert_eq!(style["alignItems"], json!("flex-start"));
        assert_eq!(style["width"], json!("auto"));

        let circular = WatchFaceLayout::new(LayoutType::Circular);
        assert_eq!(content_style(&circular)["justifyContent"], json!("center"));
    }
}
