//! Watchface schema: theme, layout and the root config

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::component::{StyleMap, WatchFaceComponent};

/// Root description of a watchface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchFaceConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Top-of-window progress indicator, independent of `components`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<ProgressBarConfig>,
    pub theme: WatchFaceTheme,
    pub layout: WatchFaceLayout,
    #[serde(default)]
    pub components: Vec<WatchFaceComponent>,
}

impl WatchFaceConfig {
    /// Look up a component by id
    pub fn component(&self, id: &str) -> Option<&WatchFaceComponent> {
        self.components.iter().find(|c| c.id == id)
    }
}

/// Independent top-of-window progress bar settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<String>,
}

impl ProgressBarConfig {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}

/// Named palette colors; any extra keys are kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Font family references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// Visual palette of a face
///
/// The flat `background`/`primaryColor`/... fields are the legacy format;
/// `colors` and `fonts` take precedence when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchFaceTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
    /// Engine-specific overrides (`@import`, `scanlines`, `glow`, `.container`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<StyleMap>,
}

impl WatchFaceTheme {
    pub fn background_color(&self) -> Option<&str> {
        self.colors
            .as_ref()
            .and_then(|c| c.background.as_deref())
            .or(self.background.as_deref())
    }

    pub fn foreground_color(&self) -> Option<&str> {
        self.colors
            .as_ref()
            .and_then(|c| c.foreground.as_deref())
            .or(self.text_color.as_deref())
    }

    pub fn accent(&self) -> Option<&str> {
        self.colors
            .as_ref()
            .and_then(|c| c.accent.as_deref())
            .or(self.accent_color.as_deref())
    }

    pub fn primary_font(&self) -> Option<&str> {
        self.fonts
            .as_ref()
            .and_then(|f| f.primary.as_deref())
            .or(self.font_family.as_deref())
    }

    /// Look up an engine-specific override
    pub fn custom_style(&self, key: &str) -> Option<&Value> {
        self.custom_styles.as_ref().and_then(|s| s.get(key))
    }

    /// Whether an engine flag in `customStyles` is set
    pub fn custom_flag(&self, key: &str) -> bool {
        self.custom_style(key).map(crate::is_truthy).unwrap_or(false)
    }
}

/// Layout kind, which decides content alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "circular")]
    Circular,
    #[serde(rename = "rectangular")]
    Rectangular,
    #[serde(rename = "custom")]
    Custom,
}

impl LayoutType {
    pub const KNOWN: [&'static str; 3] = ["circular", "rectangular", "custom"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Circular => "circular",
            LayoutType::Rectangular => "rectangular",
            LayoutType::Custom => "custom",
        }
    }
}

/// A CSS-like length: a bare number or a string such as `"100%"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    pub fn to_value(&self) -> Value {
        match self {
            Dimension::Number(n) => serde_json::json!(n),
            Dimension::Text(s) => Value::String(s.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSize {
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchFaceLayout {
    #[serde(rename = "type")]
    pub kind: LayoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<LayoutSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl WatchFaceLayout {
    pub fn new(kind: LayoutType) -> Self {
        Self {
            kind,
            size: None,
            padding: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_prefers_structured_colors_over_legacy() {
        let theme: WatchFaceTheme = serde_json::from_value(json!({
            "background": "#111",
            "textColor": "#eee",
            "fontFamily": "Inter",
            "colors": {"background": "#000", "glow": "#0ff"}
        }))
        .unwrap();

        assert_eq!(theme.background_color(), Some("#000"));
        // No structured foreground, so the legacy text color applies
        assert_eq!(theme.foreground_color(), Some("#eee"));
        assert_eq!(theme.primary_font(), Some("Inter"));
        assert_eq!(
            theme.colors.as_ref().unwrap().extra.get("glow").map(String::as_str),
            Some("#0ff")
        );
    }

    #[test]
    fn test_config_deserializes_with_optional_fields_missing() {
        let config: WatchFaceConfig = serde_json::from_value(json!({
            "id": "mini",
            "name": "Mini",
            "theme": {"colors": {"background": "#000", "foreground": "#fff"}},
            "layout": {"type": "rectangular", "size": {"width": "100%", "height": 120}},
            "components": [{"type": "time", "id": "t"}]
        }))
        .unwrap();

        assert_eq!(config.description, "");
        assert!(config.version.is_none());
        assert_eq!(config.layout.kind, LayoutType::Rectangular);
        let size = config.layout.size.as_ref().unwrap();
        assert_eq!(size.width, Dimension::Text("100%".to_string()));
        assert_eq!(size.height, Dimension::Number(120.0));
        assert!(config.component("t").is_some());
    }

    #[test]
    fn test_custom_flag_uses_truthiness() {
        let theme: WatchFaceTheme = serde_json::from_value(json!({
            "customStyles": {"scanlines": true, "glow": 0}
        }))
        .unwrap();
        assert!(theme.custom_flag("scanlines"));
        assert!(!theme.custom_flag("glow"));
        assert!(!theme.custom_flag("missing"));
    }
}
