//! Watchface component descriptors
//!
//! A component is one visual element of a face. Its `type` is the dispatch
//! key for the renderer; `style`, `props` and `properties` are opaque maps
//! that individual widgets interpret.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Open-ended presentation map, passed through to the render tree
pub type StyleMap = serde_json::Map<String, Value>;

/// Open-ended component configuration map
pub type PropMap = serde_json::Map<String, Value>;

/// Component kind (the `type` field of a component)
///
/// The five named kinds are a stable wire contract for persisted and imported
/// watchfaces. Any other tag deserializes into `Unknown` so that a face
/// assembled without validation still loads; the renderer draws nothing for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Time,
    Progress,
    Status,
    Controls,
    Custom,
    Unknown(String),
}

impl ComponentKind {
    /// All kinds accepted by the validator
    pub const KNOWN: [&'static str; 5] = ["time", "progress", "status", "controls", "custom"];

    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Time => "time",
            ComponentKind::Progress => "progress",
            ComponentKind::Status => "status",
            ComponentKind::Controls => "controls",
            ComponentKind::Custom => "custom",
            ComponentKind::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Unknown(_))
    }
}

impl From<String> for ComponentKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "time" => ComponentKind::Time,
            "progress" => ComponentKind::Progress,
            "status" => ComponentKind::Status,
            "controls" => ComponentKind::Controls,
            "custom" => ComponentKind::Custom,
            _ => ComponentKind::Unknown(tag),
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position coordinate: either a literal number or a keyword such as
/// `"center"` or `"bottom"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Keyword(String),
}

impl Coordinate {
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Coordinate::Keyword(k) if k == keyword)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Keyword(_) => None,
        }
    }

    /// Convert to a style value (numbers stay numeric, keywords stay strings)
    pub fn to_value(&self) -> Value {
        match self {
            Coordinate::Number(n) => serde_json::json!(n),
            Coordinate::Keyword(k) => Value::String(k.clone()),
        }
    }
}

/// Optional placement hint for a component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Coordinate>,
}

impl Position {
    pub fn x_is(&self, keyword: &str) -> bool {
        self.x.as_ref().is_some_and(|x| x.is_keyword(keyword))
    }

    pub fn y_is(&self, keyword: &str) -> bool {
        self.y.as_ref().is_some_and(|y| y.is_keyword(keyword))
    }
}

/// One entry of a watchface's component list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchFaceComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropMap>,
}

impl WatchFaceComponent {
    pub fn new(kind: ComponentKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            position: None,
            style: None,
            props: None,
            properties: None,
        }
    }

    /// Look up a key in `style`
    pub fn style_value(&self, key: &str) -> Option<&Value> {
        self.style.as_ref().and_then(|s| s.get(key))
    }

    /// Look up a key in `props`
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.as_ref().and_then(|p| p.get(key))
    }

    /// Look up a key in `properties`
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }

    /// Boolean prop, treating absence as `false`
    pub fn prop_flag(&self, key: &str) -> bool {
        self.prop(key).map(crate::is_truthy).unwrap_or(false)
    }

    /// Key selecting the concrete widget of a `custom` component:
    /// `properties.component` when it is a non-empty string, else the id
    pub fn widget_key(&self) -> &str {
        match self.property("component").and_then(Value::as_str) {
            Some(key) if !key.is_empty() => key,
            _ => &self.id,
        }
    }

    /// `properties.style`, which custom widgets use in place of `style`
    pub fn property_style(&self) -> Option<&StyleMap> {
        self.property("style").and_then(Value::as_object)
    }

    pub fn position_is_bottom(&self) -> bool {
        self.position.as_ref().is_some_and(|p| p.y_is("bottom"))
    }
}
