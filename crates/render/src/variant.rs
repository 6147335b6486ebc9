//! Render variants and the enhanced-implementation lookup table

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::widgets::{self, RenderFn};

/// Whole-face rendering variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Variant {
    /// Baseline rendering, always available
    #[default]
    V1,
    /// Enhanced rendering where an implementation is registered
    V2,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::V1 => "v1",
            Variant::V2 => "v2",
        }
    }

    /// Lenient parse: anything unrecognized selects the baseline
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!("Unknown render variant '{}', using v1", name);
            Variant::V1
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" => Ok(Variant::V1),
            "v2" => Ok(Variant::V2),
            other => Err(format!("unknown variant '{}' (expected v1 or v2)", other)),
        }
    }
}

impl From<String> for Variant {
    fn from(name: String) -> Self {
        Variant::from_name(&name)
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.as_str().to_string()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every concrete widget the dispatch engine can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKey {
    // Built-in component kinds
    ProgressRing,
    TopProgress,
    Time,
    Status,
    Controls,
    // Custom widgets
    AsciiProgress,
    TerminalHeader,
    TerminalCursor,
    TerminalBoot,
    TerminalControls,
    NpmLoader,
    DigitalDisplay,
    RetroProgress,
    LcdProgress,
    MinimalProgress,
    MinimalProgressDot,
    MinimalCompact,
    NeonRing,
    NeonProgress,
    ChronographFace,
    ChronographMarkings,
    ChronographSweep,
    DefaultProgress,
    Rolodex,
}

impl WidgetKey {
    /// Widgets addressable from a `custom` component
    pub const CUSTOM: [WidgetKey; 19] = [
        WidgetKey::AsciiProgress,
        WidgetKey::TerminalHeader,
        WidgetKey::TerminalCursor,
        WidgetKey::TerminalBoot,
        WidgetKey::TerminalControls,
        WidgetKey::NpmLoader,
        WidgetKey::DigitalDisplay,
        WidgetKey::RetroProgress,
        WidgetKey::LcdProgress,
        WidgetKey::MinimalProgress,
        WidgetKey::MinimalProgressDot,
        WidgetKey::MinimalCompact,
        WidgetKey::NeonRing,
        WidgetKey::NeonProgress,
        WidgetKey::ChronographFace,
        WidgetKey::ChronographMarkings,
        WidgetKey::ChronographSweep,
        WidgetKey::DefaultProgress,
        WidgetKey::Rolodex,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKey::ProgressRing => "progress-ring",
            WidgetKey::TopProgress => "top-progress",
            WidgetKey::Time => "time",
            WidgetKey::Status => "status",
            WidgetKey::Controls => "controls",
            WidgetKey::AsciiProgress => "ascii-progress",
            WidgetKey::TerminalHeader => "terminal-header",
            WidgetKey::TerminalCursor => "terminal-cursor",
            WidgetKey::TerminalBoot => "terminal-boot",
            WidgetKey::TerminalControls => "terminal-controls",
            WidgetKey::NpmLoader => "npm-loader",
            WidgetKey::DigitalDisplay => "digital-display",
            WidgetKey::RetroProgress => "retro-progress",
            WidgetKey::LcdProgress => "lcd-progress",
            WidgetKey::MinimalProgress => "minimal-progress",
            WidgetKey::MinimalProgressDot => "minimal-progress-dot",
            WidgetKey::MinimalCompact => "minimal-compact",
            WidgetKey::NeonRing => "neon-ring",
            WidgetKey::NeonProgress => "neon-progress",
            WidgetKey::ChronographFace => "chronograph-face",
            WidgetKey::ChronographMarkings => "chronograph-markings",
            WidgetKey::ChronographSweep => "chronograph-sweep",
            WidgetKey::DefaultProgress => "default-progress",
            WidgetKey::Rolodex => "rolodex",
        }
    }

    /// Resolve the sub-dispatch key of a `custom` component
    pub fn from_custom_key(key: &str) -> Option<Self> {
        Self::CUSTOM.into_iter().find(|w| w.name() == key)
    }

    /// Resolve any widget name, built-in kinds included
    pub fn from_name(name: &str) -> Option<Self> {
        const BUILT_IN: [WidgetKey; 5] = [
            WidgetKey::ProgressRing,
            WidgetKey::TopProgress,
            WidgetKey::Time,
            WidgetKey::Status,
            WidgetKey::Controls,
        ];
        BUILT_IN
            .into_iter()
            .chain(Self::CUSTOM)
            .find(|w| w.name() == name)
    }
}

/// Enhanced (`v2`) implementations, keyed by widget
///
/// The table never holds baseline renderers; a lookup miss means "use v1".
#[derive(Clone, Default)]
pub struct VariantTable {
    entries: HashMap<WidgetKey, RenderFn>,
}

impl VariantTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated with every shipped enhanced widget
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        widgets::register_variants(&mut table);
        table
    }

    pub fn register(&mut self, key: WidgetKey, render: RenderFn) {
        self.entries.insert(key, render);
    }

    /// Look up an enhanced implementation by widget name
    pub fn resolve(&self, name: &str) -> Option<RenderFn> {
        WidgetKey::from_name(name).and_then(|key| self.resolve_key(key))
    }

    pub fn resolve_key(&self, key: WidgetKey) -> Option<RenderFn> {
        self.entries.get(&key).copied()
    }

    /// Names with an enhanced implementation, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().map(WidgetKey::name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for VariantTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantTable")
            .field("entries", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing_is_lenient() {
        assert_eq!("v2".parse::<Variant>(), Ok(Variant::V2));
        assert_eq!("V1".parse::<Variant>(), Ok(Variant::V1));
        assert!("v3".parse::<Variant>().is_err());
        assert_eq!(Variant::from_name("v3"), Variant::V1);

        let parsed: Variant = serde_json::from_str("\"sparkly\"").unwrap();
        assert_eq!(parsed, Variant::V1);
        assert_eq!(serde_json::to_string(&Variant::V2).unwrap(), "\"v2\"");
    }

    #[test]
    fn test_widget_names_round_trip() {
        for key in WidgetKey::CUSTOM {
            assert_eq!(WidgetKey::from_custom_key(key.name()), Some(key));
            assert_eq!(WidgetKey::from_name(key.name()), Some(key));
        }
        assert_eq!(WidgetKey::from_name("progress-ring"), Some(WidgetKey::ProgressRing));
        // Built-in kinds are not reachable through a custom component
        assert_eq!(WidgetKey::from_custom_key("progress-ring"), None);
        assert_eq!(WidgetKey::from_custom_key("warp-drive"), None);
    }

    #[test]
    fn test_default_table_contents() {
        let table = VariantTable::with_defaults();
        assert_eq!(
            table.names(),
            vec![
                "ascii-progress",
                "digital-display",
                "lcd-progress",
                "neon-progress",
                "progress-ring",
                "rolodex"
            ]
        );
        assert!(table.resolve("neon-progress").is_some());
        assert!(table.resolve("status").is_none());
        assert!(table.resolve("no-such-widget").is_none());
    }
}
