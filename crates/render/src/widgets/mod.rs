//! Widget renderers
//!
//! Every widget is a plain function from a [`WidgetContext`] to an optional
//! [`RenderNode`]. The baseline set lives in a [`WidgetTable`]; enhanced
//! versions are registered separately in a [`VariantTable`].

use pomowatch_types::{StyleMap, WatchFaceComponent, WatchFaceProps, WatchFaceTheme};
use serde_json::Value;
use std::collections::HashMap;

use crate::engine::RenderOptions;
use crate::tree::{Action, RenderNode};
use crate::variant::{VariantTable, WidgetKey};

pub mod chronograph;
pub mod default_face;
pub mod minimal;
pub mod neon;
pub mod retro;
pub mod rolodex;
pub mod shared;
pub mod terminal;

/// Signature shared by every widget renderer
pub type RenderFn = fn(&WidgetContext<'_>) -> Option<RenderNode>;

/// Everything a widget may read while rendering one component
#[derive(Debug, Clone, Copy)]
pub struct WidgetContext<'a> {
    pub component: &'a WatchFaceComponent,
    pub props: &'a WatchFaceProps,
    pub theme: &'a WatchFaceTheme,
    pub options: &'a RenderOptions,
}

impl<'a> WidgetContext<'a> {
    /// Elapsed share of the session, 0-100
    pub fn progress(&self) -> f64 {
        self.props.progress
    }

    /// The component's top-level `style` map
    pub fn style(&self) -> Option<&'a StyleMap> {
        self.component.style.as_ref()
    }

    /// `properties.style`, used by custom widgets
    pub fn custom_style(&self) -> Option<&'a StyleMap> {
        self.component.property_style()
    }

    pub fn style_f64(&self, key: &str) -> Option<f64> {
        self.component.style_value(key).and_then(Value::as_f64)
    }

    pub fn prop_str(&self, key: &str) -> Option<&'a str> {
        self.component.prop(key).and_then(Value::as_str)
    }

    /// Base node keyed by the component id
    pub fn node(&self) -> RenderNode {
        RenderNode::container().with_key(self.component.id.as_str())
    }

    /// Wrap a time readout in the "set timer" affordance when a handler
    /// exists and the timer is idle; otherwise return it unchanged
    pub fn clickable_time(&self, readout: RenderNode) -> RenderNode {
        if !self.options.time_clickable || self.props.is_running {
            return readout;
        }
        RenderNode::container()
            .with_key(format!("{}-click", self.component.id))
            .with_class("hover:opacity-80")
            .with_style("cursor", "pointer")
            .with_style("userSelect", "none")
            .with_style("transition", "opacity 0.2s")
            .with_title("Click to set timer")
            .on_click(Action::TimeClick)
            .with_child(readout)
    }
}

/// Baseline (`v1`) renderers for every widget
#[derive(Clone)]
pub struct WidgetTable {
    entries: HashMap<WidgetKey, RenderFn>,
}

impl WidgetTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: WidgetKey, render: RenderFn) {
        self.entries.insert(key, render);
    }

    pub fn get(&self, key: WidgetKey) -> Option<RenderFn> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WidgetTable {
    /// Table with every shipped baseline widget registered
    fn default() -> Self {
        let mut table = Self::empty();
        register_all(&mut table);
        table
    }
}

impl std::fmt::Debug for WidgetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTable")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Register all baseline widgets
pub fn register_all(table: &mut WidgetTable) {
    table.register(WidgetKey::ProgressRing, shared::progress_ring);
    table.register(WidgetKey::TopProgress, shared::top_progress);
    table.register(WidgetKey::Time, shared::time_display);
    table.register(WidgetKey::Status, shared::status_display);
    table.register(WidgetKey::Controls, shared::control_buttons);

    table.register(WidgetKey::AsciiProgress, terminal::ascii_progress);
    table.register(WidgetKey::TerminalHeader, terminal::terminal_header);
    table.register(WidgetKey::TerminalCursor, terminal::terminal_cursor);
    table.register(WidgetKey::TerminalBoot, terminal::boot_messages);
    table.register(WidgetKey::TerminalControls, terminal::terminal_controls);
    table.register(WidgetKey::NpmLoader, terminal::npm_loader);

    table.register(WidgetKey::DigitalDisplay, retro::digital_display);
    table.register(WidgetKey::RetroProgress, retro::retro_progress);
    table.register(WidgetKey::LcdProgress, retro::lcd_progress);

    table.register(WidgetKey::MinimalProgress, minimal::minimal_progress);
    table.register(WidgetKey::MinimalProgressDot, minimal::progress_dot);
    table.register(WidgetKey::MinimalCompact, minimal::compact);

    table.register(WidgetKey::NeonRing, neon::neon_ring);
    table.register(WidgetKey::NeonProgress, neon::neon_progress);

    table.register(WidgetKey::ChronographFace, chronograph::face);
    table.register(WidgetKey::ChronographMarkings, chronograph::markings);
    table.register(WidgetKey::ChronographSweep, chronograph::sweep);

    table.register(WidgetKey::DefaultProgress, default_face::default_progress);
    table.register(WidgetKey::Rolodex, rolodex::rolodex);
}

/// Register the enhanced (`v2`) widgets
pub fn register_variants(table: &mut VariantTable) {
    table.register(WidgetKey::ProgressRing, shared::progress_ring_v2);
    table.register(WidgetKey::AsciiProgress, terminal::ascii_progress_v2);
    table.register(WidgetKey::DigitalDisplay, retro::digital_display_v2);
    table.register(WidgetKey::LcdProgress, retro::lcd_progress_v2);
    table.register(WidgetKey::NeonProgress, neon::neon_progress_v2);
    table.register(WidgetKey::Rolodex, rolodex::rolodex_v2);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::json;

    /// Component built from a JSON literal
    pub fn component(value: Value) -> WatchFaceComponent {
        serde_json::from_value(value).unwrap()
    }

    pub fn props(progress: f64, remaining: u64, is_running: bool, is_paused: bool) -> WatchFaceProps {
        WatchFaceProps {
            duration: 1500,
            remaining,
            progress,
            is_running,
            is_paused,
            session_name: None,
        }
    }

    pub fn theme() -> WatchFaceTheme {
        serde_json::from_value(json!({
            "primaryColor": "#3b82f6",
            "secondaryColor": "#1e293b",
            "accentColor": "#8b5cf6",
            "colors": {"background": "#000", "foreground": "#fff", "accent": "#0ff"}
        }))
        .unwrap()
    }

    pub fn render_with(
        render: RenderFn,
        component: &WatchFaceComponent,
        props: &WatchFaceProps,
        options: &RenderOptions,
    ) -> Option<RenderNode> {
        let theme = theme();
        render(&WidgetContext {
            component,
            props,
            theme: &theme,
            options,
        })
    }

    pub fn render(render: RenderFn, component: &WatchFaceComponent, props: &WatchFaceProps) -> Option<RenderNode> {
        render_with(render, component, props, &RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_widget_has_a_baseline() {
        let table = WidgetTable::default();
        assert_eq!(table.len(), 5 + WidgetKey::CUSTOM.len());
        for key in WidgetKey::CUSTOM {
            assert!(table.get(key).is_some(), "missing baseline for {}", key.name());
        }
    }

    #[test]
    fn test_clickable_time_only_when_idle_with_handler() {
        let comp = component(json!({"type": "time", "id": "time"}));
        let clickable = RenderOptions {
            time_clickable: true,
            ..Default::default()
        };

        let idle = render_with(shared::time_display, &comp, &props(0.0, 1500, false, false), &clickable).unwrap();
        assert_eq!(idle.on_click, Some(Action::TimeClick));
        assert_eq!(idle.title.as_deref(), Some("Click to set timer"));
        assert_eq!(idle.style_str("cursor"), Some("pointer"));

        let running = render_with(shared::time_display, &comp, &props(10.0, 1350, true, false), &clickable).unwrap();
        assert_eq!(running.on_click, None);

        let no_handler = render(shared::time_display, &comp, &props(0.0, 1500, false, false)).unwrap();
        assert_eq!(no_handler.on_click, None);
    }
}
