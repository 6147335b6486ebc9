//! Component dispatch engine
//!
//! Turns one [`WatchFaceConfig`] plus live [`WatchFaceProps`] into a
//! [`RenderTree`]. Rendering never fails: unknown component kinds, unknown
//! custom widgets and missing enhanced variants all degrade to either the
//! baseline widget or no node at all.

use log::{debug, trace};
use pomowatch_types::{
    ComponentKind, LayoutType, ProgressBarConfig, WatchFaceComponent, WatchFaceConfig, WatchFaceProps,
};
use serde_json::Value;

use crate::style::{container_class, container_style, content_style, inject_custom_styles, StyleHost};
use crate::text::parse_css_int;
use crate::tree::{NodeKind, RenderNode, RenderTree};
use crate::variant::{Variant, VariantTable, WidgetKey};
use crate::widgets::{WidgetContext, WidgetTable};

/// Component id that selects the top bar instead of a ring
pub const TOP_PROGRESS_ID: &str = "top-progress";

/// Distance (in CSS pixels) under which a `style.bottom` pins a component
/// to the edge
const EDGE_BOTTOM_THRESHOLD: i64 = 50;

/// Per-render switches supplied by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// A time-click handler exists; idle time readouts become clickable
    pub time_clickable: bool,
    /// Suppress `controls` components entirely
    pub hide_controls: bool,
}

/// Whether a component escapes the padded content box and renders against
/// the outer container
pub fn is_edge_component(component: &WatchFaceComponent) -> bool {
    if component.position_is_bottom() {
        return true;
    }
    match component.style_value("bottom") {
        Some(Value::String(bottom)) if !bottom.is_empty() => {
            bottom.contains('-') || parse_css_int(bottom).is_some_and(|n| n < EDGE_BOTTOM_THRESHOLD)
        }
        _ => false,
    }
}

/// Split components into `(regular, edge)`, each keeping the original order
pub fn partition_components(
    components: &[WatchFaceComponent],
) -> (Vec<&WatchFaceComponent>, Vec<&WatchFaceComponent>) {
    components.iter().partition(|c| !is_edge_component(c))
}

/// Concrete widget for a component, or `None` when nothing should render
pub fn widget_for(component: &WatchFaceComponent) -> Option<WidgetKey> {
    match &component.kind {
        ComponentKind::Progress if component.id == TOP_PROGRESS_ID => Some(WidgetKey::TopProgress),
        ComponentKind::Progress => Some(WidgetKey::ProgressRing),
        ComponentKind::Time => Some(WidgetKey::Time),
        ComponentKind::Status => Some(WidgetKey::Status),
        ComponentKind::Controls => Some(WidgetKey::Controls),
        ComponentKind::Custom => {
            let key = component.widget_key();
            let widget = WidgetKey::from_custom_key(key);
            if widget.is_none() {
                debug!("Unknown custom widget '{}' on component '{}'", key, component.id);
            }
            widget
        }
        ComponentKind::Unknown(tag) => {
            debug!("Skipping component '{}' with unknown type '{}'", component.id, tag);
            None
        }
    }
}

/// Class of the inner box holding regular components
fn layout_class(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::Circular => "flex flex-col items-center justify-center h-full relative",
        LayoutType::Rectangular => "flex flex-col h-full w-full items-start justify-start",
        // Earlier releases rendered only edge components for custom layouts
        LayoutType::Custom => "relative h-full w-full",
    }
}

/// Node for the face-level progress bar, unless hidden or absent
fn progress_bar_node(config: &ProgressBarConfig, props: &WatchFaceProps) -> Option<RenderNode> {
    if config.is_hidden() {
        return None;
    }
    let mut fill = RenderNode::new(NodeKind::Bar {
        percent: props.progress,
    })
    .with_key("progress-bar-fill")
    .with_style("height", "100%");
    if let Some(gradient) = &config.gradient {
        fill = fill.with_style("background", gradient.as_str());
    } else if let Some(color) = &config.color {
        fill = fill.with_style("background", color.as_str());
    }
    if let Some(glow) = &config.glow {
        fill = fill.with_style("boxShadow", glow.as_str());
    }

    let mut track = RenderNode::container()
        .with_key("progress-bar")
        .with_style("width", "100%")
        .with_style("height", config.height.as_deref().unwrap_or("3px"));
    if let Some(background) = &config.background {
        track = track.with_style("background", background.as_str());
    }
    Some(track.with_child(fill))
}

/// Stateless renderer holding the baseline and enhanced widget tables
#[derive(Debug, Clone)]
pub struct WatchFaceRenderer {
    widgets: WidgetTable,
    variants: VariantTable,
}

impl WatchFaceRenderer {
    /// Renderer with every shipped widget and variant registered
    pub fn new() -> Self {
        Self {
            widgets: WidgetTable::default(),
            variants: VariantTable::with_defaults(),
        }
    }

    /// Renderer over caller-supplied tables
    pub fn with_tables(widgets: WidgetTable, variants: VariantTable) -> Self {
        Self { widgets, variants }
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    /// Render one frame.
    ///
    /// The only side effect is the idempotent stylesheet injection into
    /// `styles`; the returned tree is a pure function of the inputs.
    pub fn render(
        &self,
        config: &WatchFaceConfig,
        props: &WatchFaceProps,
        variant: Variant,
        options: &RenderOptions,
        styles: &mut dyn StyleHost,
    ) -> RenderTree {
        inject_custom_styles(config, styles);

        let (regular, edge) = partition_components(&config.components);
        trace!(
            "Rendering '{}' ({}): {} regular, {} edge components",
            config.id,
            variant,
            regular.len(),
            edge.len()
        );

        let render_all = |components: Vec<&WatchFaceComponent>| -> Vec<RenderNode> {
            components
                .into_iter()
                .filter_map(|c| self.render_component(config, c, props, variant, options))
                .collect()
        };

        let inner = RenderNode::container()
            .with_class(layout_class(config.layout.kind))
            .with_children(render_all(regular));
        let content = RenderNode::container()
            .with_key("content")
            .merge_style(Some(&content_style(&config.layout)))
            .with_child(inner);

        let root = RenderNode::container()
            .with_key("watch-face")
            .with_class(container_class(&config.theme))
            .merge_style(Some(&container_style(&config.theme, &config.layout)))
            .with_child(content)
            .with_children(render_all(edge));

        RenderTree {
            face_id: config.id.clone(),
            root,
            progress_bar: config
                .progress_bar
                .as_ref()
                .and_then(|bar| progress_bar_node(bar, props)),
        }
    }

    /// Render a single component; `None` for anything that draws nothing
    pub fn render_component(
        &self,
        config: &WatchFaceConfig,
        component: &WatchFaceComponent,
        props: &WatchFaceProps,
        variant: Variant,
        options: &RenderOptions,
    ) -> Option<RenderNode> {
        let key = widget_for(component)?;
        let render = match variant {
            Variant::V2 => self.variants.resolve_key(key).or_else(|| {
                trace!("No v2 implementation for '{}', using baseline", key.name());
                self.widgets.get(key)
            }),
            Variant::V1 => self.widgets.get(key),
        };
        let Some(render) = render else {
            debug!("No renderer registered for '{}'", key.name());
            return None;
        };

        render(&WidgetContext {
            component,
            props,
            theme: &config.theme,
            options,
        })
    }
}

impl Default for WatchFaceRenderer {
    fn default() -> Self {
        Self::new()
    }
}
