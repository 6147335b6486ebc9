//! Widgets for the built-in component kinds: progress ring, top bar, time
//! readout, status line and control buttons

use pomowatch_types::{Position, TimerStatus};
use serde_json::{json, Value};

use super::WidgetContext;
use crate::text::{fill_placeholders, format_time};
use crate::tree::{Action, Icon, NodeKind, RenderNode};

const RING_RADIUS: f64 = 66.0;
const RING_STROKE: f64 = 6.0;

/// Share of the ring to draw: elapsed when `showElapsed`, else remaining
pub fn ring_fraction(progress: f64, show_elapsed: bool) -> f64 {
    if show_elapsed {
        progress
    } else {
        100.0 - progress
    }
}

fn ring_geometry(ctx: &WidgetContext<'_>) -> (f64, f64, f64) {
    let radius = ctx.style_f64("radius").filter(|r| *r != 0.0).unwrap_or(RING_RADIUS);
    let stroke = ctx.style_f64("strokeWidth").filter(|w| *w != 0.0).unwrap_or(RING_STROKE);
    let percent = ring_fraction(ctx.progress(), ctx.component.prop_flag("showElapsed"));
    (percent, radius, stroke)
}

fn gradient_enabled(ctx: &WidgetContext<'_>) -> bool {
    ctx.component
        .style_value("gradient")
        .map(pomowatch_types::is_truthy)
        .unwrap_or(false)
}

/// Baseline circular progress ring
pub fn progress_ring(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let (percent, radius, stroke_width) = ring_geometry(ctx);
    let gradient = gradient_enabled(ctx);
    let theme = ctx.theme;

    let mut ring = RenderNode::new(NodeKind::Ring {
        percent,
        radius,
        stroke_width,
    })
    .with_key(format!("{}-ring", ctx.component.id))
    .with_style("strokeLinecap", "round");
    if let Some(track) = &theme.secondary_color {
        ring = ring.with_style("trackStroke", track.as_str());
    }
    if gradient {
        ring = ring
            .with_style("gradientFrom", json!(theme.primary_color))
            .with_style("gradientTo", json!(theme.accent_color));
    } else if let Some(primary) = &theme.primary_color {
        ring = ring.with_style("stroke", primary.as_str());
    }

    let mut node = ctx.node().with_class("relative w-full h-full");
    if gradient {
        node = node.with_child(
            RenderNode::container()
                .with_class("absolute inset-0 rounded-full bg-gradient-to-br from-primary/20 to-primary/5 blur-xl"),
        );
    }
    Some(node.with_child(ring))
}

/// Enhanced ring: faint track, blurred halo and a gradient stroke
pub fn progress_ring_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let (percent, radius, stroke_width) = ring_geometry(ctx);
    let id = &ctx.component.id;

    let track = RenderNode::new(NodeKind::Ring {
        percent: 100.0,
        radius,
        stroke_width,
    })
    .with_key(format!("{}-track", id))
    .with_style("stroke", "rgba(255, 255, 255, 0.1)");
    let halo = RenderNode::new(NodeKind::Ring {
        percent,
        radius,
        stroke_width: stroke_width + 2.0,
    })
    .with_key(format!("{}-halo", id))
    .with_style("stroke", "rgba(74, 158, 255, 0.2)")
    .with_style("filter", "blur(4px)");
    let ring = RenderNode::new(NodeKind::Ring {
        percent,
        radius,
        stroke_width,
    })
    .with_key(format!("{}-ring", id))
    .with_style("gradientFrom", json!(ctx.theme.primary_color.as_deref().unwrap_or("#4a9eff")))
    .with_style("gradientTo", json!(ctx.theme.accent_color.as_deref().unwrap_or("#8b5cf6")))
    .with_style("strokeLinecap", "round")
    .with_style("transition", "stroke-dashoffset 0.5s cubic-bezier(0.4, 0, 0.2, 1)");

    Some(
        ctx.node()
            .with_class("relative w-full h-full v2")
            .with_children([track, halo, ring]),
    )
}

/// Full-width bar pinned to the top of the face
pub fn top_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let color = ctx
        .component
        .style_value("progressColor")
        .and_then(Value::as_str)
        .unwrap_or("#00ff00");

    let fill = RenderNode::new(NodeKind::Bar {
        percent: ctx.progress(),
    })
    .with_style("height", "100%")
    .with_style("background", color)
    .with_style("transition", "width 0.3s ease-out")
    .with_style("boxShadow", format!("0 0 4px {}", color));

    Some(
        ctx.node()
            .with_style("position", "absolute")
            .with_style("top", 0)
            .with_style("left", 0)
            .with_style("right", 0)
            .with_style("height", "2px")
            .with_style("background", "rgba(0, 255, 0, 0.1)")
            .merge_style(ctx.style())
            .with_child(fill),
    )
}

/// Horizontally centered absolute placement at a numeric `y`
fn pinned_center(node: RenderNode, position: Option<&Position>) -> RenderNode {
    let top = position
        .filter(|p| p.x_is("center"))
        .and_then(|p| p.y.as_ref())
        .filter(|y| y.as_number().is_some());
    match top {
        Some(y) => node
            .with_style("position", "absolute")
            .with_style("top", y.to_value())
            .with_style("left", "50%")
            .with_style("transform", "translateX(-50%)"),
        None => node,
    }
}

/// Placement for `x: "center"` plus a keyword or numeric `y`
fn centered_position(node: RenderNode, position: Option<&Position>, allow_middle: bool) -> RenderNode {
    let Some(position) = position.filter(|p| p.x_is("center")) else {
        return node;
    };
    if allow_middle && position.y_is("center") {
        return node
            .with_style("position", "absolute")
            .with_style("top", "50%")
            .with_style("left", "50%")
            .with_style("transform", "translate(-50%, -50%)");
    }
    if position.y.as_ref().is_some_and(|y| y.as_number().is_some()) {
        return pinned_center(node, Some(position));
    }
    node.with_style("textAlign", "center")
}

/// Remaining time as `MM:SS`
pub fn time_display(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let readout = centered_position(ctx.node(), ctx.component.position.as_ref(), true)
        .merge_style(ctx.style())
        .with_child(RenderNode::text(format_time(ctx.props.remaining)).with_class("tabular-nums tracking-tight"));
    Some(ctx.clickable_time(readout))
}

/// Status label, optionally interpolated into `props.format`
pub fn status_display(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let status = ctx.props.status();
    let text = match ctx.prop_str("format") {
        Some(format) => fill_placeholders(format, |name| {
            (name == "status").then(|| status.label().to_string())
        }),
        None => status.label().to_string(),
    };

    let position = ctx.component.position.as_ref();
    let mut node = ctx.node();
    if position.is_some_and(|p| p.x_is("right") && p.y_is("bottom")) {
        node = node
            .with_style("position", "absolute")
            .with_style("bottom", "10px")
            .with_style("right", "30px");
    } else {
        node = centered_position(node, position, false);
    }
    node = node.merge_style(ctx.style());
    if status == TimerStatus::Finished {
        node = node
            .with_style("textShadow", "0 0 10px currentColor")
            .with_style("animation", "pulse 2s infinite");
    }
    Some(node.with_child(RenderNode::text(text)))
}

/// Start/Pause, Stop and Reset buttons
pub fn control_buttons(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    if ctx.options.hide_controls {
        return None;
    }
    let component = ctx.component;
    let show_labels = component.prop_flag("showLabels");
    let size = ctx.prop_str("size").unwrap_or("medium");
    let button_style = component.prop("buttonStyle");
    let preset = button_style.and_then(Value::as_str).unwrap_or("gradient");

    let padding = match (size, preset == "terminal") {
        ("small", true) => "px-2 py-1",
        ("small", false) => "p-1.5",
        ("large", true) => "px-4 py-3",
        ("large", false) => "p-4",
        (_, true) => "px-3 py-2",
        (_, false) => "p-3",
    };
    let base_class = match preset {
        "gradient" => format!("{} rounded-xl transition-all duration-300 hover:scale-105", padding),
        "terminal" => format!(
            "{} border border-current transition-all hover:bg-current hover:text-black font-mono text-xs",
            padding
        ),
        _ => format!("{} rounded-lg transition-colors", padding),
    };
    let gap = match size {
        "small" => "gap-1",
        "large" => "gap-4",
        _ => "gap-3",
    };

    let button = |action: Action, icon: Icon, label: &str, primary: bool| {
        let mut node = RenderNode::new(NodeKind::Button {
            label: label.to_string(),
            icon: Some(icon),
            show_label: show_labels,
        })
        .with_key(format!("{}-{}", component.id, label.to_lowercase()))
        .on_click(action);
        // An object-valued buttonStyle is applied inline instead of a preset
        if let Some(inline) = button_style.and_then(Value::as_object) {
            node = node.merge_style(Some(inline));
            if show_labels {
                node = node.with_class("flex items-center gap-2");
            }
            return node;
        }
        let color = match (preset, primary) {
            ("gradient", true) => {
                " bg-gradient-to-br from-primary to-primary/80 text-primary-foreground hover:shadow-lg hover:shadow-primary/25"
            }
            ("gradient", false) => " bg-white/10 backdrop-blur-sm hover:bg-white/20",
            _ => "",
        };
        let labels = if show_labels { " flex items-center gap-2" } else { "" };
        node.with_class(format!("{}{}{}", base_class, color, labels))
    };

    let primary = if ctx.props.is_ticking() {
        button(Action::Pause, Icon::Pause, "Pause", true)
    } else {
        button(Action::Start, Icon::Play, "Start", true)
    };

    let justify = match ctx.component.style_value("justifyContent").and_then(Value::as_str) {
        Some("flex-start") => "justify-start",
        _ => "justify-center",
    };
    Some(
        pinned_center(ctx.node(), component.position.as_ref())
            .with_class(format!("flex {} {}", gap, justify))
            .merge_style(ctx.style())
            .with_child(primary)
            .with_child(button(Action::Stop, Icon::Square, "Stop", false))
            .with_child(button(Action::Reset, Icon::RotateCcw, "Reset", false)),
    )
}
