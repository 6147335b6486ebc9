//! Chronograph widgets: dial face, minute markings and the sweep hand

use super::WidgetContext;
use crate::text::percent_label;
use crate::tree::{NodeKind, RenderNode};

const MARKINGS: usize = 60;
const HAND_COLOR: &str = "#3b82f6";

/// Sweep hand angle in degrees clockwise from 12 o'clock
pub fn sweep_angle(progress: f64) -> f64 {
    progress * 3.6
}

/// Empty dial styled entirely by the face
pub fn face(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    Some(
        ctx.node()
            .with_class("chronograph-face")
            .merge_style(ctx.custom_style()),
    )
}

/// Sixty ticks with a major tick every five
pub fn markings(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let ticks = (0..MARKINGS).map(|i| {
        let major = i % 5 == 0;
        RenderNode::new(NodeKind::Tick {
            angle: i as f64 * 6.0,
            major,
        })
        .with_style("stroke", if major { "rgba(255, 255, 255, 0.6)" } else { "rgba(255, 255, 255, 0.2)" })
    });
    Some(
        ctx.node()
            .with_class("chronograph-markings")
            .merge_style(ctx.custom_style())
            .with_children(ticks),
    )
}

/// Sweep hand pointing at the elapsed share of the dial
pub fn sweep(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let hand = RenderNode::new(NodeKind::Tick {
        angle: sweep_angle(progress),
        major: true,
    })
    .with_key(format!("{}-hand", ctx.component.id))
    .with_style("stroke", HAND_COLOR)
    .with_style("filter", "drop-shadow(0 0 3px rgba(59, 130, 246, 0.5))");
    let readout = RenderNode::text(percent_label(progress))
        .with_style("position", "absolute")
        .with_style("bottom", "60px")
        .with_style("color", "#64748b");

    Some(
        ctx.node()
            .merge_style(ctx.custom_style())
            .with_style("position", "absolute")
            .with_style("top", "50%")
            .with_style("left", "50%")
            .with_style("transform", "translate(-50%, -50%)")
            .with_style("width", "240px")
            .with_style("height", "240px")
            .with_child(RenderNode::new(NodeKind::Ring {
                percent: progress,
                radius: 110.0,
                stroke_width: 2.0,
            }))
            .with_child(hand)
            .with_child(readout),
    )
}
