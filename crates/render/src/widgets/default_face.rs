//! Default face progress ring with quarter markers

use super::WidgetContext;
use crate::tree::{NodeKind, RenderNode};

const RADIUS: f64 = 80.0;
const STROKE: f64 = 4.0;
const MARKERS: [f64; 4] = [0.0, 25.0, 50.0, 75.0];

pub fn default_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    // The stroke sits inside the box, two stroke widths in from the edge
    let inner = RADIUS - STROKE * 2.0;

    let markers = MARKERS.iter().map(|&marker| {
        let active = progress >= marker;
        RenderNode::lamp(active)
            .with_key(format!("{}-marker-{}", ctx.component.id, marker as u32))
            .with_style("angle", marker * 3.6)
            .with_style("background", if active { "#60a5fa" } else { "rgba(255, 255, 255, 0.2)" })
    });

    Some(
        ctx.node()
            .merge_style(ctx.custom_style())
            .with_style("position", "absolute")
            .with_style("top", "50%")
            .with_style("left", "50%")
            .with_style("transform", "translate(-50%, -50%)")
            .with_style("width", RADIUS * 2.0)
            .with_style("height", RADIUS * 2.0)
            .with_child(
                RenderNode::new(NodeKind::Ring {
                    percent: 100.0,
                    radius: inner,
                    stroke_width: STROKE,
                })
                .with_style("stroke", "rgba(255, 255, 255, 0.1)"),
            )
            .with_child(
                RenderNode::new(NodeKind::Ring {
                    percent: progress,
                    radius: inner,
                    stroke_width: STROKE,
                })
                .with_key(format!("{}-ring", ctx.component.id))
                .with_style("gradientFrom", "#3b82f6")
                .with_style("gradientTo", "#60a5fa")
                .with_style("strokeLinecap", "round"),
            )
            .with_children(markers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;
    use serde_json::json;

    #[test]
    fn test_markers_light_at_threshold() {
        let comp = component(json!({"type": "custom", "id": "default-progress"}));
        let node = render(default_progress, &comp, &props(50.0, 750, true, false)).unwrap();
        let lit = |m: &str| matches!(node.find(m).unwrap().kind, NodeKind::Lamp { lit: true });
        assert!(lit("default-progress-marker-0"));
        assert!(lit("default-progress-marker-25"));
        assert!(lit("default-progress-marker-50"));
        assert!(!lit("default-progress-marker-75"));
    }
}
