//! Neon widgets: decorative outer ring and the glowing progress ring

use serde_json::Value;

use super::WidgetContext;
use crate::tree::{NodeKind, RenderNode};

const NEON_RING_RADIUS: f64 = 100.0;
const NEON_PROGRESS_RADIUS: f64 = 85.0;
const NEON_STROKE: f64 = 3.0;
const NEON_SIZE: f64 = 200.0;
const TICK_COUNT: usize = 12;
const MAGENTA: &str = "#ff00ff";
const CYAN: &str = "#00ffff";

fn ring(percent: f64, radius: f64, stroke_width: f64) -> RenderNode {
    RenderNode::new(NodeKind::Ring {
        percent,
        radius,
        stroke_width,
    })
}

/// Point on a ring of `radius` centered in a `size` box, `percent` of the
/// way round clockwise from 12 o'clock
pub fn ring_point(percent: f64, radius: f64, size: f64) -> (f64, f64) {
    let angle = percent / 100.0 * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    let center = size / 2.0;
    (center + radius * angle.cos(), center + radius * angle.sin())
}

/// Static ring of `properties.radius` (default 100)
pub fn neon_ring(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let radius = ctx
        .component
        .property("radius")
        .and_then(Value::as_f64)
        .filter(|r| *r != 0.0)
        .unwrap_or(NEON_RING_RADIUS);
    Some(
        ctx.node()
            .merge_style(ctx.custom_style())
            .with_child(
                ring(100.0, radius, 2.0)
                    .with_style("stroke", MAGENTA)
                    .with_style("filter", format!("drop-shadow(0 0 6px {})", MAGENTA)),
            ),
    )
}

fn ticks() -> impl Iterator<Item = RenderNode> {
    (0..TICK_COUNT).map(|i| {
        RenderNode::new(NodeKind::Tick {
            angle: i as f64 * 360.0 / TICK_COUNT as f64,
            major: i % 3 == 0,
        })
        .with_style("stroke", "rgba(255, 255, 255, 0.2)")
    })
}

fn end_cap(ctx: &WidgetContext<'_>, radius: f64) -> Option<RenderNode> {
    let progress = ctx.progress();
    if progress <= 0.0 || progress >= 100.0 {
        return None;
    }
    let (x, y) = ring_point(progress, radius, NEON_SIZE);
    Some(
        RenderNode::lamp(true)
            .with_key(format!("{}-cap", ctx.component.id))
            .with_style("cx", x)
            .with_style("cy", y)
            .with_style("background", CYAN)
            .with_style("boxShadow", format!("0 0 8px {}", CYAN)),
    )
}

/// Progress ring of radius 85 with an end cap and twelve ticks
pub fn neon_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let gradient = format!("linear-gradient({}, {})", MAGENTA, CYAN);

    let mut node = ctx
        .node()
        .merge_style(ctx.custom_style())
        .with_style("position", "relative")
        .with_style("width", NEON_SIZE)
        .with_style("height", NEON_SIZE)
        .with_child(ring(100.0, NEON_PROGRESS_RADIUS, NEON_STROKE).with_style("stroke", "rgba(255, 255, 255, 0.1)"))
        .with_child(
            ring(progress, NEON_PROGRESS_RADIUS, NEON_STROKE + 2.0)
                .with_style("stroke", gradient.as_str())
                .with_style("opacity", 0.5)
                .with_style("filter", "blur(3px)"),
        )
        .with_child(
            ring(progress, NEON_PROGRESS_RADIUS, NEON_STROKE)
                .with_key(format!("{}-ring", ctx.component.id))
                .with_style("stroke", gradient.as_str())
                .with_style("strokeLinecap", "round"),
        );
    if let Some(cap) = end_cap(ctx, NEON_PROGRESS_RADIUS) {
        node = node.with_child(cap);
    }
    Some(node.with_children(ticks()))
}

/// Doubled ring with a wide glow layer behind the stroke
pub fn neon_progress_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let gradient = format!("linear-gradient({}, {}, {})", MAGENTA, CYAN, MAGENTA);
    let stroke = NEON_STROKE + 1.0;

    let mut node = ctx
        .node()
        .with_class("neon-progress v2")
        .merge_style(ctx.custom_style())
        .with_style("position", "relative")
        .with_style("width", NEON_SIZE)
        .with_style("height", NEON_SIZE)
        .with_child(ring(100.0, NEON_PROGRESS_RADIUS, stroke).with_style("stroke", "rgba(255, 255, 255, 0.08)"))
        .with_child(
            ring(progress, NEON_PROGRESS_RADIUS, stroke + 8.0)
                .with_key(format!("{}-glow", ctx.component.id))
                .with_style("stroke", "rgba(255, 0, 255, 0.2)")
                .with_style("filter", "blur(6px)"),
        )
        .with_child(
            ring(progress, NEON_PROGRESS_RADIUS, stroke + 4.0)
                .with_key(format!("{}-ring", ctx.component.id))
                .with_style("stroke", gradient.as_str())
                .with_style("strokeLinecap", "round"),
        )
        .with_child(
            ring(progress, NEON_PROGRESS_RADIUS - 10.0, 1.0)
                .with_key(format!("{}-inner", ctx.component.id))
                .with_style("stroke", CYAN)
                .with_style("opacity", 0.6),
        );
    if let Some(cap) = end_cap(ctx, NEON_PROGRESS_RADIUS) {
        node = node.with_child(cap);
    }
    Some(node.with_children(ticks()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;
    use serde_json::json;

    #[test]
    fn test_neon_ring_radius_property() {
        let comp = component(json!({"type": "custom", "id": "neon-ring", "properties": {"radius": 120}}));
        let node = render(neon_ring, &comp, &props(0.0, 1500, false, false)).unwrap();
        assert!(matches!(node.children[0].kind, NodeKind::Ring { radius, .. } if radius == 120.0));

        let bare = component(json!({"type": "custom", "id": "neon-ring"}));
        let node = render(neon_ring, &bare, &props(0.0, 1500, false, false)).unwrap();
        assert!(matches!(node.children[0].kind, NodeKind::Ring { radius, .. } if radius == 100.0));
    }

    #[test]
    fn test_neon_progress_cap_and_ticks() {
        let comp = component(json!({"type": "custom", "id": "neon-progress"}));
        let mid = render(neon_progress, &comp, &props(25.0, 1125, true, false)).unwrap();
        let ticks = mid.children.iter().filter(|n| matches!(n.kind, NodeKind::Tick { .. })).count();
        assert_eq!(ticks, 12);
        assert!(mid.find("neon-progress-cap").is_some());

        let done = render(neon_progress, &comp, &props(100.0, 0, false, false)).unwrap();
        assert!(done.find("neon-progress-cap").is_none());
    }

    #[test]
    fn test_ring_point_quarter() {
        let (x, y) = ring_point(25.0, 85.0, 200.0);
        assert!((x - 185.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_v2_has_glow_layer() {
        let comp = component(json!({"type": "custom", "id": "neon-progress"}));
        let node = render(neon_progress_v2, &comp, &props(50.0, 750, true, false)).unwrap();
        assert!(node.find("neon-progress-glow").is_some());
        assert!(node.find("neon-progress-inner").is_some());
    }
}
