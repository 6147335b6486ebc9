//! Minimal widgets: hairline progress bar, breathing dot, compact card

use super::WidgetContext;
use crate::text::format_time;
use crate::tree::{Action, Icon, NodeKind, RenderNode};

/// Thin bar with a glowing tip while the session is in progress
pub fn minimal_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let track = RenderNode::container()
        .with_style("position", "absolute")
        .with_style("inset", 0)
        .with_style("background", "currentColor")
        .with_style("opacity", 0.1);
    let fill = RenderNode::new(NodeKind::Bar { percent: progress })
        .with_key(format!("{}-fill", ctx.component.id))
        .with_style("background", "currentColor")
        .with_style("boxShadow", "0 0 10px currentColor")
        .with_style("opacity", 0.9)
        .with_child(
            RenderNode::container()
                .with_style("background", "linear-gradient(90deg, transparent 0%, rgba(255,255,255,0.3) 50%, transparent 100%)")
                .with_style("animation", "shimmer 2s infinite"),
        );

    let mut node = ctx
        .node()
        .merge_style(ctx.custom_style())
        .with_style("position", "relative")
        .with_style("overflow", "hidden")
        .with_child(track)
        .with_child(fill);
    if progress > 0.0 && progress < 100.0 {
        node = node.with_child(
            RenderNode::lamp(true)
                .with_key(format!("{}-tip", ctx.component.id))
                .with_style("position", "absolute")
                .with_style("top", "50%")
                .with_style("left", format!("{}%", progress))
                .with_style("transform", "translate(-50%, -50%)")
                .with_style("filter", "blur(4px)")
                .with_style("animation", "pulse 2s ease-in-out infinite"),
        );
    }
    Some(node)
}

/// Opacity of the progress dot: brightens with progress while ticking
pub fn dot_opacity(progress: f64, ticking: bool) -> f64 {
    if ticking {
        (0.4 + progress.clamp(0.0, 100.0) / 100.0 * 0.6).min(1.0)
    } else {
        0.2
    }
}

pub fn progress_dot(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let ticking = ctx.props.is_ticking();
    Some(
        RenderNode::lamp(ticking)
            .with_key(ctx.component.id.as_str())
            .with_style("width", "6px")
            .with_style("height", "6px")
            .with_style("borderRadius", "50%")
            .with_style("backgroundColor", "currentColor")
            .with_style("opacity", dot_opacity(ctx.progress(), ticking))
            .with_style("transition", "opacity 0.3s ease")
            .merge_style(ctx.custom_style()),
    )
}

/// Compact card: time, play/pause and stop, progress strip
pub fn compact(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let id = &ctx.component.id;
    let toggle = if ctx.props.is_ticking() {
        RenderNode::new(NodeKind::Button {
            label: "Pause".to_string(),
            icon: Some(Icon::Pause),
            show_label: false,
        })
        .on_click(Action::Pause)
    } else {
        RenderNode::new(NodeKind::Button {
            label: "Start".to_string(),
            icon: Some(Icon::Play),
            show_label: false,
        })
        .on_click(Action::Start)
    };
    let stop = RenderNode::new(NodeKind::Button {
        label: "Stop".to_string(),
        icon: Some(Icon::RotateCcw),
        show_label: false,
    })
    .with_key(format!("{}-stop", id))
    .on_click(Action::Stop);

    let time = RenderNode::text(format_time(ctx.props.remaining))
        .with_key(format!("{}-time", id))
        .with_style("fontSize", "36px")
        .with_style("fontFeatureSettings", "'tnum'")
        .with_style("textAlign", "center");
    let strip = RenderNode::new(NodeKind::Bar {
        percent: ctx.progress(),
    })
    .with_style("height", "3px")
    .with_style("borderRadius", "1.5px");
    let buttons = RenderNode::container()
        .with_class("flex justify-center gap-2")
        .with_child(toggle.with_key(format!("{}-toggle", id)))
        .with_child(stop);

    Some(
        ctx.node()
            .with_style("display", "flex")
            .with_style("flexDirection", "column")
            .with_style("gap", "10px")
            .with_style("padding", "16px")
            .with_style("borderRadius", "12px")
            .with_style("width", "180px")
            .with_children([time, strip, buttons]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;
    use serde_json::json;

    #[test]
    fn test_tip_only_mid_session() {
        let comp = component(json!({"type": "custom", "id": "minimal-progress"}));
        let mid = render(minimal_progress, &comp, &props(40.0, 900, true, false)).unwrap();
        assert_eq!(mid.find("minimal-progress-tip").unwrap().style_str("left"), Some("40%"));

        for edge in [0.0, 100.0] {
            let node = render(minimal_progress, &comp, &props(edge, 0, false, false)).unwrap();
            assert!(node.find("minimal-progress-tip").is_none());
        }
    }

    #[test]
    fn test_dot_opacity() {
        assert_eq!(dot_opacity(0.0, true), 0.4);
        assert!((dot_opacity(50.0, true) - 0.7).abs() < 1e-9);
        assert_eq!(dot_opacity(100.0, true), 1.0);
        assert_eq!(dot_opacity(80.0, false), 0.2);

        let comp = component(json!({"type": "custom", "id": "minimal-progress-dot"}));
        let paused = render(progress_dot, &comp, &props(50.0, 750, true, true)).unwrap();
        assert_eq!(paused.style["opacity"], json!(0.2));
    }

    #[test]
    fn test_compact_toggle() {
        let comp = component(json!({"type": "custom", "id": "minimal-compact"}));
        let idle = render(compact, &comp, &props(0.0, 1500, false, false)).unwrap();
        assert_eq!(idle.find("minimal-compact-toggle").unwrap().on_click, Some(Action::Start));
        assert_eq!(idle.find("minimal-compact-time").unwrap().text_content(), "25:00");

        let running = render(compact, &comp, &props(10.0, 1350, true, false)).unwrap();
        assert_eq!(running.find("minimal-compact-toggle").unwrap().on_click, Some(Action::Pause));
        assert_eq!(running.find("minimal-compact-stop").unwrap().on_click, Some(Action::Stop));
    }
}
