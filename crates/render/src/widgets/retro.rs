//! Retro digital widgets: seven-segment clock, LED strip and LCD bar

use super::WidgetContext;
use crate::text::{cell_split, format_time, percent_label};
use crate::tree::{NodeKind, RenderNode};

const LED_COUNT: usize = 40;
const LCD_SEGMENTS: usize = 10;
const LCD_SEGMENTS_V2: usize = 20;
const AMBER: &str = "#ffcc00";

/// Lit segments for `c`, ordered top, top-left, top-right, middle,
/// bottom-left, bottom-right, bottom. Characters without a glyph are blank.
pub fn segments_for(c: char) -> [bool; 7] {
    match c {
        '0' => [true, true, true, false, true, true, true],
        '1' => [false, false, true, false, false, true, false],
        '2' => [true, false, true, true, true, false, true],
        '3' => [true, false, true, true, false, true, true],
        '4' => [false, true, true, true, false, true, false],
        '5' => [true, true, false, true, false, true, true],
        '6' => [true, true, false, true, true, true, true],
        '7' => [true, false, true, false, false, true, false],
        '8' => [true; 7],
        '9' => [true, true, true, true, false, true, true],
        _ => [false; 7],
    }
}

fn digit(c: char, ghost: bool) -> RenderNode {
    let mut node = RenderNode::new(NodeKind::Digit {
        character: c,
        segments: segments_for(c),
    })
    .with_style("onColor", AMBER);
    node = if ghost {
        node.with_style("offColor", "rgba(255, 204, 0, 0.08)")
    } else {
        node.with_style("offColor", "rgba(50, 40, 30, 0.3)")
    };
    if c == ':' {
        // Colon cells light no segments; two dots stand in for them
        node = node
            .with_child(RenderNode::lamp(true).with_style("top", "12px"))
            .with_child(RenderNode::lamp(true).with_style("bottom", "12px"));
    }
    node
}

fn seven_segment(ctx: &WidgetContext<'_>, ghost: bool) -> RenderNode {
    let value = format_time(ctx.props.remaining);
    ctx.node()
        .with_class(if ghost { "digital-display v2" } else { "digital-display" })
        .merge_style(ctx.style())
        .with_style("display", "flex")
        .with_style("alignItems", "center")
        .with_children(value.chars().map(|c| digit(c, ghost)))
}

/// `MM:SS` on seven-segment cells
pub fn digital_display(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    Some(ctx.clickable_time(seven_segment(ctx, false)))
}

/// Seven-segment cells with dim ghost segments and a glow pulse
pub fn digital_display_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let display = seven_segment(ctx, true).with_style("animation", "glowPulse 2s ease-in-out infinite");
    Some(ctx.clickable_time(display))
}

/// Color of LED `index` by its position along the strip
pub fn led_color(index: usize) -> &'static str {
    let percentage = index as f64 / LED_COUNT as f64 * 100.0;
    if percentage < 60.0 {
        "#00ff00"
    } else if percentage < 80.0 {
        AMBER
    } else {
        "#ff3333"
    }
}

/// Forty-LED strip across the top edge
pub fn retro_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let (active, _) = cell_split(ctx.progress(), LED_COUNT, false);
    let leds = (0..LED_COUNT).map(|i| {
        let lit = i < active;
        let color = led_color(i);
        let lamp = RenderNode::lamp(lit).with_style("flex", 1).with_style("height", "4px");
        if lit {
            lamp.with_style("background", color)
                .with_style("boxShadow", format!("0 0 8px {}, inset 0 0 2px rgba(255,255,255,0.3)", color))
        } else {
            lamp.with_style("background", "rgba(40, 30, 20, 0.5)")
        }
    });

    Some(
        ctx.node()
            .with_class("retro-progress")
            .merge_style(ctx.custom_style())
            .with_style("position", "absolute")
            .with_style("top", 0)
            .with_style("left", 0)
            .with_style("right", 0)
            .with_style("height", "8px")
            .with_style("display", "flex")
            .with_style("gap", "2px")
            .with_children(leds),
    )
}

fn lcd_cells(count: usize, progress: f64) -> impl Iterator<Item = RenderNode> {
    let (filled, _) = cell_split(progress, count, false);
    (0..count).map(move |i| {
        let lit = i < filled;
        let cell = RenderNode::lamp(lit).with_style("borderRadius", "2px");
        if lit {
            cell.with_style("background", "linear-gradient(to bottom, #ffcc00, #ff9900)")
        } else {
            cell.with_style("background", "rgba(100, 80, 40, 0.2)")
        }
    })
}

fn lcd_readout(progress: f64) -> RenderNode {
    RenderNode::text(percent_label(progress))
        .with_style("fontFamily", "'Orbitron', monospace")
        .with_style("color", AMBER)
        .with_style("textShadow", "0 0 10px currentColor")
}

/// Ten amber LCD cells plus the rounded percentage
pub fn lcd_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    Some(
        ctx.node()
            .merge_style(ctx.custom_style())
            .with_style("display", "flex")
            .with_style("gap", "8px")
            .with_style("background", "rgba(0, 0, 0, 0.8)")
            .with_children(lcd_cells(LCD_SEGMENTS, progress))
            .with_child(lcd_readout(progress)),
    )
}

/// Twenty-cell LCD bar with a version badge
pub fn lcd_progress_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let badge = RenderNode::text("V2")
        .with_key(format!("{}-badge", ctx.component.id))
        .with_style("position", "absolute")
        .with_style("top", "-18px")
        .with_style("right", 0)
        .with_style("fontSize", "8px")
        .with_style("color", AMBER);
    let cells = RenderNode::container()
        .with_key(format!("{}-cells", ctx.component.id))
        .with_style("display", "flex")
        .with_style("gap", "3px")
        .with_children(lcd_cells(LCD_SEGMENTS_V2, progress));

    Some(
        ctx.node()
            .with_class("lcd-progress v2")
            .merge_style(ctx.custom_style())
            .with_style("position", "relative")
            .with_style("display", "flex")
            .with_style("alignItems", "center")
            .with_style("gap", "12px")
            .with_child(badge)
            .with_child(cells)
            .with_child(lcd_readout(progress)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;
    use serde_json::json;

    fn lit_lamps(node: &RenderNode) -> usize {
        node.descendants()
            .filter(|n| matches!(n.kind, NodeKind::Lamp { lit: true }))
            .count()
    }

    #[test]
    fn test_segment_table() {
        assert_eq!(segments_for('8'), [true; 7]);
        assert_eq!(segments_for('1'), [false, false, true, false, false, true, false]);
        assert_eq!(segments_for(':'), [false; 7]);
        assert_eq!(segments_for('x'), [false; 7]);
    }

    #[test]
    fn test_digital_display_cells() {
        let comp = component(json!({"type": "custom", "id": "digital-display"}));
        let node = render(digital_display, &comp, &props(0.0, 754, true, false)).unwrap();
        let chars: String = node
            .children
            .iter()
            .filter_map(|n| match n.kind {
                NodeKind::Digit { character, .. } => Some(character),
                _ => None,
            })
            .collect();
        assert_eq!(chars, "12:34");
        // The colon contributes its two dots
        assert_eq!(lit_lamps(&node), 2);
    }

    #[test]
    fn test_led_strip_floors_and_colors() {
        let comp = component(json!({"type": "custom", "id": "retro-progress"}));
        let node = render(retro_progress, &comp, &props(49.0, 765, true, false)).unwrap();
        assert_eq!(node.children.len(), LED_COUNT);
        assert_eq!(lit_lamps(&node), 19);

        assert_eq!(led_color(0), "#00ff00");
        assert_eq!(led_color(23), "#00ff00");
        assert_eq!(led_color(24), "#ffcc00");
        assert_eq!(led_color(32), "#ff3333");
    }

    #[test]
    fn test_lcd_progress_segments() {
        let comp = component(json!({"type": "custom", "id": "lcd-progress"}));
        let p = props(57.6, 636, true, false);

        let node = render(lcd_progress, &comp, &p).unwrap();
        assert_eq!(lit_lamps(&node), 5);
        assert_eq!(node.text_content(), "58%");

        let node = render(lcd_progress_v2, &comp, &p).unwrap();
        assert_eq!(node.find("lcd-progress-cells").unwrap().children.len(), 20);
        assert_eq!(lit_lamps(&node), 11);
        assert_eq!(node.find("lcd-progress-badge").unwrap().text_content(), "V2");
    }
}
