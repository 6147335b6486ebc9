//! Flip-card clock

use super::WidgetContext;
use crate::tree::RenderNode;

const CARD_NAMES: [&str; 4] = ["m1", "m2", "s1", "s2"];

/// Card digits of `MM:SS`; minutes past 99 show as 99
pub fn card_digits(remaining: u64) -> [char; 4] {
    let minutes = (remaining / 60).min(99);
    let seconds = remaining % 60;
    let text = format!("{:02}{:02}", minutes, seconds);
    let mut digits = ['0'; 4];
    for (slot, c) in digits.iter_mut().zip(text.chars()) {
        *slot = c;
    }
    digits
}

fn card(ctx: &WidgetContext<'_>, name: &str, value: char) -> RenderNode {
    RenderNode::container()
        .with_key(format!("{}-{}", ctx.component.id, name))
        .with_class("rolodex-card")
        .with_style("width", "56px")
        .with_style("height", "84px")
        .with_style("fontSize", "68px")
        .with_style("fontFamily", "'Bebas Neue', sans-serif")
        .with_style("color", "#f0f0f0")
        .with_style("background", "#2a2a2a")
        .with_style("borderRadius", "8px")
        .with_child(RenderNode::text(value.to_string()))
        .with_child(
            RenderNode::container()
                .with_class("rolodex-hinge")
                .with_style("top", "50%")
                .with_style("height", "1px")
                .with_style("background", "rgba(0,0,0,0.5)"),
        )
}

fn separator() -> RenderNode {
    RenderNode::text(":")
        .with_style("fontSize", "48px")
        .with_style("color", "#f0f0f0")
        .with_style("margin", "0 8px")
}

fn cards_row(ctx: &WidgetContext<'_>, cards: Vec<RenderNode>) -> RenderNode {
    let mut cards = cards.into_iter();
    let mut row = ctx
        .node()
        .with_class("rolodex")
        .merge_style(ctx.custom_style())
        .with_style("display", "flex")
        .with_style("alignItems", "center")
        .with_style("justifyContent", "center")
        .with_style("gap", "6px");
    row = row.with_children(cards.by_ref().take(2));
    row = row.with_child(separator());
    row.with_children(cards)
}

/// `MM:SS` on four flip cards
pub fn rolodex(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let digits = card_digits(ctx.props.remaining);
    let cards = CARD_NAMES
        .iter()
        .zip(digits)
        .map(|(name, value)| card(ctx, name, value))
        .collect();
    Some(ctx.clickable_time(cards_row(ctx, cards)))
}

/// Split-flap cards: each card has a top and bottom half, and a card whose
/// digit changed in the last tick flips from the old value to the new one
pub fn rolodex_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let digits = card_digits(ctx.props.remaining);
    let previous = if ctx.props.is_ticking() {
        card_digits(ctx.props.remaining.saturating_add(1))
    } else {
        digits
    };

    let cards = CARD_NAMES
        .iter()
        .zip(digits.into_iter().zip(previous))
        .map(|(name, (value, before))| {
            let flipping = value != before;
            let top = RenderNode::container()
                .with_class("flap-top")
                .with_style("transformOrigin", "bottom")
                .with_child(RenderNode::text(before.to_string()));
            let bottom = RenderNode::container()
                .with_class("flap-bottom")
                .with_style("transformOrigin", "top")
                .with_child(RenderNode::text(value.to_string()));
            let mut node = RenderNode::container()
                .with_key(format!("{}-{}", ctx.component.id, name))
                .with_class(if flipping { "rolodex-card v2 flipping" } else { "rolodex-card v2" })
                .with_style("width", "56px")
                .with_style("height", "84px")
                .with_style("perspective", "300px")
                .with_child(top)
                .with_child(bottom);
            if flipping {
                node = node.with_style("animation", "flipDown 0.3s ease-in");
            }
            node
        })
        .collect();
    Some(ctx.clickable_time(cards_row(ctx, cards)))
}
