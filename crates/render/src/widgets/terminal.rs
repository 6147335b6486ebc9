//! Terminal-themed widgets: ASCII progress, prompt header, cursor, boot
//! log, bracketed command buttons and the npm-style loader

use serde_json::Value;

use super::WidgetContext;
use crate::text::{cell_split, percent_label, substitute_duration};
use crate::tree::{Action, RenderNode};

/// Braille spinner frames
pub const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const BOOT_MESSAGES: [&str; 5] = [
    "Initializing focus protocol...",
    "Loading cognitive enhancement modules...",
    "Establishing deep work connection...",
    "Productivity systems online.",
    "Ready to focus. Timer armed.",
];

const PROMPT: &str = "user@pomo:~$";
const DEFAULT_HEADER: &str = "$ pomo --duration=25m";
const TERMINAL_GREEN: &str = "#00ff00";
const NPM_CELLS: usize = 25;
/// Upper bound on `props.width` for ASCII bars
pub const MAX_BAR_CELLS: usize = 200;

/// Spinner frame for the current second of the session
fn spinner_frame(ctx: &WidgetContext<'_>, reverse: bool) -> char {
    let elapsed = ctx.props.duration.saturating_sub(ctx.props.remaining) as usize;
    let step = elapsed % SPINNER.len();
    let index = if reverse { (SPINNER.len() - step) % SPINNER.len() } else { step };
    SPINNER[index]
}

fn bar_color(progress: f64) -> &'static str {
    if progress < 33.0 {
        "#ff6b6b"
    } else if progress < 66.0 {
        "#ffd93d"
    } else {
        TERMINAL_GREEN
    }
}

/// Cell characters from `props`, falling back to the block glyphs
fn bar_chars(ctx: &WidgetContext<'_>) -> (String, String) {
    let fill = ctx.prop_str("fillChar").unwrap_or("█").to_string();
    let empty = ctx.prop_str("emptyChar").unwrap_or("░").to_string();
    (fill, empty)
}

fn bar_width(ctx: &WidgetContext<'_>, default: usize) -> usize {
    ctx.component
        .prop("width")
        .and_then(Value::as_u64)
        .filter(|w| *w > 0)
        .map(|w| w.min(MAX_BAR_CELLS as u64) as usize)
        .unwrap_or(default)
}

/// `█████░░░░░` style bar; cell count rounds to nearest
pub fn ascii_bar(progress: f64, width: usize, fill: &str, empty: &str) -> String {
    let (filled, rest) = cell_split(progress, width, true);
    format!("{}{}", fill.repeat(filled), empty.repeat(rest))
}

fn frame_line(title: &str, width: usize) -> RenderNode {
    let rule = "─".repeat(width.saturating_sub(title.chars().count() + 4));
    RenderNode::text(format!("┌─ {} {}┐", title, rule))
        .with_style("opacity", 0.7)
        .with_style("fontSize", "10px")
}

/// Bracketed ASCII progress bar with spinner and percentage
pub fn ascii_progress(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let width = bar_width(ctx, 40);
    let (fill, empty) = bar_chars(ctx);
    let color = bar_color(progress);

    let row = RenderNode::container()
        .with_class("flex items-center gap-2")
        .with_child(RenderNode::text("│").with_style("opacity", 0.5))
        .with_child(RenderNode::text(spinner_frame(ctx, false).to_string()).with_style("color", color))
        .with_child(
            RenderNode::text(format!("[{}]", ascii_bar(progress, width, &fill, &empty)))
                .with_key(format!("{}-bar", ctx.component.id))
                .with_style("color", color)
                .with_style("textShadow", format!("0 0 5px {}", color))
                .with_style("letterSpacing", "-1px"),
        )
        .with_child(
            RenderNode::text(format!("{:>4}", percent_label(progress)))
                .with_style("color", color)
                .with_style("fontWeight", "bold"),
        );

    Some(
        ctx.node()
            .merge_style(ctx.style())
            .with_style("fontFamily", "monospace")
            .with_style("lineHeight", 1.4)
            .with_child(frame_line("Progress", width + 12))
            .with_child(row),
    )
}

/// Wider framed bar with a CRT overlay and version badge
pub fn ascii_progress_v2(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let width = bar_width(ctx, 42);
    let (fill, empty) = bar_chars(ctx);
    let color = if (33.0..66.0).contains(&progress) { "#ffd93d" } else { TERMINAL_GREEN };
    let glow = format!("0 0 5px {0}, 0 0 10px {0}", color);

    let badge = RenderNode::text("V2.0")
        .with_style("position", "absolute")
        .with_style("top", -25)
        .with_style("right", 0)
        .with_style("background", TERMINAL_GREEN)
        .with_style("color", "#000")
        .with_style("fontSize", "8px")
        .with_style("animation", "v2pulse 2s ease-in-out infinite");
    let overlay = RenderNode::container()
        .with_style("position", "absolute")
        .with_style("inset", 0)
        .with_style("background", crate::style::SCANLINE_BACKGROUND)
        .with_style("pointerEvents", "none");

    let row = RenderNode::container()
        .with_class("flex items-center gap-2")
        .with_child(RenderNode::text("│").with_style("opacity", 0.5))
        .with_child(
            RenderNode::text(ascii_bar(progress, width, &fill, &empty))
                .with_key(format!("{}-bar", ctx.component.id))
                .with_style("color", color)
                .with_style("textShadow", glow)
                .with_style("filter", "brightness(1.2)"),
        )
        .with_child(
            RenderNode::text(spinner_frame(ctx, false).to_string())
                .with_style("color", color)
                .with_style("animation", "terminalBlink 1s infinite"),
        )
        .with_child(
            RenderNode::text(format!("{:>4}", percent_label(progress)))
                .with_style("color", color)
                .with_style("fontWeight", "bold"),
        )
        .with_child(RenderNode::text("│").with_style("opacity", 0.5));

    Some(
        ctx.node()
            .merge_style(ctx.style())
            .with_style("fontFamily", "monospace")
            .with_style("position", "relative")
            .with_children([badge, overlay, frame_line("Progress", width + 10), row]),
    )
}

/// Shell prompt followed by the configured command line
pub fn terminal_header(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let template = ctx.prop_str("text").filter(|t| !t.is_empty()).unwrap_or(DEFAULT_HEADER);
    let command = substitute_duration(template, ctx.props.duration);

    let cursor = RenderNode::container()
        .with_class("cursor-blink")
        .with_style("display", "inline-block")
        .with_style("width", "0.6em")
        .with_style("height", "1.2em")
        .with_style("backgroundColor", "currentColor")
        .with_style("marginLeft", "2px");

    Some(
        ctx.node()
            .with_class("font-mono")
            .merge_style(ctx.style())
            .with_style("display", "flex")
            .with_style("alignItems", "center")
            .with_child(
                RenderNode::text(PROMPT)
                    .with_style("color", TERMINAL_GREEN)
                    .with_style("marginRight", "0.5em"),
            )
            .with_child(RenderNode::text(command).with_key(format!("{}-command", ctx.component.id)))
            .with_child(cursor),
    )
}

/// Blinking block cursor
pub fn terminal_cursor(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let mut node = ctx.node().with_class("cursor-blink");
    if let Some(position) = &ctx.component.position {
        if let (Some(x), Some(y)) = (&position.x, &position.y) {
            node = node
                .with_style("position", "absolute")
                .with_style("left", x.to_value())
                .with_style("top", y.to_value());
        }
    }
    Some(
        node.merge_style(ctx.custom_style())
            .with_child(RenderNode::text("█")),
    )
}

/// Boot log shown while a session runs
pub fn boot_messages(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    if !ctx.props.is_running {
        return None;
    }
    let mut node = ctx.node().with_class("font-mono text-xs");
    if let Some(position) = &ctx.component.position {
        if let (Some(x), Some(y)) = (&position.x, &position.y) {
            node = node
                .with_style("position", "absolute")
                .with_style("left", x.to_value())
                .with_style("top", y.to_value());
        }
    }
    let lines = BOOT_MESSAGES.iter().enumerate().map(|(i, message)| {
        RenderNode::text(format!("> {}", message))
            .with_style("animation", format!("fadeIn 0.3s ease-in {}s both", i as f64 * 0.4))
    });
    Some(node.merge_style(ctx.custom_style()).with_children(lines))
}

/// `[ START ]`/`[ PAUSE ]` and `[ STOP ]` text buttons
pub fn terminal_controls(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let id = &ctx.component.id;
    let command = |label: &str, action: Action, key: &str| {
        RenderNode::text(format!("[ {} ]", label))
            .with_key(format!("{}-{}", id, key))
            .with_style("cursor", "pointer")
            .with_style("padding", "2px 4px")
            .on_click(action)
    };
    let primary = if ctx.props.is_ticking() {
        command("PAUSE", Action::Pause, "pause")
    } else {
        command("START", Action::Start, "start")
    };

    Some(
        ctx.node()
            .with_class("font-mono flex items-center gap-2")
            .merge_style(ctx.custom_style())
            .with_child(primary)
            .with_child(RenderNode::text("│").with_style("opacity", 0.3))
            .with_child(command("STOP", Action::Stop, "stop")),
    )
}

/// npm-style `⠋ [▓▓▓░░░] 40%` loader; the spinner walks backwards unless
/// `properties.reverse` is `false`
pub fn npm_loader(ctx: &WidgetContext<'_>) -> Option<RenderNode> {
    let progress = ctx.progress();
    let reverse = ctx.component.property("reverse") != Some(&Value::Bool(false));
    let spinner = if ctx.props.is_ticking() {
        spinner_frame(ctx, reverse)
    } else {
        SPINNER[0]
    };
    let (filled, empty) = cell_split(progress, NPM_CELLS, false);
    let line = format!(
        "{} [{}{}] {}",
        spinner,
        "▓".repeat(filled),
        "░".repeat(empty),
        percent_label(progress)
    );
    Some(
        ctx.node()
            .with_class("font-mono")
            .merge_style(ctx.custom_style())
            .with_child(RenderNode::text(line)),
    )
}
