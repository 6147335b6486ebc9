//! Backend-agnostic render tree
//!
//! Widgets produce [`RenderNode`]s rather than drawing directly, so the same
//! frame can be painted by a GUI toolkit, dumped as JSON, or inspected in
//! tests. Interactive nodes carry an [`Action`] instead of a callback; the
//! host routes it to its timer through [`TimerControls`].

use pomowatch_types::StyleMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// User interaction attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Pause,
    Stop,
    Reset,
    /// Open the duration editor (only offered while the timer is idle)
    TimeClick,
}

/// Timer callbacks supplied by the host application
pub trait TimerControls {
    fn start(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn reset(&mut self);

    /// Called when a clickable time readout is activated
    fn time_click(&mut self) {}
}

impl Action {
    /// Route this action to the host's timer
    pub fn dispatch(self, controls: &mut dyn TimerControls) {
        match self {
            Action::Start => controls.start(),
            Action::Pause => controls.pause(),
            Action::Stop => controls.stop(),
            Action::Reset => controls.reset(),
            Action::TimeClick => controls.time_click(),
        }
    }
}

/// Button glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Play,
    Pause,
    Square,
    RotateCcw,
}

/// What a node draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Plain box grouping its children
    Container,
    Text {
        text: String,
    },
    /// Circular progress stroke; `percent` is the filled share (0-100)
    Ring {
        percent: f64,
        radius: f64,
        stroke_width: f64,
    },
    /// Linear progress fill; `percent` is the filled share (0-100)
    Bar {
        percent: f64,
    },
    /// One seven-segment cell. Segment order: top, top-left, top-right,
    /// middle, bottom-left, bottom-right, bottom.
    Digit {
        character: char,
        segments: [bool; 7],
    },
    /// LED, LCD cell or indicator dot
    Lamp {
        lit: bool,
    },
    /// Dial tick mark or hand at `angle` degrees clockwise from 12 o'clock
    Tick {
        angle: f64,
        major: bool,
    },
    Button {
        label: String,
        icon: Option<Icon>,
        show_label: bool,
    },
}

/// One node of a rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub style: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            class: None,
            style: StyleMap::new(),
            title: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn container() -> Self {
        Self::new(NodeKind::Container)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text { text: text.into() })
    }

    pub fn lamp(lit: bool) -> Self {
        Self::new(NodeKind::Lamp { lit })
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.style.insert(key.to_string(), value.into());
        self
    }

    /// Merge a style map over the current style; later keys win
    pub fn merge_style(mut self, style: Option<&StyleMap>) -> Self {
        if let Some(style) = style {
            for (key, value) in style {
                self.style.insert(key.clone(), value.clone());
            }
        }
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first iterator over this node and all descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Find the first node (depth-first) with the given key
    pub fn find(&self, key: &str) -> Option<&RenderNode> {
        self.descendants().find(|n| n.key.as_deref() == Some(key))
    }

    /// Concatenated text of every text node, depth-first
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|n| match &n.kind {
                NodeKind::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn style_str(&self, key: &str) -> Option<&str> {
        self.style.get(key).and_then(Value::as_str)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        match &self.kind {
            NodeKind::Container => write!(f, "box")?,
            NodeKind::Text { text } => write!(f, "text {:?}", text)?,
            NodeKind::Ring { percent, radius, .. } => write!(f, "ring {:.1}% r={}", percent, radius)?,
            NodeKind::Bar { percent } => write!(f, "bar {:.1}%", percent)?,
            NodeKind::Digit { character, .. } => write!(f, "digit {:?}", character)?,
            NodeKind::Lamp { lit } => write!(f, "lamp {}", if *lit { "on" } else { "off" })?,
            NodeKind::Tick { angle, major } => {
                write!(f, "tick {:.1}deg{}", angle, if *major { " major" } else { "" })?
            }
            NodeKind::Button { label, .. } => write!(f, "button {:?}", label)?,
        }
        if let Some(key) = &self.key {
            write!(f, " #{}", key)?;
        }
        if let Some(class) = &self.class {
            write!(f, " .{}", class.replace(' ', "."))?;
        }
        if let Some(action) = self.on_click {
            write!(f, " -> {:?}", action)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for RenderNode {
    /// Indented one-line-per-node outline, used by the CLI preview
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A fully rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub face_id: String,
    pub root: RenderNode,
    /// Top-of-window progress bar, when the face configures a visible one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<RenderNode>,
}

impl RenderTree {
    pub fn find(&self, key: &str) -> Option<&RenderNode> {
        self.root.find(key)
    }

    /// Every interactive node as `(key, action)`, in document order
    pub fn actions(&self) -> Vec<(Option<&str>, Action)> {
        self.root
            .descendants()
            .filter_map(|n| n.on_click.map(|a| (n.key.as_deref(), a)))
            .collect()
    }

    /// Activate the node with `key`, returning the action that fired
    pub fn click(&self, key: &str, controls: &mut dyn TimerControls) -> Option<Action> {
        let action = self.find(key)?.on_click?;
        action.dispatch(controls);
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl TimerControls for Recorder {
        fn start(&mut self) {
            self.calls.push("start");
        }
        fn pause(&mut self) {
            self.calls.push("pause");
        }
        fn stop(&mut self) {
            self.calls.push("stop");
        }
        fn reset(&mut self) {
            self.calls.push("reset");
        }
    }

    fn sample() -> RenderNode {
        RenderNode::container()
            .with_key("root")
            .with_child(RenderNode::text("12:"))
            .with_child(
                RenderNode::container()
                    .with_child(RenderNode::text("34"))
                    .with_child(RenderNode::new(NodeKind::Button {
                        label: "Stop".to_string(),
                        icon: Some(Icon::Square),
                        show_label: false,
                    })
                    .with_key("stop")
                    .on_click(Action::Stop)),
            )
    }

    #[test]
    fn test_descendants_are_depth_first() {
        let root = sample();
        assert_eq!(root.text_content(), "12:34");
        assert_eq!(root.descendants().count(), 5);
        assert!(root.find("stop").is_some());
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_click_dispatches_to_controls() {
        let tree = RenderTree {
            face_id: "x".to_string(),
            root: sample(),
            progress_bar: None,
        };
        let mut recorder = Recorder::default();
        assert_eq!(tree.click("stop", &mut recorder), Some(Action::Stop));
        assert_eq!(tree.click("root", &mut recorder), None);
        assert_eq!(recorder.calls, vec!["stop"]);
        // Default time_click is a no-op
        Action::TimeClick.dispatch(&mut recorder);
        assert_eq!(recorder.calls.len(), 1);
    }

    #[test]
    fn test_serialized_node_is_tagged_by_kind() {
        let node = RenderNode::new(NodeKind::Bar { percent: 25.0 }).with_style("height", "2px");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["percent"], 25.0);
        assert_eq!(json["style"]["height"], "2px");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_outline_lists_each_node() {
        let outline = sample().to_string();
        assert_eq!(outline.lines().count(), 5);
        assert!(outline.contains("button \"Stop\" #stop -> Stop"));
    }
}
