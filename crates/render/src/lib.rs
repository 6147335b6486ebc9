//! pomowatch-render: watchface render tree and component dispatch.
//!
//! [`WatchFaceRenderer`] maps a watchface config and live timer props onto a
//! backend-agnostic [`RenderTree`]. Widgets are plain functions looked up in a
//! baseline table, with enhanced (`v2`) versions in a [`VariantTable`].

pub mod engine;
pub mod style;
pub mod text;
pub mod tree;
pub mod variant;
pub mod widgets;

pub use engine::{is_edge_component, partition_components, widget_for, RenderOptions, WatchFaceRenderer};
pub use style::{inject_custom_styles, style_node_id, StyleHost, StyleSheets};
pub use tree::{Action, Icon, NodeKind, RenderNode, RenderTree, TimerControls};
pub use variant::{Variant, VariantTable, WidgetKey};
pub use widgets::{RenderFn, WidgetContext, WidgetTable};
