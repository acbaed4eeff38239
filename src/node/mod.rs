//! Node kinds, pointer events, and the capability view shared by both tree
//! representations.
//!
//! The per-node converter and the tree walkers are written once against
//! [`NodeView`]; the two concrete representations live in [`vnode`]
//! (immutable, value-semantics) and [`live`] (mutable, surface-attached).

pub mod live;
pub mod vnode;

pub use live::{LiveNode, Surface};
pub use vnode::{NodeBindings, VirtualNode};

use std::fmt;

use crate::style::StyleMap;

/// The closed set of convertible node kinds.
///
/// Computed once per node from its tag and, for input-like nodes, its role
/// attribute. Input-like nodes whose role is not `button` or `submit` never
/// classify as any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `h2` nodes.
    Heading,
    /// `h3` nodes.
    Subheading,
    /// `a` nodes.
    Link,
    /// `button` nodes.
    Button,
    /// `input` nodes with a `button` or `submit` role.
    ButtonInput,
}

impl NodeKind {
    /// All kinds in dispatch order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Heading,
        NodeKind::Subheading,
        NodeKind::Link,
        NodeKind::Button,
        NodeKind::ButtonInput,
    ];

    /// Classifies a tag (and role, for inputs) into a kind.
    pub fn classify(tag: &str, role: Option<&str>) -> Option<NodeKind> {
        match tag.to_ascii_lowercase().as_str() {
            "h2" => Some(NodeKind::Heading),
            "h3" => Some(NodeKind::Subheading),
            "a" => Some(NodeKind::Link),
            "button" => Some(NodeKind::Button),
            "input" => match role {
                Some("button") | Some("submit") => Some(NodeKind::ButtonInput),
                _ => None,
            },
            _ => None,
        }
    }

    /// The label used in conversion summaries.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Heading => "HEADING",
            NodeKind::Subheading => "SUBHEADING",
            NodeKind::Link => "LINK",
            NodeKind::Button => "BUTTON",
            NodeKind::ButtonInput => "INPUT",
        }
    }

    /// Whether the kind carries a disabled state.
    pub fn is_button_like(self) -> bool {
        matches!(self, NodeKind::Button | NodeKind::ButtonInput)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pointer interaction signals delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl PointerEvent {
    pub const ALL: [PointerEvent; 4] = [
        PointerEvent::Enter,
        PointerEvent::Leave,
        PointerEvent::Down,
        PointerEvent::Up,
    ];
}

/// The capability view the converter needs of a node, independent of its
/// representation.
pub trait NodeView {
    /// The node's tag identity.
    fn tag(&self) -> String;

    /// The role attribute, where the representation carries one.
    fn role(&self) -> Option<String>;

    /// Snapshot of the node's existing inline styles.
    fn existing_styles(&self) -> StyleMap;

    /// Snapshot of the node's existing class tokens.
    fn existing_classes(&self) -> Vec<String>;

    /// Whether the node is disabled right now.
    fn is_disabled(&self) -> bool;

    /// The node's kind, if it classifies as convertible.
    fn kind(&self) -> Option<NodeKind> {
        NodeKind::classify(&self.tag(), self.role().as_deref())
    }
}
