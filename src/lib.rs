//! Declarative colour scheme application for UI node trees.
//!
//! `recolour` applies a [`ColourScheme`] (base colours plus optional per-role
//! colour sets for headings, subheadings, links and buttons) onto a tree of
//! UI nodes, without disturbing any colouring the tree's author already set.
//! It works identically over two tree representations:
//!
//! - [`VirtualNode`]: an immutable description tree; converting rebuilds it
//!   with merged attributes and is strictly pure.
//! - [`LiveNode`]: a mutable tree attached to a rendering [`Surface`];
//!   converting mutates in place, attaches pointer listeners, and re-observes
//!   buttons for later disabled transitions.
//!
//! Colour values come in two forms, classified once at parse time: *raw*
//! encodings (leading `#`) are written to the matching inline style channel,
//! while *semantic class tokens* are appended to the node's class list and
//! rely on a pre-defined style rule. Nodes that already carry colouring (an
//! inline declaration or a colour-indicating class) keep it, checked per
//! channel.
//!
//! # Quick start
//!
//! ```rust
//! use recolour::{ColourScheme, LinkColours, PlainColours, VirtualNode, VirtualTreeConverter};
//!
//! let scheme = ColourScheme::new("text-white", "bg-blue-700")
//!     .heading(PlainColours::new("text-blue-200"))
//!     .links(LinkColours::new("#f0d4af", "#f2c68d", "#f0b365"));
//!
//! let tree = vec![
//!     VirtualNode::new("h2").with_class("spacing-1"),
//!     VirtualNode::new("div").with_child(VirtualNode::new("a")),
//! ];
//!
//! let converted = VirtualTreeConverter::new(&scheme).convert(&tree).unwrap();
//! assert!(converted[0].classes().contains(&"text-blue-200".to_string()));
//! assert_eq!(converted[1].children()[0].style("color"), Some("#f0d4af"));
//! ```
//!
//! Live trees convert through the same engine and report what they touched:
//!
//! ```rust
//! use recolour::{ColourScheme, LiveNode, LiveTreeConverter, PlainColours, Surface};
//!
//! let scheme = ColourScheme::new("#f5e942", "#d6180b")
//!     .heading(PlainColours::new("#bf30b1"));
//!
//! let surface = Surface::new(LiveNode::new("div").with_child(LiveNode::new("h2")));
//! let summary = LiveTreeConverter::new(&scheme).convert(&surface).unwrap();
//! assert_eq!(summary, "1 x HEADING converted");
//! ```

pub mod convert;
pub mod detect;
pub mod node;
pub mod scheme;
pub mod style;
pub mod walk;

pub use convert::{
    ConversionPlan, ConvertError, DisabledBinding, ElementConverter, PhaseColours,
    PointerBindings,
};
pub use detect::Channel;
pub use node::{LiveNode, NodeBindings, NodeKind, NodeView, PointerEvent, Surface, VirtualNode};
pub use scheme::{
    ButtonColours, ColourPair, ColourProperty, ColourScheme, ColourSet, ColourValue, LinkColours,
    Phase, PlainColours,
};
pub use style::StyleMap;
pub use walk::{LiveTreeConverter, VirtualTreeConverter, NOTHING_CONVERTED};
