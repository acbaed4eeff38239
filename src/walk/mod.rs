//! Tree walkers that drive per-node conversion over each representation.
//!
//! Both walkers share one contract: feed every matching node, children before
//! parents, through the [`ElementConverter`](crate::convert::ElementConverter)
//! with the colour set its kind dispatches to. Kinds the scheme configures no
//! set for are skipped (a no-op, not an error); unrecognized kinds are
//! recursed through but never converted. A validation failure aborts the
//! walk; validation precedes any write, so an aborted walk leaves no node
//! partially converted.

mod live;
mod vtree;

pub use live::{LiveTreeConverter, NOTHING_CONVERTED};
pub use vtree::VirtualTreeConverter;

use crate::node::NodeKind;
use crate::scheme::{ColourScheme, ColourSet};

/// The fixed kind → colour-set dispatch table, materialized once per walk.
///
/// Headings and subheadings draw from their respective plain sets, links from
/// the link set, and both true buttons and button-role inputs from the button
/// set.
pub(crate) struct DispatchTable {
    slots: Vec<(NodeKind, ColourSet)>,
}

impl DispatchTable {
    pub(crate) fn new(scheme: &ColourScheme) -> Self {
        let mut slots = Vec::new();
        for kind in NodeKind::ALL {
            let set = match kind {
                NodeKind::Heading => scheme.heading_colour.clone().map(ColourSet::Plain),
                NodeKind::Subheading => scheme.subheading_colour.clone().map(ColourSet::Plain),
                NodeKind::Link => scheme.link_colours.clone().map(ColourSet::Link),
                NodeKind::Button | NodeKind::ButtonInput => {
                    scheme.button_colours.clone().map(ColourSet::Button)
                }
            };
            if let Some(set) = set {
                slots.push((kind, set));
            }
        }
        Self { slots }
    }

    pub(crate) fn get(&self, kind: NodeKind) -> Option<&ColourSet> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == kind)
            .map(|(_, set)| set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{ButtonColours, PlainColours};

    #[test]
    fn test_empty_scheme_dispatches_nothing() {
        let table = DispatchTable::new(&ColourScheme::new("#fff", "#000"));
        for kind in NodeKind::ALL {
            assert!(table.get(kind).is_none());
        }
    }

    #[test]
    fn test_buttons_and_button_inputs_share_a_slot() {
        let scheme = ColourScheme::new("#fff", "#000")
            .buttons(ButtonColours::new("#1", "#2", "#3", "#4"));
        let table = DispatchTable::new(&scheme);
        assert_eq!(table.get(NodeKind::Button), table.get(NodeKind::ButtonInput));
        assert!(table.get(NodeKind::Heading).is_none());
    }

    #[test]
    fn test_heading_and_subheading_slots_are_independent() {
        let scheme =
            ColourScheme::new("#fff", "#000").heading(PlainColours::new("#bf30b1"));
        let table = DispatchTable::new(&scheme);
        assert!(table.get(NodeKind::Heading).is_some());
        assert!(table.get(NodeKind::Subheading).is_none());
    }
}
