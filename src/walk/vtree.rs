//! The walker for immutable virtual trees.

use crate::convert::{ConvertError, ElementConverter};
use crate::node::{NodeView, VirtualNode};
use crate::scheme::ColourScheme;

use super::DispatchTable;

/// Walks a virtual tree and rebuilds it with the scheme's colours applied.
///
/// Traversal is post-order: a node's children are converted before the node
/// itself is inspected for a kind match, so a parent's output reflects
/// already-converted descendants. The input tree is never mutated.
///
/// # Example
///
/// ```rust
/// use recolour::{ColourScheme, PlainColours, VirtualNode, VirtualTreeConverter};
///
/// let scheme = ColourScheme::new("text-white", "bg-blue-700")
///     .heading(PlainColours::new("token-A"));
///
/// let tree = vec![VirtualNode::new("h2").with_class("spacing-1")];
/// let converted = VirtualTreeConverter::new(&scheme).convert(&tree).unwrap();
///
/// assert_eq!(
///     converted[0].classes(),
///     ["spacing-1".to_string(), "token-A".to_string()]
/// );
/// ```
pub struct VirtualTreeConverter {
    table: DispatchTable,
}

impl VirtualTreeConverter {
    pub fn new(scheme: &ColourScheme) -> Self {
        Self {
            table: DispatchTable::new(scheme),
        }
    }

    /// Converts a forest of root nodes, returning the rebuilt forest.
    ///
    /// # Errors
    ///
    /// Aborts on the first validation failure. Since validation precedes any
    /// write, the input is untouched and no partially-converted output
    /// escapes.
    pub fn convert(&self, nodes: &[VirtualNode]) -> Result<Vec<VirtualNode>, ConvertError> {
        nodes.iter().map(|node| self.convert_node(node)).collect()
    }

    fn convert_node(&self, node: &VirtualNode) -> Result<VirtualNode, ConvertError> {
        let children = self.convert(node.children())?;
        let node = node.clone().with_children(children);
        let Some(kind) = node.kind() else {
            return Ok(node);
        };
        let Some(set) = self.table.get(kind) else {
            return Ok(node);
        };
        let converter = ElementConverter::new(&node, set)?;
        Ok(node.apply(&converter.plan()))
    }
}
