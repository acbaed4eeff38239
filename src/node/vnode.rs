//! The immutable, value-semantics node representation.
//!
//! Virtual nodes are plain descriptions: converting one produces a new node
//! with the plan's classes and styles merged in, leaving the original
//! untouched. There is no ambient lifecycle; interaction bindings are carried
//! as data, and callers re-convert after structural or state changes.

use crate::convert::{ConversionPlan, DisabledBinding, PointerBindings};
use crate::node::{NodeView, PointerEvent};
use crate::style::StyleMap;

/// Interaction bindings carried by a converted virtual node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBindings {
    pub pointer: PointerBindings,
    pub disabled_swap: Option<DisabledBinding>,
}

/// An immutable UI node description.
///
/// # Example
///
/// ```rust
/// use recolour::VirtualNode;
///
/// let node = VirtualNode::new("a")
///     .with_class("nav-link")
///     .with_child(VirtualNode::new("h3"));
///
/// assert_eq!(node.tag(), "a");
/// assert_eq!(node.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualNode {
    tag: String,
    role: Option<String>,
    classes: Vec<String>,
    styles: StyleMap,
    disabled: bool,
    children: Vec<VirtualNode>,
    bindings: Option<NodeBindings>,
}

impl VirtualNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            role: None,
            classes: Vec::new(),
            styles: StyleMap::new(),
            disabled: false,
            children: Vec::new(),
            bindings: None,
        }
    }

    /// Sets the role attribute (the `type` of an input-like node).
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_child(mut self, child: VirtualNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the child list, keeping everything else.
    pub fn with_children(mut self, children: Vec<VirtualNode>) -> Self {
        self.children = children;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The role attribute, when set.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// A single style declaration, when present.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn children(&self) -> &[VirtualNode] {
        &self.children
    }

    /// Bindings attached by a conversion, when any.
    pub fn bindings(&self) -> Option<&NodeBindings> {
        self.bindings.as_ref()
    }

    /// Produces a new node with the plan merged in.
    ///
    /// Existing attributes are preserved: plan classes append after the
    /// existing list, plan styles merge declaration-by-declaration.
    pub fn apply(&self, plan: &ConversionPlan) -> VirtualNode {
        let mut node = self.clone();
        node.classes.extend(plan.classes.iter().cloned());
        for (property, value) in &plan.styles {
            node.styles.insert(property.clone(), value.clone());
        }
        if !plan.pointer.is_empty() || plan.disabled_swap.is_some() {
            node.bindings = Some(NodeBindings {
                pointer: plan.pointer.clone(),
                disabled_swap: plan.disabled_swap.clone(),
            });
        }
        node
    }

    /// Simulates a pointer signal against the node's bindings, returning the
    /// node as it would look afterwards. Signals never fire on a disabled
    /// node.
    pub fn apply_pointer(&self, event: PointerEvent) -> VirtualNode {
        if self.disabled {
            return self.clone();
        }
        let Some(bindings) = &self.bindings else {
            return self.clone();
        };
        let Some(colours) = bindings.pointer.get(event) else {
            return self.clone();
        };
        let mut node = self.clone();
        colours.write_into(&mut node.styles);
        node
    }
}

impl NodeView for VirtualNode {
    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn role(&self) -> Option<String> {
        self.role.clone()
    }

    fn existing_styles(&self) -> StyleMap {
        self.styles.clone()
    }

    fn existing_classes(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::PhaseColours;
    use crate::node::NodeKind;
    use crate::style::COLOR;

    fn phase(colour: &str) -> PhaseColours {
        PhaseColours {
            colour: Some(colour.to_string()),
            background: None,
        }
    }

    #[test]
    fn test_builder_and_accessors() {
        let node = VirtualNode::new("input")
            .with_role("submit")
            .with_class("cta")
            .with_style(COLOR, "#fff")
            .with_disabled(true);

        assert_eq!(NodeView::tag(&node), "input");
        assert_eq!(node.kind(), Some(NodeKind::ButtonInput));
        assert_eq!(node.classes(), ["cta".to_string()]);
        assert_eq!(node.style(COLOR), Some("#fff"));
        assert!(node.is_disabled());
    }

    #[test]
    fn test_apply_preserves_existing_attributes() {
        let node = VirtualNode::new("h2")
            .with_class("spacing-1")
            .with_style("margin", "4px");

        let mut plan = ConversionPlan::default();
        plan.classes.push("token-A".to_string());
        plan.styles.insert(COLOR.to_string(), "#abc".to_string());

        let converted = node.apply(&plan);
        assert_eq!(
            converted.classes(),
            ["spacing-1".to_string(), "token-A".to_string()]
        );
        assert_eq!(converted.style("margin"), Some("4px"));
        assert_eq!(converted.style(COLOR), Some("#abc"));

        // The original is untouched.
        assert_eq!(node.classes(), ["spacing-1".to_string()]);
        assert!(node.style(COLOR).is_none());
    }

    #[test]
    fn test_apply_without_bindings_leaves_none() {
        let node = VirtualNode::new("h2");
        let converted = node.apply(&ConversionPlan::default());
        assert!(converted.bindings().is_none());
        assert_eq!(converted, node);
    }

    #[test]
    fn test_apply_pointer_uses_bindings() {
        let mut plan = ConversionPlan::default();
        plan.styles.insert(COLOR.to_string(), "#aaa".to_string());
        plan.pointer.enter = Some(phase("#bbb"));
        plan.pointer.leave = Some(phase("#aaa"));

        let node = VirtualNode::new("a").apply(&plan);
        let hovered = node.apply_pointer(PointerEvent::Enter);
        assert_eq!(hovered.style(COLOR), Some("#bbb"));

        let rested = hovered.apply_pointer(PointerEvent::Leave);
        assert_eq!(rested.style(COLOR), Some("#aaa"));
    }

    #[test]
    fn test_apply_pointer_ignored_while_disabled() {
        let mut plan = ConversionPlan::default();
        plan.pointer.enter = Some(phase("#bbb"));

        let node = VirtualNode::new("button").with_disabled(true).apply(&plan);
        let after = node.apply_pointer(PointerEvent::Enter);
        assert!(after.style(COLOR).is_none());
    }

    #[test]
    fn test_apply_pointer_without_binding_is_identity() {
        let node = VirtualNode::new("a");
        assert_eq!(node.apply_pointer(PointerEvent::Down), node);
    }
}
