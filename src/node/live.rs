//! The mutable, surface-attached node representation.
//!
//! Live nodes are identity-bearing handles owned by a [`Surface`]. Converting
//! one mutates its style and class state in place and attaches pointer
//! listeners plus, for button shapes, a disabled-attribute observer. Attached
//! listeners and observers outlive the conversion call and persist for the
//! node's lifetime; the surface serializes their delivery, so a handler never
//! runs before the call that triggered it has committed its mutation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::convert::{ConversionPlan, PhaseColours};
use crate::node::{NodeKind, NodeView, PointerEvent};
use crate::style::{format_style_attr, parse_style_attr, StyleMap};

type Listener = Rc<dyn Fn(&LiveNode)>;
type AttributeObserver = Rc<dyn Fn(&LiveNode, &str)>;

struct LiveElement {
    tag: String,
    role: Option<String>,
    classes: Vec<String>,
    styles: StyleMap,
    disabled: bool,
    children: Vec<LiveNode>,
    listeners: Vec<(PointerEvent, Listener)>,
    observers: Vec<AttributeObserver>,
}

/// A shared handle to a mutable UI node attached to a rendering surface.
///
/// Cloning the handle clones the identity, not the node: all clones observe
/// the same element.
///
/// # Example
///
/// ```rust
/// use recolour::LiveNode;
///
/// let button = LiveNode::new("button").with_style_attr("color:#existing;");
/// assert_eq!(button.style("color").as_deref(), Some("#existing"));
/// ```
#[derive(Clone)]
pub struct LiveNode {
    inner: Rc<RefCell<LiveElement>>,
}

impl LiveNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LiveElement {
                tag: tag.into(),
                role: None,
                classes: Vec::new(),
                styles: StyleMap::new(),
                disabled: false,
                children: Vec::new(),
                listeners: Vec::new(),
                observers: Vec::new(),
            })),
        }
    }

    /// Sets the role attribute (the `type` of an input-like node).
    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.inner.borrow_mut().role = Some(role.into());
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.inner.borrow_mut().classes.push(class.into());
        self
    }

    /// Seeds inline styles from style attribute text.
    pub fn with_style_attr(self, text: &str) -> Self {
        self.inner.borrow_mut().styles = parse_style_attr(text);
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.inner.borrow_mut().disabled = disabled;
        self
    }

    pub fn with_child(self, child: LiveNode) -> Self {
        self.inner.borrow_mut().children.push(child);
        self
    }

    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    pub fn role(&self) -> Option<String> {
        self.inner.borrow().role.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    pub fn styles(&self) -> StyleMap {
        self.inner.borrow().styles.clone()
    }

    /// A single style declaration, when present.
    pub fn style(&self, property: &str) -> Option<String> {
        self.inner.borrow().styles.get(property).cloned()
    }

    /// The node's styles as style attribute text.
    pub fn style_attr(&self) -> String {
        format_style_attr(&self.inner.borrow().styles)
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    pub fn children(&self) -> Vec<LiveNode> {
        self.inner.borrow().children.clone()
    }

    /// Whether two handles refer to the same element.
    pub fn same_node(&self, other: &LiveNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Flips the disabled attribute, then notifies attribute observers. The
    /// mutation is committed before any observer runs.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
        self.notify_attribute("disabled");
    }

    /// Registers a pointer listener. Listeners persist for the node's
    /// lifetime.
    pub fn add_listener(&self, event: PointerEvent, listener: impl Fn(&LiveNode) + 'static) {
        self.inner
            .borrow_mut()
            .listeners
            .push((event, Rc::new(listener)));
    }

    /// Registers an attribute-change observer. Observers persist for the
    /// node's lifetime; there is no unsubscribe.
    pub fn observe_attributes(&self, observer: impl Fn(&LiveNode, &str) + 'static) {
        self.inner.borrow_mut().observers.push(Rc::new(observer));
    }

    /// Delivers a pointer signal to every listener registered for it, in
    /// registration order.
    pub fn dispatch(&self, event: PointerEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(registered, _)| *registered == event)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(self);
        }
    }

    fn notify_attribute(&self, name: &str) {
        let observers: Vec<AttributeObserver> = self.inner.borrow().observers.clone();
        for observer in observers {
            observer(self, name);
        }
    }

    fn write_phase(&self, colours: &PhaseColours) {
        let mut element = self.inner.borrow_mut();
        colours.write_into(&mut element.styles);
    }

    /// Applies a conversion plan in place: merges classes and styles, attaches
    /// pointer listeners for the plan's bindings, and (when the plan carries a
    /// disabled swap) an attribute observer that switches between the
    /// precomputed default and disabled values.
    pub fn apply(&self, plan: &ConversionPlan) {
        {
            let mut element = self.inner.borrow_mut();
            element.classes.extend(plan.classes.iter().cloned());
            for (property, value) in &plan.styles {
                element.styles.insert(property.clone(), value.clone());
            }
        }
        for event in PointerEvent::ALL {
            if let Some(colours) = plan.pointer.get(event) {
                let colours = colours.clone();
                self.add_listener(event, move |node| {
                    // Pointer phases never fire on a disabled node.
                    if node.is_disabled() {
                        return;
                    }
                    node.write_phase(&colours);
                });
            }
        }
        if let Some(swap) = &plan.disabled_swap {
            let swap = swap.clone();
            self.observe_attributes(move |node, attribute| {
                if attribute == "disabled" {
                    node.write_phase(swap.select(node.is_disabled()));
                }
            });
        }
    }
}

impl fmt::Debug for LiveNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = self.inner.borrow();
        f.debug_struct("LiveNode")
            .field("tag", &element.tag)
            .field("role", &element.role)
            .field("classes", &element.classes)
            .field("styles", &element.styles)
            .field("disabled", &element.disabled)
            .field("children", &element.children.len())
            .finish()
    }
}

impl NodeView for LiveNode {
    fn tag(&self) -> String {
        self.tag()
    }

    fn role(&self) -> Option<String> {
        self.role()
    }

    fn existing_styles(&self) -> StyleMap {
        self.styles()
    }

    fn existing_classes(&self) -> Vec<String> {
        self.classes()
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled()
    }
}

/// The rendering surface owning a live tree.
///
/// Stands in for the host environment: it owns the root container, provides
/// per-kind node lookup for the live walker, and is the party that delivers
/// pointer and attribute signals (serialized, single-threaded).
pub struct Surface {
    root: LiveNode,
}

impl Surface {
    pub fn new(root: LiveNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LiveNode {
        &self.root
    }

    /// Every descendant of the root matching `kind`, in document order. The
    /// root container itself is not included.
    pub fn query_kind(&self, kind: NodeKind) -> Vec<LiveNode> {
        let mut matches = Vec::new();
        collect_kind(&self.root, kind, &mut matches);
        matches
    }
}

fn collect_kind(node: &LiveNode, kind: NodeKind, matches: &mut Vec<LiveNode>) {
    for child in node.children() {
        if child.kind() == Some(kind) {
            matches.push(child.clone());
        }
        collect_kind(&child, kind, matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{DisabledBinding, PhaseColours};
    use crate::style::COLOR;
    use std::cell::Cell;

    fn phase(colour: &str) -> PhaseColours {
        PhaseColours {
            colour: Some(colour.to_string()),
            background: None,
        }
    }

    #[test]
    fn test_handles_share_identity() {
        let node = LiveNode::new("button");
        let alias = node.clone();
        alias.set_disabled(true);
        assert!(node.is_disabled());
        assert!(node.same_node(&alias));
    }

    #[test]
    fn test_style_attr_round_trip() {
        let node = LiveNode::new("h2").with_style_attr("color:#aaa;margin:4px");
        assert_eq!(node.style(COLOR).as_deref(), Some("#aaa"));
        assert_eq!(node.style_attr(), "color:#aaa;margin:4px;");
    }

    #[test]
    fn test_dispatch_runs_matching_listeners() {
        let node = LiveNode::new("a");
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        node.add_listener(PointerEvent::Enter, move |_| {
            count.set(count.get() + 1);
        });
        node.dispatch(PointerEvent::Enter);
        node.dispatch(PointerEvent::Leave);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_apply_merges_and_attaches() {
        let node = LiveNode::new("a").with_class("nav");
        let mut plan = ConversionPlan::default();
        plan.styles.insert(COLOR.to_string(), "#aaa".to_string());
        plan.pointer.enter = Some(phase("#bbb"));
        node.apply(&plan);

        assert_eq!(node.style(COLOR).as_deref(), Some("#aaa"));
        assert_eq!(node.classes(), vec!["nav".to_string()]);

        node.dispatch(PointerEvent::Enter);
        assert_eq!(node.style(COLOR).as_deref(), Some("#bbb"));
    }

    #[test]
    fn test_pointer_listener_skipped_while_disabled() {
        let node = LiveNode::new("button");
        let mut plan = ConversionPlan::default();
        plan.styles.insert(COLOR.to_string(), "#444".to_string());
        plan.pointer.enter = Some(phase("#555"));
        node.apply(&plan);

        node.set_disabled(true);
        node.dispatch(PointerEvent::Enter);
        assert_eq!(node.style(COLOR).as_deref(), Some("#444"));
    }

    #[test]
    fn test_disabled_observer_swaps_values() {
        let node = LiveNode::new("button");
        let mut plan = ConversionPlan::default();
        plan.styles.insert(COLOR.to_string(), "#444".to_string());
        plan.disabled_swap = Some(DisabledBinding {
            default: phase("#444"),
            disabled: phase("#333"),
        });
        node.apply(&plan);

        node.set_disabled(true);
        assert_eq!(node.style(COLOR).as_deref(), Some("#333"));
        node.set_disabled(false);
        assert_eq!(node.style(COLOR).as_deref(), Some("#444"));
    }

    #[test]
    fn test_observer_only_reacts_to_disabled_attribute() {
        let node = LiveNode::new("button");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        node.observe_attributes(move |_, attribute| {
            log.borrow_mut().push(attribute.to_string());
        });
        node.set_disabled(true);
        assert_eq!(*seen.borrow(), vec!["disabled".to_string()]);
    }

    #[test]
    fn test_query_kind_excludes_root_and_recurses() {
        let tree = LiveNode::new("div")
            .with_child(LiveNode::new("h2"))
            .with_child(
                LiveNode::new("div")
                    .with_child(LiveNode::new("h2"))
                    .with_child(LiveNode::new("a")),
            );
        let surface = Surface::new(tree);

        assert_eq!(surface.query_kind(NodeKind::Heading).len(), 2);
        assert_eq!(surface.query_kind(NodeKind::Link).len(), 1);
        assert!(surface.query_kind(NodeKind::Button).is_empty());
    }

    #[test]
    fn test_query_kind_filters_input_roles() {
        let tree = LiveNode::new("div")
            .with_child(LiveNode::new("input").with_role("submit"))
            .with_child(LiveNode::new("input").with_role("text"))
            .with_child(LiveNode::new("input"));
        let surface = Surface::new(tree);

        assert_eq!(surface.query_kind(NodeKind::ButtonInput).len(), 1);
    }
}
