//! The per-node converter: validate, resolve, bind.
//!
//! Construction is atomic with respect to validation: the colour set's shape
//! and the homogeneity of every pair in it are checked before anything else,
//! so planning never fails and a node is never left partially coloured.

use crate::detect::{self, Channel};
use crate::node::{NodeKind, NodeView, PointerEvent};
use crate::scheme::{ColourProperty, ColourSet, ColourValue, Phase};
use crate::style::StyleMap;

use super::error::ConvertError;
use super::plan::{ConversionPlan, DisabledBinding, PhaseColours};

/// Validates that a colour set's shape matches what a node kind structurally
/// supports, and that every pair in it is homogeneous.
///
/// Heading and subheading kinds accept only the plain shape; links require the
/// link shape (hover/active, no disabled); button-like kinds require the
/// button shape (disabled present).
pub fn validate_set(kind: NodeKind, set: &ColourSet) -> Result<(), ConvertError> {
    let shape_matches = match kind {
        NodeKind::Heading | NodeKind::Subheading => matches!(set, ColourSet::Plain(_)),
        NodeKind::Link => matches!(set, ColourSet::Link(_)),
        NodeKind::Button | NodeKind::ButtonInput => matches!(set, ColourSet::Button(_)),
    };
    if !shape_matches {
        return Err(ConvertError::ShapeMismatch { kind });
    }
    for (phase, property) in set.phases() {
        if !property.is_homogeneous() {
            return Err(ConvertError::MixedColourForms { phase });
        }
    }
    Ok(())
}

/// Converts one node against one colour set.
///
/// The converter snapshots the node's existing styling at construction and
/// produces a [`ConversionPlan`]; applying the plan is representation-specific
/// (see [`VirtualNode::apply`](crate::node::VirtualNode::apply) and
/// [`LiveNode::apply`](crate::node::LiveNode::apply)).
///
/// # Example
///
/// ```rust
/// use recolour::{ColourSet, ElementConverter, PlainColours, VirtualNode};
///
/// let node = VirtualNode::new("h2").with_class("spacing-1");
/// let set = ColourSet::from(PlainColours::new("token-A"));
///
/// let converter = ElementConverter::new(&node, &set).unwrap();
/// let converted = node.apply(&converter.plan());
/// assert!(converted.classes().contains(&"token-A".to_string()));
/// ```
#[derive(Debug)]
pub struct ElementConverter<'a> {
    kind: NodeKind,
    set: &'a ColourSet,
    styles: StyleMap,
    classes: Vec<String>,
    disabled: bool,
}

impl<'a> ElementConverter<'a> {
    /// Runs the validator and snapshots the node's existing styling.
    ///
    /// # Errors
    ///
    /// `InvalidNodeKind` when the node does not classify as convertible,
    /// `ShapeMismatch` when the set's shape is wrong for the kind, and
    /// `MixedColourForms` when a pair mixes raw and token members. No
    /// mutation has occurred when any of these is returned.
    pub fn new(view: &impl NodeView, set: &'a ColourSet) -> Result<Self, ConvertError> {
        let kind = view.kind().ok_or_else(|| ConvertError::InvalidNodeKind {
            tag: view.tag(),
            role: view.role(),
        })?;
        validate_set(kind, set)?;
        Ok(Self {
            kind,
            set,
            styles: view.existing_styles(),
            classes: view.existing_classes(),
            disabled: view.is_disabled(),
        })
    }

    /// The kind the node classified as.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Resolves every phase the set defines and binds interaction handling,
    /// yielding the plan to apply. Pure; all side effects happen at apply
    /// time.
    pub fn plan(&self) -> ConversionPlan {
        let mut plan = ConversionPlan::default();
        for (phase, property) in self.set.phases() {
            self.resolve(phase, &property, &mut plan);
        }
        if let ColourSet::Button(set) = self.set {
            plan.disabled_swap = Some(DisabledBinding {
                default: self.phase_colours(&set.default),
                disabled: self.phase_colours(&set.disabled),
            });
        }
        plan
    }

    fn suppressed(&self, channel: Channel) -> bool {
        detect::is_coloured(channel, &self.styles, &self.classes)
    }

    /// Builds the raw writes for one phase, dropping suppressed channels.
    /// Token-valued properties yield nothing here.
    fn phase_colours(&self, property: &ColourProperty) -> PhaseColours {
        let mut out = PhaseColours::default();
        match property {
            ColourProperty::Single(ColourValue::Raw(value)) => {
                if !self.suppressed(Channel::Foreground) {
                    out.colour = Some(value.clone());
                }
            }
            ColourProperty::Pair(pair) => {
                if let (ColourValue::Raw(text), ColourValue::Raw(background)) =
                    (&pair.text, &pair.background)
                {
                    if !self.suppressed(Channel::Foreground) {
                        out.colour = Some(text.clone());
                    }
                    if !self.suppressed(Channel::Background) {
                        out.background = Some(background.clone());
                    }
                }
            }
            ColourProperty::Single(ColourValue::Token(_)) => {}
        }
        out
    }

    /// Appends a token-valued property to the plan's class list, dropping
    /// suppressed channels. Single tokens target the foreground channel;
    /// pair tokens append background first, then text.
    fn append_tokens(&self, property: &ColourProperty, plan: &mut ConversionPlan) {
        match property {
            ColourProperty::Single(ColourValue::Token(token)) => {
                if !self.suppressed(Channel::Foreground) {
                    plan.classes.push(token.clone());
                }
            }
            ColourProperty::Pair(pair) => {
                if let (ColourValue::Token(text), ColourValue::Token(background)) =
                    (&pair.text, &pair.background)
                {
                    if !self.suppressed(Channel::Background) {
                        plan.classes.push(background.clone());
                    }
                    if !self.suppressed(Channel::Foreground) {
                        plan.classes.push(text.clone());
                    }
                }
            }
            ColourProperty::Single(ColourValue::Raw(_)) => {}
        }
    }

    fn resolve(&self, phase: Phase, property: &ColourProperty, plan: &mut ConversionPlan) {
        if !property.is_raw() {
            // Semantic tokens join the class list for every phase; the
            // pre-defined rule carries the interaction behaviour.
            self.append_tokens(property, plan);
            return;
        }
        match phase {
            Phase::Default => {
                let colours = self.phase_colours(property);
                colours.write_into(&mut plan.styles);
                // Restore the default once a hover or press ends.
                plan.pointer.set(PointerEvent::Leave, colours.clone());
                plan.pointer.set(PointerEvent::Up, colours);
            }
            Phase::Hover => {
                let colours = self.phase_colours(property);
                plan.pointer.set(PointerEvent::Enter, colours.clone());
                // Releasing a press while hovering lands back on hover.
                plan.pointer.set(PointerEvent::Up, colours);
            }
            Phase::Active => {
                plan.pointer.set(PointerEvent::Down, self.phase_colours(property));
            }
            Phase::Visited => {
                // Visited styling is only expressible as a pre-defined rule;
                // a raw visited value has no channel to land on.
            }
            Phase::Disabled => {
                if self.disabled {
                    self.phase_colours(property).write_into(&mut plan.styles);
                }
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::scheme::{ButtonColours, LinkColours, PlainColours};
    use crate::VirtualNode;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = NodeKind> {
        prop::sample::select(NodeKind::ALL.to_vec())
    }

    fn arb_set() -> impl Strategy<Value = ColourSet> {
        prop_oneof![
            Just(ColourSet::from(PlainColours::new("#101010"))),
            Just(ColourSet::from(LinkColours::new("#aaa", "#bbb", "#ccc"))),
            Just(ColourSet::from(ButtonColours::new("#1", "#2", "#3", "#4"))),
        ]
    }

    proptest! {
        #[test]
        fn validation_matches_shape_table(kind in arb_kind(), set in arb_set()) {
            let expected = match (&kind, &set) {
                (NodeKind::Heading | NodeKind::Subheading, ColourSet::Plain(_)) => true,
                (NodeKind::Link, ColourSet::Link(_)) => true,
                (NodeKind::Button | NodeKind::ButtonInput, ColourSet::Button(_)) => true,
                _ => false,
            };
            prop_assert_eq!(validate_set(kind, &set).is_ok(), expected);
        }

        #[test]
        fn existing_foreground_style_is_never_overwritten(existing in "#[0-9a-f]{6}") {
            let node = VirtualNode::new("h2").with_style(crate::style::COLOR, existing.as_str());
            let set = ColourSet::from(PlainColours::new("#bf30b1"));
            let plan = ElementConverter::new(&node, &set).unwrap().plan();
            let converted = node.apply(&plan);
            prop_assert_eq!(converted.style(crate::style::COLOR), Some(existing.as_str()));
        }
    }
}
