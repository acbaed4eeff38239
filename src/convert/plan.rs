//! The accumulated output of a per-node conversion.
//!
//! A [`ConversionPlan`] is pure data: the classes and styles to merge into
//! the node, the pointer bindings to attach, and (for button shapes) the
//! precomputed default/disabled value sets the disabled observer switches
//! between. How a plan materializes is representation-specific: virtual nodes
//! clone-and-merge, live nodes mutate in place and attach listeners.

use crate::node::PointerEvent;
use crate::style::{StyleMap, BACKGROUND_COLOR, COLOR};

/// Raw colour writes for one interaction phase, already filtered per channel
/// by the suppression rules. Token-valued phases never appear here; they
/// contribute class tokens instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseColours {
    pub colour: Option<String>,
    pub background: Option<String>,
}

impl PhaseColours {
    pub fn is_empty(&self) -> bool {
        self.colour.is_none() && self.background.is_none()
    }

    /// Writes the phase's values into a style map.
    pub fn write_into(&self, styles: &mut StyleMap) {
        if let Some(colour) = &self.colour {
            styles.insert(COLOR.to_string(), colour.clone());
        }
        if let Some(background) = &self.background {
            styles.insert(BACKGROUND_COLOR.to_string(), background.clone());
        }
    }
}

/// The colours to apply on each pointer signal.
///
/// Leave/up carry the default restore values; registering a hover phase
/// overrides up so that releasing a press while still hovering restores the
/// hover colour rather than the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerBindings {
    pub enter: Option<PhaseColours>,
    pub leave: Option<PhaseColours>,
    pub down: Option<PhaseColours>,
    pub up: Option<PhaseColours>,
}

impl PointerBindings {
    pub fn get(&self, event: PointerEvent) -> Option<&PhaseColours> {
        match event {
            PointerEvent::Enter => self.enter.as_ref(),
            PointerEvent::Leave => self.leave.as_ref(),
            PointerEvent::Down => self.down.as_ref(),
            PointerEvent::Up => self.up.as_ref(),
        }
    }

    pub(crate) fn set(&mut self, event: PointerEvent, colours: PhaseColours) {
        let slot = match event {
            PointerEvent::Enter => &mut self.enter,
            PointerEvent::Leave => &mut self.leave,
            PointerEvent::Down => &mut self.down,
            PointerEvent::Up => &mut self.up,
        };
        *slot = Some(colours);
    }

    pub fn is_empty(&self) -> bool {
        self.enter.is_none() && self.leave.is_none() && self.down.is_none() && self.up.is_none()
    }
}

/// The two precomputed value sets a disabled transition switches between.
///
/// Transitions reapply these as direct style writes; they never re-run
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledBinding {
    pub default: PhaseColours,
    pub disabled: PhaseColours,
}

impl DisabledBinding {
    /// The value set current for the given disabled state.
    pub fn select(&self, disabled: bool) -> &PhaseColours {
        if disabled {
            &self.disabled
        } else {
            &self.default
        }
    }
}

/// Everything a single node conversion wants to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    /// Class tokens to append to the node's class list.
    pub classes: Vec<String>,
    /// Style declarations to merge into the node's inline styles.
    pub styles: StyleMap,
    /// Pointer interaction bindings.
    pub pointer: PointerBindings,
    /// Disabled-transition binding, present for button shapes.
    pub disabled_swap: Option<DisabledBinding>,
}
