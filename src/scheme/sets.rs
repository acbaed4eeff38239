//! Role-specific colour sets and their structural shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::{ColourProperty, ColourValue};

/// The interaction phase a colour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Default,
    Hover,
    Active,
    Visited,
    Disabled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Default => "default",
            Phase::Hover => "hover",
            Phase::Active => "active",
            Phase::Visited => "visited",
            Phase::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Colours for non-interactive roles (headings, subheadings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainColours {
    pub default: ColourProperty,
}

impl PlainColours {
    pub fn new(default: impl Into<ColourProperty>) -> Self {
        Self {
            default: default.into(),
        }
    }
}

/// Colours for links: default plus hover/active, with an optional visited
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColours {
    pub default: ColourProperty,
    pub hover: ColourProperty,
    pub active: ColourProperty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<ColourValue>,
}

impl LinkColours {
    pub fn new(
        default: impl Into<ColourProperty>,
        hover: impl Into<ColourProperty>,
        active: impl Into<ColourProperty>,
    ) -> Self {
        Self {
            default: default.into(),
            hover: hover.into(),
            active: active.into(),
            visited: None,
        }
    }

    /// Adds a visited colour, returning the updated set for chaining.
    pub fn visited(mut self, visited: impl Into<ColourValue>) -> Self {
        self.visited = Some(visited.into());
        self
    }
}

/// Colours for button-like roles: default plus hover/active and a required
/// disabled colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonColours {
    pub default: ColourProperty,
    pub hover: ColourProperty,
    pub active: ColourProperty,
    pub disabled: ColourProperty,
}

impl ButtonColours {
    pub fn new(
        default: impl Into<ColourProperty>,
        hover: impl Into<ColourProperty>,
        active: impl Into<ColourProperty>,
        disabled: impl Into<ColourProperty>,
    ) -> Self {
        Self {
            default: default.into(),
            hover: hover.into(),
            active: active.into(),
            disabled: disabled.into(),
        }
    }
}

/// A per-role colour bundle.
///
/// The shape a node kind structurally supports is encoded in the variant:
/// plain sets carry only a default colour, link sets add hover/active and an
/// optional visited token, button sets add a required disabled colour.
/// Pairing a node kind with the wrong variant fails validation.
///
/// Untagged deserialization relies on variant order: button sets are the only
/// shape with `disabled`, link sets the only remaining shape with `hover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourSet {
    Button(ButtonColours),
    Link(LinkColours),
    Plain(PlainColours),
}

impl ColourSet {
    /// The set's phases and their colours, in resolution order.
    pub fn phases(&self) -> Vec<(Phase, ColourProperty)> {
        match self {
            ColourSet::Plain(set) => vec![(Phase::Default, set.default.clone())],
            ColourSet::Link(set) => {
                let mut phases = vec![
                    (Phase::Default, set.default.clone()),
                    (Phase::Hover, set.hover.clone()),
                    (Phase::Active, set.active.clone()),
                ];
                if let Some(visited) = &set.visited {
                    phases.push((Phase::Visited, ColourProperty::Single(visited.clone())));
                }
                phases
            }
            ColourSet::Button(set) => vec![
                (Phase::Default, set.default.clone()),
                (Phase::Hover, set.hover.clone()),
                (Phase::Active, set.active.clone()),
                (Phase::Disabled, set.disabled.clone()),
            ],
        }
    }
}

impl From<PlainColours> for ColourSet {
    fn from(set: PlainColours) -> Self {
        ColourSet::Plain(set)
    }
}

impl From<LinkColours> for ColourSet {
    fn from(set: LinkColours) -> Self {
        ColourSet::Link(set)
    }
}

impl From<ButtonColours> for ColourSet {
    fn from(set: ButtonColours) -> Self {
        ColourSet::Button(set)
    }
}
