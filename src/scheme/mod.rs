//! The declarative colour scheme and its building blocks.
//!
//! This module provides:
//!
//! - [`ColourValue`]: a raw colour encoding or a semantic class token
//! - [`ColourPair`]: a linked text/background colour for button-like roles
//! - [`ColourProperty`]: the colour carried by one phase of a set
//! - [`ColourSet`] and its role variants ([`PlainColours`], [`LinkColours`],
//!   [`ButtonColours`])
//! - [`ColourScheme`]: the root configuration handed to a tree walker
//!
//! Schemes serialize in the original configuration format (camelCase field
//! names, colour values as plain strings).

mod sets;
mod value;

pub use sets::{ButtonColours, ColourSet, LinkColours, Phase, PlainColours};
pub use value::{ColourPair, ColourProperty, ColourValue};

use serde::{Deserialize, Serialize};

/// Top-level colour configuration for a tree.
///
/// Base foreground/background colours are always present; the per-role sets
/// are all optional, and a scheme that defines none of them is a valid no-op.
///
/// # Example
///
/// ```rust
/// use recolour::{ColourScheme, LinkColours, PlainColours};
///
/// let scheme = ColourScheme::new("text-white", "bg-blue-700")
///     .heading(PlainColours::new("text-blue-200"))
///     .links(LinkColours::new("#f0d4af", "#f2c68d", "#f0b365").visited("#f29c2c"));
///
/// assert!(scheme.subheading_colour.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourScheme {
    pub foreground_colour: ColourValue,
    pub background_colour: ColourValue,
    /// Optional background image URL or fill description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_colour: Option<PlainColours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading_colour: Option<PlainColours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_colours: Option<LinkColours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_colours: Option<ButtonColours>,
}

impl ColourScheme {
    /// Creates a scheme with base colours and no per-role sets.
    pub fn new(foreground: impl Into<ColourValue>, background: impl Into<ColourValue>) -> Self {
        Self {
            foreground_colour: foreground.into(),
            background_colour: background.into(),
            background_image: None,
            heading_colour: None,
            subheading_colour: None,
            link_colours: None,
            button_colours: None,
        }
    }

    /// Sets the background image, returning the updated scheme for chaining.
    pub fn background_image(mut self, image: impl Into<String>) -> Self {
        self.background_image = Some(image.into());
        self
    }

    pub fn heading(mut self, colours: PlainColours) -> Self {
        self.heading_colour = Some(colours);
        self
    }

    pub fn subheading(mut self, colours: PlainColours) -> Self {
        self.subheading_colour = Some(colours);
        self
    }

    pub fn links(mut self, colours: LinkColours) -> Self {
        self.link_colours = Some(colours);
        self
    }

    pub fn buttons(mut self, colours: ButtonColours) -> Self {
        self.button_colours = Some(colours);
        self
    }

    /// Whether the scheme defines no per-role colour sets at all.
    pub fn is_noop(&self) -> bool {
        self.heading_colour.is_none()
            && self.subheading_colour.is_none()
            && self.link_colours.is_none()
            && self.button_colours.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scheme_is_noop() {
        let scheme = ColourScheme::new("#f5e942", "#d6180b");
        assert!(scheme.is_noop());
    }

    #[test]
    fn test_builder_fills_slots() {
        let scheme = ColourScheme::new("#f5e942", "#d6180b")
            .heading(PlainColours::new("#bf30b1"))
            .subheading(PlainColours::new("#f090e6"))
            .links(LinkColours::new("#f0d4af", "#f2c68d", "#f0b365"))
            .buttons(ButtonColours::new("#1", "#2", "#3", "#4"));

        assert!(!scheme.is_noop());
        assert!(scheme.heading_colour.is_some());
        assert!(scheme.button_colours.is_some());
    }

    #[test]
    fn test_deserializes_original_config_format() {
        let scheme: ColourScheme = serde_json::from_value(serde_json::json!({
            "foregroundColour": "text-white",
            "backgroundColour": "bg-blue-700",
            "headingColour": { "default": "text-blue-200" },
            "subheadingColour": { "default": "text-blue-400" },
            "linkColours": {
                "default": "text-teal-100",
                "hover": "hover:text-teal-300",
                "active": "active:text-teal-500",
                "visited": "visited:text-teal-700"
            },
            "buttonColours": {
                "default": "bg-orange-200 text-orange-800",
                "hover": "hover:bg-orange-300",
                "active": "active:bg-orange-500",
                "disabled": "disabled:bg-slate-500"
            }
        }))
        .unwrap();

        assert_eq!(scheme.foreground_colour, ColourValue::from("text-white"));
        let links = scheme.link_colours.unwrap();
        assert_eq!(links.visited, Some(ColourValue::from("visited:text-teal-700")));
        assert!(scheme.button_colours.is_some());
    }

    #[test]
    fn test_deserializes_paired_button_colours() {
        let scheme: ColourScheme = serde_json::from_value(serde_json::json!({
            "foregroundColour": "#f5e942",
            "backgroundColour": "#d6180b",
            "buttonColours": {
                "default": { "background": "#ede1ec", "text": "#290425" },
                "hover": { "background": "#f2ceef", "text": "#290425" },
                "active": { "background": "#f0afe9", "text": "#290425" },
                "disabled": { "background": "#999999", "text": "#333333" }
            }
        }))
        .unwrap();

        let buttons = scheme.button_colours.unwrap();
        assert_eq!(
            buttons.default,
            ColourProperty::from(ColourPair::new("#290425", "#ede1ec"))
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let scheme = ColourScheme::new("#f5e942", "#d6180b")
            .background_image("https://example.com/red-background.jpg")
            .heading(PlainColours::new("#bf30b1"));

        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(json["foregroundColour"], "#f5e942");
        assert_eq!(json["headingColour"]["default"], "#bf30b1");
        assert!(json.get("linkColours").is_none());

        let back: ColourScheme = serde_json::from_value(json).unwrap();
        assert_eq!(back, scheme);
    }
}
