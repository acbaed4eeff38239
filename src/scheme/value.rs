//! Colour values, pairs, and per-phase properties.

use serde::{Deserialize, Serialize};

/// A single colour channel value.
///
/// Values are classified once, at parse time: a literal colour encoding
/// (leading `#`) becomes [`ColourValue::Raw`], anything else is an opaque
/// [`ColourValue::Token`] naming a pre-defined style rule. The classification
/// is never re-derived by string inspection later.
///
/// # Example
///
/// ```rust
/// use recolour::ColourValue;
///
/// assert!(ColourValue::from("#f0d4af").is_raw());
/// assert!(!ColourValue::from("text-blue-200").is_raw());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColourValue {
    /// A literal colour encoding, e.g. `#f0d4af`.
    Raw(String),
    /// A semantic class token, e.g. `text-blue-200`.
    Token(String),
}

impl ColourValue {
    /// Returns `true` for literal colour encodings.
    pub fn is_raw(&self) -> bool {
        matches!(self, ColourValue::Raw(_))
    }

    /// The underlying string, regardless of form.
    pub fn as_str(&self) -> &str {
        match self {
            ColourValue::Raw(value) | ColourValue::Token(value) => value,
        }
    }
}

impl From<&str> for ColourValue {
    fn from(value: &str) -> Self {
        if value.starts_with('#') {
            ColourValue::Raw(value.to_string())
        } else {
            ColourValue::Token(value.to_string())
        }
    }
}

impl From<String> for ColourValue {
    fn from(value: String) -> Self {
        ColourValue::from(value.as_str())
    }
}

impl From<ColourValue> for String {
    fn from(value: ColourValue) -> Self {
        match value {
            ColourValue::Raw(value) | ColourValue::Token(value) => value,
        }
    }
}

/// A linked text and background colour, used by button-like roles.
///
/// Both members must share one form: both raw or both tokens. Mixed pairs are
/// rejected during colour-set validation, before any node is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourPair {
    pub text: ColourValue,
    pub background: ColourValue,
}

impl ColourPair {
    pub fn new(text: impl Into<ColourValue>, background: impl Into<ColourValue>) -> Self {
        Self {
            text: text.into(),
            background: background.into(),
        }
    }

    /// Whether text and background share the same form.
    pub fn is_homogeneous(&self) -> bool {
        self.text.is_raw() == self.background.is_raw()
    }
}

/// The colour carried by one phase of a colour set: a single value applied to
/// the text channel, or a text/background pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourProperty {
    Pair(ColourPair),
    Single(ColourValue),
}

impl ColourProperty {
    /// Whether the property carries raw colour encodings.
    ///
    /// For pairs this reads the text member; homogeneity is validated before
    /// this distinction matters.
    pub fn is_raw(&self) -> bool {
        match self {
            ColourProperty::Single(value) => value.is_raw(),
            ColourProperty::Pair(pair) => pair.text.is_raw(),
        }
    }

    /// Whether the property satisfies pair homogeneity.
    pub fn is_homogeneous(&self) -> bool {
        match self {
            ColourProperty::Single(_) => true,
            ColourProperty::Pair(pair) => pair.is_homogeneous(),
        }
    }
}

impl From<&str> for ColourProperty {
    fn from(value: &str) -> Self {
        ColourProperty::Single(value.into())
    }
}

impl From<ColourValue> for ColourProperty {
    fn from(value: ColourValue) -> Self {
        ColourProperty::Single(value)
    }
}

impl From<ColourPair> for ColourProperty {
    fn from(pair: ColourPair) -> Self {
        ColourProperty::Pair(pair)
    }
}
