//! Detection of already-authored colouring.
//!
//! A node the tree's author has already coloured must not be clobbered. A
//! channel counts as coloured when either an inline style declaration exists
//! for it, or the class list carries a token matching that channel's
//! colour-indicating naming pattern (or one of a fixed set of special tokens
//! meaning inherit/current/transparent/black/white).
//!
//! The pattern tables live here as static configuration rather than scattered
//! literals, so the predicate is testable in isolation. Detection is
//! channel-scoped: a node can have its background suppressed while its
//! foreground is still written, and vice versa.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::style::{StyleMap, BACKGROUND_COLOR, COLOR};

/// The colour channel a value targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Foreground,
    Background,
}

static FOREGROUND_SPECIAL: &[&str] = &[
    "text-inherit",
    "text-current",
    "text-transparent",
    "text-black",
    "text-white",
];

static BACKGROUND_SPECIAL: &[&str] = &[
    "bg-inherit",
    "bg-current",
    "bg-transparent",
    "bg-black",
    "bg-white",
];

static FOREGROUND_UTILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"text-[a-z]*-[0-9]{2,3}").unwrap());

static BACKGROUND_UTILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"bg-[a-z]*-[0-9]{2,3}").unwrap());

impl Channel {
    /// The inline style property this channel writes to.
    pub fn style_property(self) -> &'static str {
        match self {
            Channel::Foreground => COLOR,
            Channel::Background => BACKGROUND_COLOR,
        }
    }

    fn special_tokens(self) -> &'static [&'static str] {
        match self {
            Channel::Foreground => FOREGROUND_SPECIAL,
            Channel::Background => BACKGROUND_SPECIAL,
        }
    }

    fn utility_pattern(self) -> &'static Regex {
        match self {
            Channel::Foreground => &FOREGROUND_UTILITY,
            Channel::Background => &BACKGROUND_UTILITY,
        }
    }
}

/// Returns `true` when the node already carries explicit colouring for
/// `channel`, via an inline style declaration or a colour-indicating class
/// token.
pub fn is_coloured(channel: Channel, styles: &StyleMap, classes: &[String]) -> bool {
    if styles.contains_key(channel.style_property()) {
        return true;
    }
    let joined = classes.join(" ");
    if channel
        .special_tokens()
        .iter()
        .any(|token| joined.contains(token))
    {
        return true;
    }
    channel.utility_pattern().is_match(&joined)
}
