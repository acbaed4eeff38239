//! Inline style maps and style-attribute text round-tripping.

use std::collections::BTreeMap;

/// The foreground style channel.
pub const COLOR: &str = "color";
/// The background style channel.
pub const BACKGROUND_COLOR: &str = "background-color";

/// Inline styles as property/value declarations.
pub type StyleMap = BTreeMap<String, String>;

/// Parses a style attribute (`"color:#aaa;background-color:#bbb"`) into a
/// [`StyleMap`]. Empty declarations and surrounding whitespace are tolerated;
/// declarations without a `:` are dropped.
pub fn parse_style_attr(text: &str) -> StyleMap {
    let mut map = StyleMap::new();
    for declaration in text.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        if let Some((property, value)) = declaration.split_once(':') {
            map.insert(property.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Serializes a [`StyleMap`] back into style attribute text, each declaration
/// terminated with `;`.
pub fn format_style_attr(map: &StyleMap) -> String {
    let mut out = String::new();
    for (property, value) in map {
        out.push_str(property);
        out.push(':');
        out.push_str(value);
        out.push(';');
    }
    out
}
