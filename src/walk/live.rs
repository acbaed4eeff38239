//! The walker for live, surface-attached trees.

use crate::convert::{ConvertError, ElementConverter};
use crate::node::{NodeKind, Surface};
use crate::scheme::ColourScheme;

use super::DispatchTable;

/// The summary returned when a live walk converts nothing.
pub const NOTHING_CONVERTED: &str = "Nothing converted";

/// Walks a live tree and applies the scheme's colours in place.
///
/// There is no manual recursion here: the surface provides per-kind lookup,
/// so each configured kind is fetched and converted directly. The walk
/// returns a human-readable per-kind summary, e.g.
/// `"2 x HEADING converted, 1 x LINK converted"`, or
/// [`NOTHING_CONVERTED`] when no kind matched.
///
/// Conversion attaches listeners and observers that outlive the call; content
/// changes after the fact require a fresh walk from the caller (only disabled
/// transitions are re-observed).
pub struct LiveTreeConverter {
    table: DispatchTable,
}

impl LiveTreeConverter {
    pub fn new(scheme: &ColourScheme) -> Self {
        Self {
            table: DispatchTable::new(scheme),
        }
    }

    /// Converts every matching descendant of the surface's root.
    ///
    /// # Errors
    ///
    /// Aborts on the first validation failure. Validation runs before any
    /// write to the failing node, but nodes converted earlier in the walk
    /// keep their applied colours.
    pub fn convert(&self, surface: &Surface) -> Result<String, ConvertError> {
        let mut segments = Vec::new();
        for kind in NodeKind::ALL {
            let Some(set) = self.table.get(kind) else {
                continue;
            };
            let mut converted = 0usize;
            for node in surface.query_kind(kind) {
                let converter = ElementConverter::new(&node, set)?;
                node.apply(&converter.plan());
                converted += 1;
            }
            if converted > 0 {
                segments.push(format!("{} x {} converted", converted, kind));
            }
        }
        if segments.is_empty() {
            Ok(NOTHING_CONVERTED.to_string())
        } else {
            Ok(segments.join(", "))
        }
    }
}
