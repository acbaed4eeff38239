//! Conversion errors.

use crate::node::NodeKind;
use crate::scheme::Phase;

/// Error raised when a node/colour-set pairing fails validation.
///
/// All variants surface before any mutation: shape and pair homogeneity are
/// checked eagerly at converter construction, so a failed conversion never
/// leaves a node partially coloured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The colour set's shape does not match what the node kind structurally
    /// supports.
    ShapeMismatch { kind: NodeKind },
    /// Conversion was explicitly requested for a node that is not one of the
    /// convertible kinds, including input-like nodes without a button or
    /// submit role.
    InvalidNodeKind { tag: String, role: Option<String> },
    /// A colour pair mixes a raw value with a class token.
    MixedColourForms { phase: Phase },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::ShapeMismatch { kind } => {
                write!(f, "colour set shape is not valid for {} nodes", kind)
            }
            ConvertError::InvalidNodeKind {
                tag,
                role: Some(role),
            } => {
                write!(f, "attempt to convert <{}> with unsupported role '{}'", tag, role)
            }
            ConvertError::InvalidNodeKind { tag, role: None } => {
                write!(f, "attempt to convert non-convertible <{}> node", tag)
            }
            ConvertError::MixedColourForms { phase } => {
                write!(
                    f,
                    "mix of raw colour values and class tokens is not permitted in '{}' colours",
                    phase
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = ConvertError::ShapeMismatch {
            kind: NodeKind::Heading,
        };
        assert!(err.to_string().contains("HEADING"));
    }

    #[test]
    fn test_invalid_node_kind_display() {
        let err = ConvertError::InvalidNodeKind {
            tag: "input".to_string(),
            role: Some("text".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("input"));
        assert!(msg.contains("text"));

        let err = ConvertError::InvalidNodeKind {
            tag: "div".to_string(),
            role: None,
        };
        assert!(err.to_string().contains("div"));
    }

    #[test]
    fn test_mixed_colour_forms_display() {
        let err = ConvertError::MixedColourForms {
            phase: Phase::Hover,
        };
        assert!(err.to_string().contains("hover"));
    }
}
