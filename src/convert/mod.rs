//! Per-node conversion: validation, resolution, and interaction binding.
//!
//! This module provides:
//!
//! - [`ElementConverter`]: the per-node orchestrator
//! - [`validate_set`]: the standalone shape/homogeneity validator
//! - [`ConversionPlan`] and friends: the pure output a conversion applies
//! - [`ConvertError`]: everything that can go wrong

mod element;
mod error;
mod plan;

pub use element::{validate_set, ElementConverter};
pub use error::ConvertError;
pub use plan::{ConversionPlan, DisabledBinding, PhaseColours, PointerBindings};
