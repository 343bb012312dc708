//! Error types for the trellis engine.

use thiserror::Error;

/// Failure to parse an [`Align`](crate::Align) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alignment {value:?}, expected one of: left, right, center")]
pub struct ParseAlignError {
    /// The rejected input.
    pub value: String,
}
