//! Value types and text primitives for the trellis table engine.
//!
//! This crate holds what the layout and rendering stages share:
//! alignment, space-justification, and character-count measurement
//! and slicing. Everything here measures raw `char`s; double-width
//! glyphs and grapheme clusters are out of scope.

mod align;
mod errors;
mod text;

pub use align::{justify, Align};
pub use errors::ParseAlignError;
pub use text::{chunk_chars, display_width, truncate_chars};
