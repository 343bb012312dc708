//! Fluent ASCII table builder and renderer.
//!
//! This crate turns a chain of cell placements into a bordered,
//! padded, aligned text grid. It is a pure layout engine: no I/O, no
//! styling, no streaming.
//!
//! # Architecture
//!
//! 1. **Placement**: [`Table`] accumulates cells in an
//!    insertion-ordered occupancy map keyed by 1-based `(row, column)`
//!    coordinates. Cells are placed automatically by a cursor or
//!    explicitly via [`Table::position`]; the last write to a
//!    coordinate wins.
//! 2. **Layout**: at render time, rows are padded with empty cells to
//!    a uniform column count and per-column widths are recomputed from
//!    scratch as the maximum content width in each column.
//! 3. **Rendering**: rows are emitted between shared `+---+` border
//!    lines; a nested table collapses to the first line of its own
//!    rendered output.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use trellis_grid::{Align, Table};
//!
//! let columns = NonZeroUsize::new(2).expect("non-zero");
//! let table = Table::grid(columns)
//!     .caption("inventory")
//!     .put("item")
//!     .put("count")
//!     .put("apples")
//!     .put("7")
//!     .align(Align::Right);
//!
//! let text = table.render();
//! // caption + border/row/border/row/border
//! assert_eq!(text.lines().count(), 6);
//! ```

mod cell;
mod layout;
mod render;
mod table;

pub use cell::Content;
pub use table::{PlacementMode, Table};

// Re-exported so callers rarely need trellis-core directly.
pub use trellis_core::Align;
