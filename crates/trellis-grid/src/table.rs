//! The fluent table builder.

use std::fmt;
use std::num::NonZeroUsize;

use indexmap::IndexMap;
use trellis_core::{chunk_chars, Align};

use crate::cell::{Cell, Content};
use crate::render;

/// 1-based `(row, column)` grid coordinates.
type Key = (usize, usize);

/// How cells without explicit coordinates are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Fill columns left to right, wrapping to a new row every `N`
    /// cells.
    Grid(NonZeroUsize),
    /// Coordinates are supplied by the caller; auto-placement extends
    /// the current row and never wraps.
    Freeform,
}

/// Fluent builder and renderer for bordered ASCII tables.
///
/// Cells live in an insertion-ordered occupancy map; placing a cell on
/// an occupied coordinate replaces the earlier one. All mutators return
/// the table for chaining, and [`Table::render`] (or `Display`) can be
/// called any number of times against the accumulated state.
///
/// The attribute mutators [`align`](Table::align),
/// [`padding`](Table::padding), and [`position`](Table::position)
/// always target the most recently placed cell; with nothing placed
/// yet they are no-ops, keeping chains fluent-safe.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) mode: PlacementMode,
    pub(crate) cells: IndexMap<Key, Cell>,
    pub(crate) caption: Option<String>,
    /// Auto-placement cursor. Explicit positioning shares it, so a
    /// `position` call can desynchronize it from grid occupancy; see
    /// the `position` docs.
    last_row: usize,
    last_col: usize,
    /// Total cells ever appended, wrap chunks included. Drives the
    /// grid-mode row advance.
    placed: usize,
    last_key: Option<Key>,
}

impl Table {
    /// Create a table with the given placement mode.
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            cells: IndexMap::new(),
            caption: None,
            last_row: 0,
            last_col: 0,
            placed: 0,
            last_key: None,
        }
    }

    /// Create a grid-mode table wrapping every `columns` cells.
    pub fn grid(columns: NonZeroUsize) -> Self {
        Self::new(PlacementMode::Grid(columns))
    }

    /// Create a freeform table; every cell is expected to be positioned
    /// by the caller.
    pub fn freeform() -> Self {
        Self::new(PlacementMode::Freeform)
    }

    /// The table's placement mode.
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Number of cells currently occupying a coordinate.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been placed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Place a value (text or a nested table) at the cursor.
    pub fn put(self, value: impl Into<Content>) -> Self {
        self.put_cell(Cell::new(value.into()))
    }

    /// Place a value directly at an explicit 1-based coordinate.
    ///
    /// Unlike `put(value).position(row, column)`, the value never
    /// transits through the cursor slot, so it cannot clobber a cell
    /// that happens to sit there. The cursor and placement count still
    /// advance to the explicit coordinate (explicit and automatic
    /// placement share one cursor). Zero coordinates fall back to
    /// automatic placement.
    pub fn put_at(mut self, row: usize, column: usize, value: impl Into<Content>) -> Self {
        if row == 0 || column == 0 {
            return self.put(value);
        }
        self.insert_at((row, column), Cell::new(value.into()));
        self
    }

    /// Place a value clipped to `width` chars.
    ///
    /// For column aggregation the cell measures exactly `width` wide,
    /// even when the clipped content is shorter.
    pub fn put_clipped(self, value: impl Into<Content>, width: NonZeroUsize) -> Self {
        let mut cell = Cell::new(value.into());
        cell.width = Some(width);
        self.put_cell(cell)
    }

    /// Place text split into `width`-char chunks on successive rows of
    /// one column.
    ///
    /// The first chunk lands where the cursor would have placed the
    /// whole value; each further chunk goes one row down in the same
    /// column. Every chunk counts as a placed cell, and the call
    /// itself contributes no cell beyond its chunks. Empty input
    /// places a single empty cell so a chained mutator still has a
    /// target.
    pub fn put_wrapped(mut self, text: impl Into<String>, width: NonZeroUsize) -> Self {
        let text = text.into();
        let chunks = chunk_chars(&text, width.get());
        if chunks.is_empty() {
            return self.put_clipped("", width);
        }

        let (row, col) = self.next_key();
        for (offset, chunk) in chunks.into_iter().enumerate() {
            let mut cell = Cell::new(Content::Text(chunk));
            cell.width = Some(width);
            self.insert_at((row + offset, col), cell);
        }
        self
    }

    /// Set the most recently placed cell's alignment.
    pub fn align(mut self, align: Align) -> Self {
        if let Some(cell) = self.last_cell_mut() {
            cell.align = align;
        }
        self
    }

    /// Set the most recently placed cell's padding: that many spaces on
    /// each side of the justified content, independent of column width.
    pub fn padding(mut self, size: usize) -> Self {
        if let Some(cell) = self.last_cell_mut() {
            cell.padding = size;
        }
        self
    }

    /// Move the most recently placed cell to an explicit coordinate.
    ///
    /// Coordinates are 1-based; a zero coordinate is a no-op. Moving
    /// onto an occupied coordinate replaces that cell. In grid mode the
    /// auto-placement cursor is deliberately left alone, so later
    /// unpositioned cells continue from where automatic placement left
    /// off; in freeform mode the cursor follows the move so later
    /// `put` calls extend the new row.
    pub fn position(mut self, row: usize, column: usize) -> Self {
        if row == 0 || column == 0 {
            return self;
        }
        if let Some(key) = self.last_key {
            if let Some(cell) = self.cells.shift_remove(&key) {
                self.cells.insert((row, column), cell);
                self.last_key = Some((row, column));
                if self.mode == PlacementMode::Freeform {
                    self.last_row = row;
                    self.last_col = column;
                }
            }
        }
        self
    }

    /// Set the caption, overwriting any previous one.
    pub fn caption(mut self, text: impl Into<String>) -> Self {
        self.caption = Some(text.into());
        self
    }

    /// Render the accumulated cells to the bordered text grid.
    ///
    /// Pure and idempotent: repeated calls without intervening
    /// placements produce byte-identical output. A table with no cells
    /// renders the empty string.
    pub fn render(&self) -> String {
        render::render(self)
    }

    fn put_cell(mut self, cell: Cell) -> Self {
        let key = self.next_key();
        self.insert_at(key, cell);
        self
    }

    /// Where the cursor places the next unpositioned cell.
    fn next_key(&self) -> Key {
        match self.mode {
            PlacementMode::Grid(columns) => {
                if self.placed % columns.get() == 0 {
                    (self.last_row + 1, 1)
                } else {
                    (self.last_row, self.last_col + 1)
                }
            }
            PlacementMode::Freeform => (self.last_row.max(1), self.last_col + 1),
        }
    }

    fn insert_at(&mut self, key: Key, cell: Cell) {
        self.cells.insert(key, cell);
        self.last_key = Some(key);
        self.last_row = key.0;
        self.last_col = key.1;
        self.placed += 1;
    }

    fn last_cell_mut(&mut self) -> Option<&mut Cell> {
        let key = self.last_key?;
        self.cells.get_mut(&key)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
