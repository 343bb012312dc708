//! Row grouping, equalization, and column-width computation.
//!
//! Everything here is a pure function of the table's current cell
//! collection, recomputed on every render. There is no incrementally
//! maintained width map, so cells added between renders are always
//! reflected and nothing ever goes stale.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use trellis_core::{display_width, truncate_chars, Align};

use crate::cell::Cell;
use crate::table::{PlacementMode, Table};

/// A cell reduced to the strings and numbers the renderer needs.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedCell {
    pub(crate) column: usize,
    pub(crate) text: String,
    /// Width this cell contributes to its column's aggregation. Equal
    /// to the clip width when one is set, otherwise the text's char
    /// count.
    pub(crate) measure: usize,
    pub(crate) align: Align,
    pub(crate) padding: usize,
}

pub(crate) type RowCells = SmallVec<[ResolvedCell; 4]>;

/// Resolve every cell and group them into rows, ascending by row index
/// with ascending columns inside each row.
///
/// Nested tables are rendered here (recursively) and collapse to their
/// first output line.
pub(crate) fn resolve_rows(table: &Table) -> BTreeMap<usize, RowCells> {
    let mut rows: BTreeMap<usize, RowCells> = BTreeMap::new();
    for (&(row, column), cell) in &table.cells {
        rows.entry(row).or_default().push(resolve(column, cell));
    }
    for cells in rows.values_mut() {
        cells.sort_by_key(|cell| cell.column);
    }
    rows
}

fn resolve(column: usize, cell: &Cell) -> ResolvedCell {
    let flat = cell.content.flatten();
    let (text, measure) = match cell.width {
        Some(width) => (truncate_chars(&flat, width.get()), width.get()),
        None => {
            let measure = display_width(&flat);
            (flat, measure)
        }
    };
    ResolvedCell {
        column,
        text,
        measure,
        align: cell.align,
        padding: cell.padding,
    }
}

/// Pad every row with empty cells so each one carries the same cell
/// count and the row borders line up.
///
/// Grid mode pads each row to the next multiple of the column count;
/// freeform mode pads to the longest row. Synthetic cells take the
/// columns after the last one the row uses, left-aligned with no
/// padding and zero measured width.
pub(crate) fn equalize(rows: &mut BTreeMap<usize, RowCells>, mode: PlacementMode) {
    let longest = rows.values().map(SmallVec::len).max().unwrap_or(0);
    for cells in rows.values_mut() {
        let target = match mode {
            PlacementMode::Grid(columns) => {
                let columns = columns.get();
                cells.len().div_ceil(columns) * columns
            }
            PlacementMode::Freeform => longest,
        };
        let mut column = cells.last().map(|cell| cell.column).unwrap_or(0);
        while cells.len() < target {
            column += 1;
            cells.push(ResolvedCell {
                column,
                text: String::new(),
                measure: 0,
                align: Align::Left,
                padding: 0,
            });
        }
    }
}

/// Per-column maximum measured width across every cell in the column.
///
/// A max-fold, so the result is independent of placement order.
pub(crate) fn column_widths(rows: &BTreeMap<usize, RowCells>) -> BTreeMap<usize, usize> {
    let mut widths = BTreeMap::new();
    for cell in rows.values().flatten() {
        let width = widths.entry(cell.column).or_insert(0);
        *width = (*width).max(cell.measure);
    }
    widths
}
