//! Emission of bordered, padded, aligned text.

use std::collections::BTreeMap;

use trellis_core::{display_width, justify, Align};

use crate::layout::{column_widths, equalize, resolve_rows, RowCells};
use crate::table::Table;

/// Render the table to its final text form.
///
/// Output shape: optional caption line, then rows interleaved with a
/// single shared horizontal border, which also opens and closes the
/// table. Lines are joined with `\n` and there is no trailing newline.
pub(crate) fn render(table: &Table) -> String {
    let mut rows = resolve_rows(table);
    equalize(&mut rows, table.mode);
    let widths = column_widths(&rows);

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() * 2 + 2);
    let mut border: Option<String> = None;

    for cells in rows.values() {
        let line = render_row(cells, &widths);
        // The border is derived once, from the first row; column widths
        // are global, so every row comes out the same length.
        let border = border.get_or_insert_with(|| horizontal_border(display_width(&line)));
        if lines.is_empty() {
            lines.push(border.clone());
        }
        lines.push(line);
        lines.push(border.clone());
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if let Some(caption) = &table.caption {
        out.push_str(&justify(caption, display_width(&lines[0]), Align::Center));
        out.push('\n');
    }
    out.push_str(&lines.join("\n"));
    out
}

fn render_row(cells: &RowCells, widths: &BTreeMap<usize, usize>) -> String {
    let mut line = String::new();
    for cell in cells {
        let width = widths.get(&cell.column).copied().unwrap_or(0);
        let pad = " ".repeat(cell.padding);
        line.push('|');
        line.push_str(&pad);
        line.push_str(&justify(&cell.text, width, cell.align));
        line.push_str(&pad);
    }
    line.push('|');
    line
}

fn horizontal_border(length: usize) -> String {
    format!("+{}+", "-".repeat(length.saturating_sub(2)))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_two_by_two_grid() {
        let table = Table::grid(nz(2)).put("a").put("bb").put("ccc").put("d");
        let expected = "\
+------+
|a  |bb|
+------+
|ccc|d |
+------+";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_empty_table_renders_empty_string() {
        assert_eq!(Table::grid(nz(3)).render(), "");
        assert_eq!(Table::freeform().render(), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let table = Table::grid(nz(2))
            .caption("twice")
            .put("a")
            .put("bb")
            .put("c");
        assert_eq!(table.render(), table.render());
        assert_eq!(table.render(), table.to_string());
    }

    #[test]
    fn test_padding_wraps_both_sides() {
        let table = Table::grid(nz(1)).put("hi").padding(2);
        let expected = "\
+------+
|  hi  |
+------+";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_alignment_within_column() {
        let table = Table::grid(nz(1))
            .put("wide enough")
            .put("r")
            .align(trellis_core::Align::Right)
            .put("c")
            .align(trellis_core::Align::Center);
        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[3], "|          r|");
        assert_eq!(lines[5], "|     c     |");
    }

    #[test]
    fn test_caption_is_centered_to_border_width() {
        let table = Table::grid(nz(1)).caption("t").put("hi");
        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        // Border is 4 wide; odd slack leaves the extra space on the
        // right.
        assert_eq!(lines[0], " t  ");
        assert_eq!(lines[1], "+--+");
        assert_eq!(display_width(lines[0]), display_width(lines[1]));
    }

    #[test]
    fn test_long_caption_is_not_truncated() {
        let table = Table::grid(nz(1)).caption("longer than table").put("x");
        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "longer than table");
    }

    #[test]
    fn test_nested_table_flattens_to_first_line() {
        let inner = Table::grid(nz(2)).put("a").put("b");
        let table = Table::grid(nz(1)).put("x").put(inner);
        let expected = "\
+-----+
|x    |
+-----+
|+---+|
+-----+";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_nested_width_matches_plain_text_of_same_length() {
        let inner = Table::grid(nz(2)).put("a").put("b");
        let nested = Table::grid(nz(1)).put("x").put(inner).render();
        let plain = Table::grid(nz(1)).put("x").put("+---+").render();
        assert_eq!(
            nested.lines().next().map(display_width),
            plain.lines().next().map(display_width)
        );
    }

    #[test]
    fn test_captioned_nested_table_flattens_to_caption_line() {
        let inner = Table::grid(nz(1)).caption("in").put("a");
        let table = Table::grid(nz(1)).put(inner);
        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        // Inner first line is its caption, padded to its border width.
        assert_eq!(lines[1], "|in |");
    }

    #[test]
    fn test_wrapping_matches_manual_placement() {
        let wrapped = Table::grid(nz(1)).put_wrapped("abcdefgh", nz(3));
        let manual = Table::grid(nz(1)).put("abc").put("def").put("gh");
        assert_eq!(wrapped.render(), manual.render());
    }

    #[test]
    fn test_cells_added_after_render_widen_columns() {
        let table = Table::grid(nz(1)).put("ab");
        let narrow = table.render();
        let wide = table.put("abcdef").render();
        assert!(display_width(narrow.lines().next().unwrap())
            < display_width(wide.lines().next().unwrap()));
    }
}
