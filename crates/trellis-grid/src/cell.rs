//! Cell content and per-cell attributes.

use std::num::NonZeroUsize;

use trellis_core::Align;

use crate::table::Table;

/// A renderable cell value: plain text or a nested table.
///
/// A nested table is owned by its cell and built independently; the
/// outer table only reads its rendered text. When embedded, a table
/// collapses to the first line of its own rendered output (the caption
/// line if one is set, otherwise the top border).
#[derive(Debug, Clone)]
pub enum Content {
    /// Plain text
    Text(String),
    /// A fully-built table, flattened to a single line when rendered
    Table(Table),
}

impl Content {
    /// The single-line representation used inside a parent cell.
    pub(crate) fn flatten(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Table(table) => table
                .render()
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Table> for Content {
    fn from(value: Table) -> Self {
        Content::Table(value)
    }
}

/// One placed unit of content.
///
/// Coordinates live in the owning table's occupancy map, not here.
#[derive(Debug, Clone)]
pub(crate) struct Cell {
    pub(crate) content: Content,
    pub(crate) align: Align,
    pub(crate) padding: usize,
    /// Clip width. When set, the content is cut to this many chars at
    /// render time and the cell measures exactly this wide for column
    /// aggregation, even if the clipped text is shorter.
    pub(crate) width: Option<NonZeroUsize>,
}

impl Cell {
    pub(crate) fn new(content: Content) -> Self {
        Self {
            content,
            align: Align::default(),
            padding: 0,
            width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_flattens_to_itself() {
        let content = Content::from("hello");
        assert_eq!(content.flatten(), "hello");
    }

    #[test]
    fn test_empty_table_flattens_to_empty() {
        let content = Content::from(Table::freeform());
        assert_eq!(content.flatten(), "");
    }
}
