//! Table model structures.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// Default cell width in twips.
pub const DEFAULT_COLUMN_WIDTH: u32 = 2400;

/// A cell in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell content (paragraphs)
    #[serde(default)]
    pub content: Vec<Paragraph>,

    /// Cell width in twips (`w:tcW`, type dxa)
    pub width: u32,
}

impl Cell {
    /// Create a cell with a single plain paragraph.
    pub fn with_text(text: impl Into<String>, width: u32) -> Self {
        Self {
            content: vec![Paragraph::from_runs(vec![super::TextRun::plain(text)])],
            width,
        }
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Border sizes in eighths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBorders {
    /// Top, left, bottom and right edges
    pub outer: u32,
    /// Inside horizontal and vertical rules
    pub inner: u32,
}

impl Default for TableBorders {
    fn default() -> Self {
        Self { outer: 8, inner: 6 }
    }
}

/// A rectangular table with uniform column widths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,

    /// Grid column widths in twips
    #[serde(default)]
    pub column_widths: Vec<u32>,

    #[serde(default)]
    pub borders: TableBorders,
}

impl Table {
    /// Build a `rows` x `columns` table; `fill` receives 1-based (row, column).
    pub fn uniform<F>(rows: usize, columns: usize, column_width: u32, mut fill: F) -> Self
    where
        F: FnMut(usize, usize) -> String,
    {
        let rows = (1..=rows)
            .map(|r| Row {
                cells: (1..=columns)
                    .map(|c| Cell::with_text(fill(r, c), column_width))
                    .collect(),
            })
            .collect();

        Self {
            rows,
            column_widths: vec![column_width; columns],
            borders: TableBorders::default(),
        }
    }

    /// Number of grid columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_table() {
        let table = Table::uniform(6, 4, DEFAULT_COLUMN_WIDTH, |r, c| format!("R{}C{}", r, c));
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.column_count(), 4);
        assert!(table.rows.iter().all(|row| row.len() == 4));
        assert_eq!(table.rows[0].cells[0].plain_text(), "R1C1");
        assert_eq!(table.rows[5].cells[3].plain_text(), "R6C4");
        assert_eq!(table.rows[2].cells[1].width, 2400);
    }

    #[test]
    fn test_default_borders() {
        let borders = TableBorders::default();
        assert_eq!(borders.outer, 8);
        assert_eq!(borders.inner, 6);
    }
}
