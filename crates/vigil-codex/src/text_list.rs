//! Column-based label/value list.
//!
//! Holds the rows an article screen displays: per-cell text and color,
//! optional dot leaders between columns. Rendering produces plain
//! strings; pixel text is out of scope.

use serde::{Deserialize, Serialize};

/// One cell of a list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub color: u8,
}

/// A list of rows with fixed column widths (in characters).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextList {
    column_widths: Vec<usize>,
    dot_leaders: bool,
    color: u8,
    rows: Vec<Vec<Cell>>,
}

impl TextList {
    pub fn new(column_widths: Vec<usize>, color: u8) -> Self {
        Self {
            column_widths,
            dot_leaders: false,
            color,
            rows: Vec::new(),
        }
    }

    /// Fill the space between columns with dot leaders.
    pub fn set_dot_leaders(&mut self, on: bool) {
        self.dot_leaders = on;
    }

    /// Append a row. An empty slice appends a blank separator row.
    pub fn add_row(&mut self, texts: &[&str]) {
        let cells = texts
            .iter()
            .map(|text| Cell {
                text: (*text).to_string(),
                color: self.color,
            })
            .collect();
        self.rows.push(cells);
    }

    /// Recolor one cell. Out-of-range coordinates are dropped.
    pub fn set_cell_color(&mut self, row: usize, col: usize, color: u8) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.color = color;
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Whether a row is a blank separator.
    pub fn is_separator(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(|r| r.is_empty())
    }

    /// Render one row: every cell but the last is padded to its column
    /// width, with dots when dot leaders are on.
    pub fn render_row(&self, row: usize) -> String {
        let Some(cells) = self.rows.get(row) else {
            return String::new();
        };
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                out.push_str(&cell.text);
                break;
            }
            let width = self.column_widths.get(i).copied().unwrap_or(0);
            let filler = if self.dot_leaders { '.' } else { ' ' };
            out.push_str(&cell.text);
            for _ in cell.text.chars().count()..width {
                out.push(filler);
            }
        }
        out
    }

    /// Render every row, one per line.
    pub fn render(&self) -> String {
        (0..self.rows.len())
            .map(|i| self.render_row(i))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
