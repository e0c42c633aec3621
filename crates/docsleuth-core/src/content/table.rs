/// Loader-agnostic spreadsheet grid.
///
/// The classifier and the name synthesizer only ever see [`Table`] values,
/// so the engine works identically whether rows came from a real workbook,
/// another loader, or a test fixture.
use std::fmt;

/// One spreadsheet cell, reduced to the scalar forms the engine cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for Cell {
    /// Deterministic string form. Numbers use Rust's shortest-round-trip
    /// float formatting, so `12.0` renders as `12` and `12.5` as `12.5`
    /// regardless of locale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A rectangular-ish grid of cells. Rows may have differing widths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor used by tests and embedders: every cell is
    /// a text cell.
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|s| Cell::Text(s.to_string())).collect())
            .collect();
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_display_is_deterministic() {
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Text("Смета".into()).to_string(), "Смета");
        assert_eq!(Cell::Number(12.0).to_string(), "12");
        assert_eq!(Cell::Number(12.5).to_string(), "12.5");
        assert_eq!(Cell::Bool(true).to_string(), "true");
    }

    #[test]
    fn from_text_rows_builds_text_cells() {
        let table = Table::from_text_rows(&[&["a", "b"], &["c"]]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][1], Cell::Text("b".into()));
        assert_eq!(table.rows()[1].len(), 1);
    }
}
