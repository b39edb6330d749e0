//! Bordered Text Table
//!
//! ```text
//! +------+-------+
//! | Move | Score |
//! +------+-------+
//! | Rock | 1     |
//! +------+-------+
//! ```

use thiserror::Error;

/// Table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row's cell count differs from the title's.
    #[error("row {row} has {got} cells, but the title has {expected}")]
    ShapeMismatch {
        /// Zero-based data row index.
        row: usize,
        /// Title cell count.
        expected: usize,
        /// Cell count of the offending row.
        got: usize,
    },
}

/// Immutable text table with a title row and equal-width data rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePrinter {
    title: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl TablePrinter {
    /// Create an empty table with the given title cells.
    pub fn new<T>(title: T) -> Self
    where
        T: IntoIterator,
        T::Item: ToString,
    {
        let title = to_cells(title);
        let widths = title.iter().map(|c| cell_width(c)).collect();
        Self { title, rows: Vec::new(), widths }
    }

    /// Create a table with title and data rows.
    ///
    /// Every row must have as many cells as the title.
    pub fn with_rows<T, R, C>(title: T, rows: R) -> Result<Self, TableError>
    where
        T: IntoIterator,
        T::Item: ToString,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: ToString,
    {
        rows.into_iter().try_fold(Self::new(title), |table, row| table.add_row(row))
    }

    /// Return a new table with one more data row.
    pub fn add_row<C>(mut self, row: C) -> Result<Self, TableError>
    where
        C: IntoIterator,
        C::Item: ToString,
    {
        let row = to_cells(row);

        if row.len() != self.title.len() {
            return Err(TableError::ShapeMismatch {
                row: self.rows.len(),
                expected: self.title.len(),
                got: row.len(),
            });
        }

        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(cell_width(cell));
        }

        self.rows.push(row);
        Ok(self)
    }

    /// Column widths (widest cell per column, title included).
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table. No trailing newline.
    pub fn render(&self) -> String {
        let delimiter = self.delimiter();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(delimiter.clone());
        lines.push(self.format_row(&self.title));
        lines.push(delimiter.clone());
        lines.extend(self.rows.iter().map(|row| self.format_row(row)));
        lines.push(delimiter);

        lines.join("\n")
    }

    fn delimiter(&self) -> String {
        let dashes: Vec<String> = self.widths.iter().map(|w| "-".repeat(*w)).collect();
        format!("+-{}-+", dashes.join("-+-"))
    }

    fn format_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&self.widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("| {} |", cells.join(" | "))
    }
}

impl std::fmt::Display for TablePrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn to_cells<T>(cells: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: ToString,
{
    cells.into_iter().map(|c| c.to_string()).collect()
}

/// Display width in chars, matching `format!` padding.
#[inline]
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

// =============================================================================
// TESTS
// =============================================================================
