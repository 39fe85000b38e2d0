//! Work table of the route cipher

use std::fmt;

/// Row-major grid of letters used by the route cipher
///
/// Letters fill the grid left to right, top to bottom. Only the last row may
/// be partial; its trailing cells are blank and never emitted. Columns that
/// could never hold a letter (key wider than the text) are not materialized,
/// which leaves every read order unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGrid {
    columns: usize,
    rows: usize,
    len: usize,
    cells: Vec<Option<char>>,
}

impl RouteGrid {
    /// Lay `letters` out row by row
    pub(crate) fn from_rows(letters: &[char], columns: usize) -> Self {
        let mut grid = Self::empty(letters.len(), columns);
        for (cell, &letter) in grid.cells.iter_mut().zip(letters) {
            *cell = Some(letter);
        }
        grid
    }

    /// Lay `letters` out in column read order, the inverse of [`Self::read_columns`]
    pub(crate) fn from_columns(letters: &[char], columns: usize) -> Self {
        let mut grid = Self::empty(letters.len(), columns);
        let order: Vec<usize> = grid.column_order().collect();
        for (index, &letter) in order.into_iter().zip(letters) {
            grid.cells[index] = Some(letter);
        }
        grid
    }

    fn empty(len: usize, columns: usize) -> Self {
        let columns = columns.min(len).max(1);
        let rows = len.div_ceil(columns);
        Self {
            columns,
            rows,
            len,
            cells: vec![None; rows * columns],
        }
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of materialized columns
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of letters held
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the grid holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Letter at `row`, `column`, `None` for blank or out-of-range cells
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<char> {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column]
        } else {
            None
        }
    }

    /// Read columns from last to first, each top to bottom, skipping blanks
    #[must_use]
    pub fn read_columns(&self) -> String {
        self.column_order().filter_map(|i| self.cells[i]).collect()
    }

    /// Read rows top to bottom, each left to right, skipping blanks
    #[must_use]
    pub fn read_rows(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Cell indices of the non-blank cells in column read order
    fn column_order(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).rev().flat_map(move |column| {
            (0..self.rows)
                .map(move |row| row * self.columns + column)
                .filter(move |&index| index < self.len)
        })
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.columns).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
