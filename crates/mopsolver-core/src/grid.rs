//! The maze occupancy grid.
//!
//! A [`Grid`] is a fixed `rows × cols` array of booleans where `true` marks a
//! wall and `false` an open cell. Cells are stored in a single row-major
//! buffer; the dimensions are fixed at construction and the grid is never
//! mutated afterwards.
//!
//! # Example
//!
//! ```
//! # use mopsolver_core::{grid::Grid, position::Position};
//! let grid = Grid::from_rows([
//!     [false, false],
//!     [true, false],
//! ])
//! .unwrap();
//!
//! assert_eq!(grid.rows(), 2);
//! assert!(grid.is_wall(Position::new(1, 0)));
//! assert!(grid.is_open(Position::new(1, 1)));
//! ```

use thiserror::Error;

use crate::position::Position;

/// Errors raised when grid dimensions and cell data disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("expected {expected} cells for a {rows}x{cols} grid, got {actual}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular wall/open grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if either dimension is zero or `cells` does not
    /// hold exactly `rows * cols` entries.
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }

        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid from nested rows.
    ///
    /// The column count is taken from the first row; every other row must
    /// match it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] for a row of the wrong width and
    /// [`GridError::EmptyDimension`] if there are no rows or no columns.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = bool>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line);
            let width = cells.len() - before;

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        actual: width,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        Self::new(row_count, cols.unwrap_or(0), cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The top-left cell, where every search starts.
    pub fn start(&self) -> Position {
        Position::origin()
    }

    /// The bottom-right cell, where every search ends.
    pub fn goal(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.rows, self.cols)
    }

    /// Row-major buffer index of `pos`, or `None` if it is out of bounds.
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }

    /// Returns the cell at `pos` (`true` = wall), or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Returns `true` if `pos` is a wall. Positions outside the grid count as
    /// walls.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.get(pos).unwrap_or(true)
    }

    /// Returns `true` if `pos` is an open cell inside the grid.
    pub fn is_open(&self, pos: Position) -> bool {
        !self.is_wall(pos)
    }

    /// Returns row `row` as a slice, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates over the rows from top to bottom.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|wall| !**wall).count()
    }
}
