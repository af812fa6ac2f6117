//! Cell coordinates and movement directions.
//!
//! A [`Position`] addresses one cell of a grid by row and column. Movement
//! is restricted to the four orthogonal [`Direction`]s; there is no diagonal
//! movement.

use std::fmt;

/// One of the four orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Column + 1.
    East,
    /// Row + 1.
    South,
    /// Column - 1.
    West,
    /// Row - 1.
    North,
}

impl Direction {
    /// All directions in search order: East, South, West, North.
    ///
    /// Breadth-first search explores neighbours in exactly this order, which
    /// keeps tie-breaking between equally short paths deterministic.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Row and column deltas for one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }
}

/// A cell coordinate inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left cell.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if this position lies inside a `rows × cols` grid.
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Returns the neighbouring position in `direction`, or `None` if the
    /// step would leave a `rows × cols` grid.
    ///
    /// # Example
    ///
    /// ```
    /// # use mopsolver_core::position::{Direction, Position};
    /// let pos = Position::new(0, 2);
    /// assert_eq!(pos.step(Direction::South, 3, 3), Some(Position::new(1, 2)));
    /// assert_eq!(pos.step(Direction::East, 3, 3), None);
    /// assert_eq!(pos.step(Direction::North, 3, 3), None);
    /// ```
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Position::new(row, col);
        next.is_within(rows, cols).then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
