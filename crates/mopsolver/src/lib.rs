//! mopsolver - shortest paths through text-encoded mazes.
//!
//! Parses a maze of space-separated `0`/`1` glyphs into a grid, finds the
//! shortest path from the top-left to the bottom-right cell with
//! breadth-first search, and renders the grid as text.

pub mod config;
pub mod frontier;
pub mod render;
pub mod solve;

mod error;

pub use mopsolver_core::{grid, position};

pub use error::MopsolverError;
pub use solve::{SearchStats, Solution};

use std::io::Write;

use log::{debug, info, trace};

use config::AppConfig;
use grid::Grid;

/// Front end for parsing, solving and rendering mazes.
///
/// # Examples
///
/// ```rust
/// use mopsolver::{MazeSolver, config::AppConfig};
///
/// let solver = MazeSolver::new(AppConfig::default());
///
/// let grid = solver.parse("0 0 0\n1 1 0\n0 0 0\n")
///     .expect("Failed to parse");
///
/// let solution = solver.solve(&grid);
/// assert_eq!(solution.steps(), 5);
///
/// let mut out = Vec::new();
/// solver.render_bordered(&grid, &mut out)
///     .expect("Failed to render");
///
/// // Or use default config
/// let solver = MazeSolver::default();
/// ```
#[derive(Debug, Default)]
pub struct MazeSolver {
    config: AppConfig,
}

impl MazeSolver {
    /// Create a new solver with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse maze text into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`MopsolverError::EmptyMaze`] when the text is empty or its
    /// first line holds no cells, and [`MopsolverError::Parse`] for any
    /// other malformed input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mopsolver::{MazeSolver, MopsolverError};
    ///
    /// let solver = MazeSolver::default();
    /// assert!(matches!(solver.parse(""), Err(MopsolverError::EmptyMaze)));
    /// assert!(matches!(solver.parse("\n"), Err(MopsolverError::EmptyMaze)));
    /// assert!(matches!(solver.parse("0 0\n0\n"), Err(MopsolverError::Parse { .. })));
    /// ```
    pub fn parse(&self, source: &str) -> Result<Grid, MopsolverError> {
        info!(bytes = source.len(); "Parsing maze");
        let grid = mopsolver_parser::parse(source).map_err(|err| {
            if err.is_empty_maze() {
                MopsolverError::EmptyMaze
            } else {
                MopsolverError::new_parse_error(err, source)
            }
        })?;

        debug!(rows = grid.rows(), cols = grid.cols(); "Maze parsed successfully");
        trace!(grid:?; "Parsed grid");

        Ok(grid)
    }

    /// Find the shortest path from the top-left to the bottom-right cell.
    pub fn solve(&self, grid: &Grid) -> Solution {
        let solution = solve::solve(grid);
        info!(
            steps = solution.steps(),
            enqueued = solution.stats().enqueued;
            "Search complete"
        );
        solution
    }

    /// Write the grid with a border using the configured glyphs.
    ///
    /// # Errors
    ///
    /// Returns [`MopsolverError::Io`] if writing to `sink` fails.
    pub fn render_bordered(&self, grid: &Grid, sink: &mut impl Write) -> Result<(), MopsolverError> {
        render::write_bordered(grid, self.config.render(), sink)?;
        Ok(())
    }

    /// Write the grid in its canonical `0`/`1` text form.
    ///
    /// # Errors
    ///
    /// Returns [`MopsolverError::Io`] if writing to `sink` fails.
    pub fn render_matrix(&self, grid: &Grid, sink: &mut impl Write) -> Result<(), MopsolverError> {
        render::write_matrix(grid, sink)?;
        Ok(())
    }
}
