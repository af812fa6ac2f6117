//! Breadth-first shortest-path search.
//!
//! The search starts at the top-left cell with a step count of 1 and
//! expands neighbours East, South, West, North. A cell is marked visited
//! when it is enqueued, so no cell enters the frontier twice and the first
//! time the goal leaves the queue its step count is minimal.
//!
//! A result of 0 steps means the goal cannot be reached. Every reachable
//! goal is at least 1 step away because entering the start cell counts.

use std::fmt;

use log::{debug, trace};

use mopsolver_core::{
    grid::Grid,
    position::{Direction, Position},
};

use crate::frontier::FrontierQueue;

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries inserted into the frontier, start cell included.
    pub enqueued: usize,
    /// Entries removed from the frontier.
    pub dequeued: usize,
}

/// Outcome of a shortest-path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    steps: usize,
    stats: SearchStats,
}

impl Solution {
    /// Length of the shortest path in steps, or 0 if there is none.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` if the goal was reached.
    pub fn is_solved(&self) -> bool {
        self.steps > 0
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            write!(f, "Solution in {} steps.", self.steps)
        } else {
            write!(f, "No solution.")
        }
    }
}

/// Per-run record of which cells have entered the frontier.
struct VisitedMap {
    cols: usize,
    cells: Vec<bool>,
}

impl VisitedMap {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Marks `pos` as visited. Returns `false` if it already was.
    fn mark(&mut self, pos: Position) -> bool {
        let cell = &mut self.cells[pos.row() * self.cols + pos.col()];
        !std::mem::replace(cell, true)
    }
}

/// Finds the shortest path from the top-left to the bottom-right cell.
///
/// # Example
///
/// ```
/// # use mopsolver::solve::solve;
/// # use mopsolver_core::grid::Grid;
/// let grid = Grid::from_rows([
///     [false, false, false],
///     [true, true, false],
///     [false, false, false],
/// ])
/// .unwrap();
///
/// assert_eq!(solve(&grid).steps(), 5);
/// ```
pub fn solve(grid: &Grid) -> Solution {
    solve_between(grid, grid.start(), grid.goal())
}

/// Shortest path length from the top-left to the bottom-right cell, 0 if
/// the goal is unreachable.
pub fn shortest_path_len(grid: &Grid) -> usize {
    solve(grid).steps()
}

/// Finds the shortest path between two arbitrary cells.
///
/// Endpoints that are walls or lie outside the grid are unreachable and
/// yield 0 steps without any search.
pub fn solve_between(grid: &Grid, start: Position, goal: Position) -> Solution {
    if grid.is_wall(start) || grid.is_wall(goal) {
        debug!(start:% = start, goal:% = goal; "Endpoint is a wall, skipping search");
        return Solution {
            steps: 0,
            stats: SearchStats::default(),
        };
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let mut visited = VisitedMap::new(rows, cols);
    let mut queue = FrontierQueue::with_capacity(grid.open_count());

    visited.mark(start);
    queue.insert(start.row(), start.col(), 1);

    let mut steps = 0;
    let mut dequeued = 0;

    while !queue.is_empty() {
        let entry = queue.remove();
        dequeued += 1;

        let current = entry.position();
        if current == goal {
            steps = entry.steps();
            break;
        }

        for direction in Direction::ALL {
            let Some(next) = current.step(direction, rows, cols) else {
                continue;
            };
            if grid.is_wall(next) || !visited.mark(next) {
                continue;
            }
            trace!(from:% = current, to:% = next, steps = entry.steps() + 1; "Enqueue");
            queue.insert(next.row(), next.col(), entry.steps() + 1);
        }
    }

    let stats = SearchStats {
        enqueued: queue.inserted(),
        dequeued,
    };
    queue.clear();

    debug!(steps, enqueued = stats.enqueued, dequeued = stats.dequeued; "Search finished");
    Solution { steps, stats }
}
