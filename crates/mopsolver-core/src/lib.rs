//! mopsolver Core Types
//!
//! This crate provides the data model shared by the maze parser and the
//! shortest-path engine:
//!
//! - **Grid**: A rectangular wall/open occupancy grid ([`grid::Grid`])
//! - **Positions**: Cell coordinates and the four movement directions
//!   ([`position`] module)

pub mod grid;
pub mod position;
