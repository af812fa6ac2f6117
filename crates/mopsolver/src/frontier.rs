//! FIFO frontier queue for breadth-first search.
//!
//! The frontier holds cells that have been discovered but not yet expanded.
//! Entries leave the queue in exactly the order they were inserted.
//!
//! # Example
//!
//! ```
//! # use mopsolver::frontier::FrontierQueue;
//! let mut queue = FrontierQueue::new();
//! queue.insert(0, 0, 1);
//! queue.insert(0, 1, 2);
//!
//! assert_eq!(queue.remove().steps(), 1);
//! assert_eq!(queue.remove().steps(), 2);
//! assert!(queue.is_empty());
//! ```

use std::collections::VecDeque;

use mopsolver_core::position::Position;

/// A discovered cell together with the number of steps needed to reach it.
///
/// Entering the start cell counts as step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    row: usize,
    col: usize,
    steps: usize,
}

impl FrontierEntry {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Insertion-ordered queue of [`FrontierEntry`] values.
///
/// Dropping the queue releases every entry still queued.
#[derive(Debug, Default)]
pub struct FrontierQueue {
    entries: VecDeque<FrontierEntry>,
    inserted: usize,
}

impl FrontierQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            inserted: 0,
        }
    }

    /// Appends an entry at the back of the queue.
    pub fn insert(&mut self, row: usize, col: usize, steps: usize) {
        self.entries.push_back(FrontierEntry { row, col, steps });
        self.inserted += 1;
    }

    /// Removes and returns the entry at the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`is_empty`](Self::is_empty)
    /// first, or use [`try_remove`](Self::try_remove).
    pub fn remove(&mut self) -> FrontierEntry {
        match self.entries.pop_front() {
            Some(entry) => entry,
            None => panic!("remove called on an empty frontier queue"),
        }
    }

    /// Removes and returns the front entry, or `None` if the queue is empty.
    pub fn try_remove(&mut self) -> Option<FrontierEntry> {
        self.entries.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently queued.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of insertions over the lifetime of the queue.
    ///
    /// Unaffected by [`remove`](Self::remove) and [`clear`](Self::clear).
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Discards every queued entry. Clearing an empty queue does nothing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
