//! Error types for mopsolver operations.
//!
//! This module provides the main error type [`MopsolverError`] which wraps
//! the error conditions that can occur while loading and solving a maze.

use std::io;

use thiserror::Error;

use mopsolver_parser::error::ParseError;

/// The main error type for mopsolver operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the maze text next to the parser diagnostics so
/// that their byte spans can be shown as source snippets.
#[derive(Debug, Error)]
pub enum MopsolverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Maze input is empty")]
    EmptyMaze,

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MopsolverError {
    /// Create a new `Parse` error with the associated maze text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
