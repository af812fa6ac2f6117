//! # mopsolver Parser
//!
//! Parser for the maze text format: rows of single-character cell glyphs
//! separated by spaces, `0` for an open cell and anything else for a wall.
//!
//! ## Usage
//!
//! ```
//! # use mopsolver_parser::{parse, error::ParseError};
//! # use mopsolver_core::position::Position;
//!
//! fn main() -> Result<(), ParseError> {
//!     let grid = parse("0 0 0\n1 1 0\n0 0 0\n")?;
//!
//!     assert_eq!((grid.rows(), grid.cols()), (3, 3));
//!     assert!(grid.is_wall(Position::new(1, 0)));
//!     Ok(())
//! }
//! ```

pub mod error;

mod layout;
mod span;

pub use layout::{Layout, OPEN_GLYPH, WALL_GLYPH};
pub use span::Span;

use std::borrow::Cow;

use log::{debug, info};

use mopsolver_core::grid::Grid;

use error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Parse maze text into a [`Grid`].
///
/// The pipeline is:
///
/// 1. **Reject** empty or non-ASCII text
/// 2. **Detect** the column count and trailing-space form from the first line
/// 3. **Check** every row against that layout, collecting all problems
/// 4. **Extract** the cells by byte offset
///
/// A final line without its `\n` is accepted.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per problem found. See
/// [`ErrorCode`] for the possible codes.
pub fn parse(source: &str) -> Result<Grid, ParseError> {
    if source.is_empty() {
        return Err(Diagnostic::error("maze is empty")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..0), "no input")
            .into());
    }

    if let Some((offset, ch)) = source.char_indices().find(|(_, ch)| !ch.is_ascii()) {
        return Err(Diagnostic::error(format!("non-ASCII character `{ch}` in maze"))
            .with_code(ErrorCode::E002)
            .with_label(Span::new(offset..offset + ch.len_utf8()), "not ASCII")
            .with_help("use `0` for open cells and `1` for walls")
            .into());
    }

    let text = terminated(source);
    let layout = Layout::detect(&text)?;

    let mut collector = DiagnosticCollector::new();
    layout.check_rows(&text, &mut collector);
    collector.finish()?;

    let rows = layout.rows_in(text.len()).ok_or_else(|| {
        Diagnostic::error(format!(
            "maze is {} bytes long, not a multiple of the {}-byte row stride",
            text.len(),
            layout.stride()
        ))
        .with_code(ErrorCode::E100)
        .with_label(Span::new(0..source.len()), "maze text")
    })?;
    let cols = layout.cols();
    debug!(rows, cols, stride = layout.stride(); "Extracting cells");

    let cells = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| text[layout.cell_offset(row, col)] != OPEN_GLYPH)
        .collect();

    let grid = Grid::new(rows, cols, cells).map_err(|err| Diagnostic::error(err.to_string()))?;
    info!(rows, cols, open_cells = grid.open_count(); "Maze parsed");

    Ok(grid)
}

/// Returns the source bytes, with a `\n` appended if the last line lacks one.
fn terminated(source: &str) -> Cow<'_, [u8]> {
    let bytes = source.as_bytes();
    if bytes.ends_with(b"\n") {
        Cow::Borrowed(bytes)
    } else {
        let mut owned = Vec::with_capacity(bytes.len() + 1);
        owned.extend_from_slice(bytes);
        owned.push(b'\n');
        Cow::Owned(owned)
    }
}
