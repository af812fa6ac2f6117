//! Row layout of the maze text format.
//!
//! Each row is a run of single-byte cell glyphs separated by one space and
//! terminated by `\n`. Some producers leave one extra space before every
//! line break. The first line decides which form a document uses, and every
//! other row must then use the same form.
//!
//! ```text
//! without trailing space     with trailing space
//! "0 1 0\n"  stride 6        "0 1 0 \n"  stride 7
//! ```
//!
//! Because every row has the same stride, cell `(r, c)` sits at byte offset
//! `r * 2 * cols + 2 * c + r * trailing`.

use log::debug;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Glyph of an open cell. Any other glyph is a wall.
pub const OPEN_GLYPH: u8 = b'0';

/// Canonical wall glyph.
pub const WALL_GLYPH: u8 = b'1';

const SEPARATOR: u8 = b' ';
const NEWLINE: u8 = b'\n';

/// Encoding parameters inferred from the first line of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    cols: usize,
    trailing_space: bool,
}

impl Layout {
    /// Infers the layout from the first line of `text`.
    ///
    /// The column count is the number of non-space bytes before the first
    /// line break, and a space directly before that line break marks the
    /// trailing-space form.
    ///
    /// `text` must contain at least one `\n`.
    ///
    /// # Errors
    ///
    /// Returns an `E001` diagnostic if the first line holds no glyphs.
    pub fn detect(text: &[u8]) -> Result<Self, Diagnostic> {
        let first_newline = text.iter().position(|b| *b == NEWLINE).unwrap_or(text.len());
        let header = &text[..first_newline];

        let cols = header.iter().filter(|b| **b != SEPARATOR).count();
        if cols == 0 {
            return Err(Diagnostic::error("maze has no cells on its first line")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(0..first_newline + 1), "empty first row")
                .with_help("the first line must list the cells of the top row"));
        }

        let trailing_space = header.last() == Some(&SEPARATOR);
        debug!(cols, trailing_space; "Detected maze layout");

        Ok(Self {
            cols,
            trailing_space,
        })
    }

    /// Number of cells per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether every row carries a space before its line break.
    pub fn trailing_space(&self) -> bool {
        self.trailing_space
    }

    /// Bytes per encoded row, line break included.
    pub fn stride(&self) -> usize {
        2 * self.cols + usize::from(self.trailing_space)
    }

    /// Number of rows in a buffer of `len` bytes, or `None` if `len` is not
    /// a positive multiple of the stride.
    pub fn rows_in(&self, len: usize) -> Option<usize> {
        let stride = self.stride();
        (len > 0 && len % stride == 0).then(|| len / stride)
    }

    /// Byte offset of cell `(row, col)` in the flat text buffer.
    pub fn cell_offset(&self, row: usize, col: usize) -> usize {
        row * 2 * self.cols + 2 * col + row * usize::from(self.trailing_space)
    }

    /// Checks every row of `text` against this layout, emitting one
    /// diagnostic per problem found.
    ///
    /// `text` must end with `\n`.
    pub(crate) fn check_rows(&self, text: &[u8], collector: &mut DiagnosticCollector) {
        let first_row = Span::new(0..self.stride());
        let mut offset = 0;
        let mut warned_glyph = false;

        for (row, line) in text.split_inclusive(|b| *b == NEWLINE).enumerate() {
            let checker = RowChecker {
                layout: self,
                row,
                offset,
                line,
                first_row,
            };
            if checker.check_width(collector) {
                checker.check_tokens(collector, &mut warned_glyph);
            }
            offset += line.len();
        }
    }
}

/// Validation of a single encoded row.
struct RowChecker<'a> {
    layout: &'a Layout,
    row: usize,
    offset: usize,
    line: &'a [u8],
    first_row: Span,
}

impl RowChecker<'_> {
    /// Checks the byte length of the row. Returns `true` if the row has the
    /// expected stride and its tokens can be inspected.
    fn check_width(&self, collector: &mut DiagnosticCollector) -> bool {
        let stride = self.layout.stride();
        let len = self.line.len();
        if len == stride {
            return true;
        }

        // Same cell count, but the other trailing-space form.
        let body = self.line.strip_suffix(&[NEWLINE]).unwrap_or(self.line);
        let other_form = if self.layout.trailing_space {
            len + 1 == stride && body.last() != Some(&SEPARATOR)
        } else {
            len == stride + 1 && body.last() == Some(&SEPARATOR)
        };

        if other_form {
            let (message, label) = if self.layout.trailing_space {
                (
                    format!("row {} has no trailing space", self.row + 1),
                    "space expected before the line break",
                )
            } else {
                (
                    format!("row {} has a trailing space", self.row + 1),
                    "unexpected space",
                )
            };
            let at = self.offset + body.len().saturating_sub(1);
            collector.emit(
                Diagnostic::error(message)
                    .with_code(ErrorCode::E103)
                    .with_label(Span::at(at), label)
                    .with_secondary_label(self.first_row, "first row sets the line form")
                    .with_help("either every row ends with a space or none does"),
            );
        } else {
            collector.emit(
                Diagnostic::error(format!(
                    "row {} is {} bytes long, expected {}",
                    self.row + 1,
                    len,
                    stride
                ))
                .with_code(ErrorCode::E100)
                .with_label(self.span(0..len), "this row")
                .with_secondary_label(
                    self.first_row,
                    format!("first row has {} cells", self.layout.cols),
                )
                .with_help(format!(
                    "every row needs {} cells separated by single spaces",
                    self.layout.cols
                )),
            );
        }
        false
    }

    /// Checks glyph and separator positions of a row of the right width.
    fn check_tokens(&self, collector: &mut DiagnosticCollector, warned_glyph: &mut bool) {
        let cols = self.layout.cols;

        for col in 0..cols {
            let at = 2 * col;
            let glyph = self.line[at];

            if glyph == SEPARATOR || glyph == NEWLINE {
                collector.emit(
                    Diagnostic::error(format!(
                        "missing cell at row {}, column {}",
                        self.row + 1,
                        col + 1
                    ))
                    .with_code(ErrorCode::E102)
                    .with_label(self.span(at..at + 1), "cell glyph expected here")
                    .with_help("use `0` for an open cell and `1` for a wall"),
                );
            } else if glyph != OPEN_GLYPH && glyph != WALL_GLYPH && !*warned_glyph {
                *warned_glyph = true;
                collector.emit(
                    Diagnostic::warning(format!(
                        "non-canonical wall glyph `{}` at row {}, column {}",
                        char::from(glyph),
                        self.row + 1,
                        col + 1
                    ))
                    .with_label(self.span(at..at + 1), "treated as a wall")
                    .with_help("use `1` for walls"),
                );
            }

            let is_last = col + 1 == cols;
            if is_last && !self.layout.trailing_space {
                continue;
            }

            let sep = self.line[at + 1];
            if sep != SEPARATOR {
                let message = if is_last {
                    format!("row {} has no trailing space", self.row + 1)
                } else {
                    format!(
                        "expected a space after row {}, column {}",
                        self.row + 1,
                        col + 1
                    )
                };
                let code = if is_last {
                    ErrorCode::E103
                } else {
                    ErrorCode::E101
                };
                collector.emit(
                    Diagnostic::error(message)
                        .with_code(code)
                        .with_label(self.span(at + 1..at + 2), "not a space")
                        .with_help("separate cell glyphs with a single space"),
                );
            }
        }
    }

    /// Span of `range` relative to the start of this row.
    fn span(&self, range: std::ops::Range<usize>) -> Span {
        Span::new(self.offset + range.start..self.offset + range.end)
    }
}
