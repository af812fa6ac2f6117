//! Error and diagnostic system for the maze parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled byte spans pointing into the maze text
//! - Severity levels
//! - A collector for reporting every malformed row at once
//!
//! # Overview
//!
//! A [`Diagnostic`] describes one problem with an optional [`ErrorCode`],
//! one or more source locations, and help text. A failed parse returns a
//! [`ParseError`] wrapping all diagnostics found.
//!
//! # Example
//!
//! ```
//! # use mopsolver_parser::error::{Diagnostic, ErrorCode};
//! # use mopsolver_parser::Span;
//!
//! let diag = Diagnostic::error("row 2 has 5 bytes, expected 6")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(6..11), "this row")
//!     .with_secondary_label(Span::new(0..6), "first row sets the width")
//!     .with_help("every row needs the same number of cells");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
