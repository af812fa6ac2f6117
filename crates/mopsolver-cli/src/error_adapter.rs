//! Error adapter for converting MopsolverError to miette diagnostics.
//!
//! This module bridges the library's error types and miette's rich
//! diagnostic formatting used by the CLI.
//!
//! # Multi-Error Support
//!
//! A [`mopsolver_parser::error::ParseError`] carries one diagnostic per
//! malformed row; each diagnostic is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use mopsolver::MopsolverError;
use mopsolver_parser::{Span, error::Diagnostic};

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Maze text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span(), self.src.len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`MopsolverError`] variants.
///
/// This adapter handles errors without source locations, such as I/O
/// errors, empty input and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a MopsolverError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MopsolverError::Io(_) => "mopsolver::io",
            MopsolverError::EmptyMaze => "mopsolver::empty_maze",
            MopsolverError::Parse { .. } => return None,
            MopsolverError::Config(_) => "mopsolver::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            MopsolverError::EmptyMaze => Some(Box::new(
                "pass a maze file with --input or pipe one on stdin",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A boxed miette diagnostic ready for rendering.
///
/// Parser diagnostics carry source snippets; other errors are plain
/// messages with a code and optional help.
pub type Reportable<'a> = Box<dyn MietteDiagnostic + 'a>;

/// Convert a parser [`Span`] to a miette [`SourceSpan`], clamped to the
/// source length.
///
/// Spans may reach one byte past the text when the parser supplied the
/// missing final line break itself.
fn span_to_miette(span: Span, src_len: usize) -> SourceSpan {
    let start = span.start().min(src_len);
    let end = span.end().min(src_len);
    SourceSpan::new(start.into(), end - start)
}

/// Convert a [`MopsolverError`] into a list of reportable errors.
///
/// A parse error yields one report per diagnostic; any other error yields
/// a single report.
pub fn to_reportables(err: &MopsolverError) -> Vec<Reportable<'_>> {
    match err {
        MopsolverError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Box::new(DiagnosticAdapter::new(d, src)) as Reportable<'_>)
            .collect(),
        _ => vec![Box::new(ErrorAdapter(err)) as Reportable<'_>],
    }
}
