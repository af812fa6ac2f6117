//! Collector for accumulating diagnostics while checking a maze.
//!
//! The [`DiagnosticCollector`] lets the row checker report every malformed
//! row instead of stopping at the first one.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a parse.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if at least one error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise every warning is logged and `Ok(())` is returned.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors() {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            warn!(help:? = diagnostic.help(); "{diagnostic}");
        }
        Ok(())
    }
}
