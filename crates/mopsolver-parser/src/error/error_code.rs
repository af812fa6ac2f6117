//! Error codes for the maze diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Input errors (the text cannot be a maze at all)
//! - `E1xx` - Layout errors (rows do not follow the token grammar)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Input Errors (E0xx)
    // =========================================================================
    /// Empty maze.
    ///
    /// The text is empty or its first line holds no cell glyphs.
    E001,

    /// Non-ASCII character.
    ///
    /// Cells are addressed by byte offset, so every glyph must be one byte.
    E002,

    // =========================================================================
    // Layout Errors (E1xx)
    // =========================================================================
    /// Row width mismatch.
    ///
    /// A row does not have the byte length implied by the first row.
    E100,

    /// Missing separator.
    ///
    /// Cell glyphs must be separated by exactly one space.
    E101,

    /// Missing glyph.
    ///
    /// A space or line break appears where a cell glyph belongs.
    E102,

    /// Inconsistent trailing space.
    ///
    /// Either every row ends with a space before its line break or none
    /// does; the first row decides.
    E103,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "empty maze",
            ErrorCode::E002 => "non-ASCII character",
            ErrorCode::E100 => "row width mismatch",
            ErrorCode::E101 => "missing separator",
            ErrorCode::E102 => "missing glyph",
            ErrorCode::E103 => "inconsistent trailing space",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E103.to_string(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "empty maze");
        assert_eq!(ErrorCode::E100.description(), "row width mismatch");
        assert_eq!(
            ErrorCode::E103.description(),
            "inconsistent trailing space"
        );
    }
}
