//! Configuration types for maze rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderStyle`] - Glyphs used when printing a maze.
//!
//! # Example
//!
//! ```
//! # use mopsolver::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().wall(), '#');
//! assert!(config.render().validate().is_ok());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rendering section.
    #[serde(default)]
    render: RenderStyle,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given rendering style.
    pub fn new(render: RenderStyle) -> Self {
        Self { render }
    }

    /// Returns the rendering style.
    pub fn render(&self) -> &RenderStyle {
        &self.render
    }
}

/// Glyphs used by the bordered maze printer.
///
/// ```toml
/// [render]
/// wall = "#"
/// open = "."
/// vertical_border = "|"
/// horizontal_border = "-"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    wall: char,
    open: char,
    vertical_border: char,
    horizontal_border: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            wall: '#',
            open: '.',
            vertical_border: '|',
            horizontal_border: '-',
        }
    }
}

impl RenderStyle {
    /// Creates a style from explicit glyphs.
    pub fn new(wall: char, open: char, vertical_border: char, horizontal_border: char) -> Self {
        Self {
            wall,
            open,
            vertical_border,
            horizontal_border,
        }
    }

    /// Glyph printed for a wall cell.
    pub fn wall(&self) -> char {
        self.wall
    }

    /// Glyph printed for an open cell.
    pub fn open(&self) -> char {
        self.open
    }

    /// Glyph for the left and right border.
    pub fn vertical_border(&self) -> char {
        self.vertical_border
    }

    /// Glyph for the top and bottom border.
    pub fn horizontal_border(&self) -> char {
        self.horizontal_border
    }

    /// Checks that every glyph prints on a single line and that walls and
    /// open cells look different.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let glyphs = [
            ("wall", self.wall),
            ("open", self.open),
            ("vertical_border", self.vertical_border),
            ("horizontal_border", self.horizontal_border),
        ];

        if let Some((name, glyph)) = glyphs.iter().find(|(_, glyph)| glyph.is_control()) {
            return Err(format!(
                "render.{name} must be a printable character, got {glyph:?}"
            ));
        }

        if self.wall == self.open {
            return Err(format!(
                "render.wall and render.open must differ, both are {:?}",
                self.wall
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = RenderStyle::default();

        assert_eq!(style.wall(), '#');
        assert_eq!(style.open(), '.');
        assert_eq!(style.vertical_border(), '|');
        assert_eq!(style.horizontal_border(), '-');
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig = toml::from_str("[render]\nwall = \"@\"\n").unwrap();

        assert_eq!(config.render().wall(), '@');
        assert_eq!(config.render().open(), '.');
    }

    #[test]
    fn test_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.render(), &RenderStyle::default());
    }

    #[test]
    fn test_deserialize_rejects_multi_char_glyph() {
        let result: Result<AppConfig, _> = toml::from_str("[render]\nopen = \"..\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_control_character() {
        let style = RenderStyle::new('#', '\n', '|', '-');

        let err = style.validate().unwrap_err();
        assert_eq!(err, "render.open must be a printable character, got '\\n'");
    }

    #[test]
    fn test_validate_same_wall_and_open() {
        let style = RenderStyle::new('x', 'x', '|', '-');
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_space_is_a_valid_open_glyph() {
        let style = RenderStyle::new('#', ' ', '|', '-');
        assert!(style.validate().is_ok());
    }
}
