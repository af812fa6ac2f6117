//! Text renderers for a parsed maze.
//!
//! - [`write_bordered`] draws the maze inside a border with openings at the
//!   entrance (top-left) and exit (bottom-right).
//! - [`write_matrix`] writes the canonical `0`/`1` text form, which parses
//!   back to the same grid.

use std::io::{self, Write};

use mopsolver_core::grid::Grid;

use crate::config::RenderStyle;

/// Writes `grid` with a border.
///
/// For a 3×3 maze with the default style:
///
/// ```text
/// |-------|
///   . . . |
/// | # # . |
/// | . . .
/// |-------|
/// ```
///
/// # Errors
///
/// Returns any error raised by `sink`.
pub fn write_bordered(grid: &Grid, style: &RenderStyle, sink: &mut impl Write) -> io::Result<()> {
    let border: String = std::iter::once(style.vertical_border())
        .chain(std::iter::repeat_n(
            style.horizontal_border(),
            2 * grid.cols() + 1,
        ))
        .chain(std::iter::once(style.vertical_border()))
        .collect();

    writeln!(sink, "{border}")?;

    let last = grid.rows() - 1;
    for (row, cells) in grid.iter_rows().enumerate() {
        let left = if row == 0 { ' ' } else { style.vertical_border() };
        let right = if row == last {
            ' '
        } else {
            style.vertical_border()
        };

        let mut line = String::with_capacity(2 * cells.len() + 3);
        line.push(left);
        for wall in cells {
            line.push(' ');
            line.push(if *wall { style.wall() } else { style.open() });
        }
        line.push(' ');
        line.push(right);

        writeln!(sink, "{line}")?;
    }

    writeln!(sink, "{border}")
}

/// Writes `grid` as `0`/`1` tokens separated by single spaces, one row per
/// line.
///
/// # Errors
///
/// Returns any error raised by `sink`.
pub fn write_matrix(grid: &Grid, sink: &mut impl Write) -> io::Result<()> {
    for cells in grid.iter_rows() {
        let tokens: Vec<&str> = cells
            .iter()
            .map(|wall| if *wall { "1" } else { "0" })
            .collect();
        writeln!(sink, "{}", tokens.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|row| row.bytes().map(|b| b == b'#'))).unwrap()
    }

    fn bordered(grid: &Grid, style: &RenderStyle) -> String {
        let mut out = Vec::new();
        write_bordered(grid, style, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bordered_three_by_three() {
        let maze = grid(&["...", "##.", "..."]);

        let expected = [
            "|-------|",
            "  . . . |",
            "| # # . |",
            "| . . .  ",
            "|-------|",
        ];
        assert_eq!(
            bordered(&maze, &RenderStyle::default()),
            expected.join("\n") + "\n"
        );
    }

    #[test]
    fn test_bordered_single_cell() {
        let maze = grid(&["."]);

        assert_eq!(
            bordered(&maze, &RenderStyle::default()),
            "|---|\n  .  \n|---|\n"
        );
    }

    #[test]
    fn test_bordered_custom_style() {
        let maze = grid(&[".#", ".."]);
        let style = RenderStyle::new('X', ' ', '!', '=');

        assert_eq!(bordered(&maze, &style), "!=====!\n    X !\n!      \n!=====!\n");
    }

    #[test]
    fn test_bordered_dimensions() {
        let maze = grid(&["..#.", "#...", "...."]);
        let text = bordered(&maze, &RenderStyle::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), maze.rows() + 2);
        assert!(
            lines
                .iter()
                .all(|line| line.chars().count() == 2 * maze.cols() + 3)
        );
    }

    #[test]
    fn test_matrix() {
        let maze = grid(&["..#", "#.."]);

        let mut out = Vec::new();
        write_matrix(&maze, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 0 1\n1 0 0\n");
    }

    #[test]
    fn test_matrix_reparses() {
        let maze = grid(&["..#.", "#..#", "#..."]);

        let mut out = Vec::new();
        write_matrix(&maze, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(mopsolver_parser::parse(&text).unwrap(), maze);
    }
}
