//! CLI logic for the mopsolver maze tool.
//!
//! This module contains the core CLI logic: reading a maze, printing the
//! requested views of it and reporting the shortest path length.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Read, Write},
};

use log::{debug, info};

use mopsolver::{MazeSolver, MopsolverError, grid::Grid};

/// Run the mopsolver CLI application
///
/// Reads the maze from the input file or stdin, then writes the requested
/// views to the output file (opened for appending) or stdout, in this
/// order: the matrix (`-m`), the bordered maze (`-b`) and the solution
/// (`-s`).
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MopsolverError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Empty or malformed maze input
pub fn run(args: &Args) -> Result<(), MopsolverError> {
    info!(
        input_path:? = args.input,
        output_path:? = args.output;
        "Processing maze"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input
    let source = read_source(args.input.as_deref())?;

    let solver = MazeSolver::new(app_config);
    let grid = solver.parse(&source)?;

    // Write requested views
    let mut sink = open_sink(args.output.as_deref())?;
    write_report(&solver, &grid, args, &mut sink)?;
    sink.flush()?;

    info!("Maze processed successfully");

    Ok(())
}

fn read_source(input: Option<&str>) -> Result<String, MopsolverError> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            debug!("Reading maze from stdin");
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn open_sink(output: Option<&str>) -> Result<Box<dyn Write>, MopsolverError> {
    match output {
        Some(path) => {
            let file = OpenOptions::new().append(true).create(true).open(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_report(
    solver: &MazeSolver,
    grid: &Grid,
    args: &Args,
    sink: &mut impl Write,
) -> Result<(), MopsolverError> {
    if args.matrix {
        solver.render_matrix(grid, sink)?;
    }

    if args.border {
        solver.render_bordered(grid, sink)?;
    }

    let solution = solver.solve(grid);
    if args.steps {
        writeln!(sink, "{solution}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    const MAZE: &str = "0 0 0\n1 1 0\n0 0 0\n";

    fn report(flags: &[&str], source: &str) -> String {
        let args = Args::try_parse_from(std::iter::once("mopsolver").chain(flags.iter().copied()))
            .unwrap();
        let solver = MazeSolver::default();
        let grid = solver.parse(source).unwrap();

        let mut out = Vec::new();
        write_report(&solver, &grid, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_flags_prints_nothing() {
        assert_eq!(report(&[], MAZE), "");
    }

    #[test]
    fn test_steps() {
        assert_eq!(report(&["-s"], MAZE), "Solution in 5 steps.\n");
        assert_eq!(report(&["-s"], "0 1\n1 0\n"), "No solution.\n");
    }

    #[test]
    fn test_matrix_then_border_then_steps() {
        let expected = [
            "0 0 0",
            "1 1 0",
            "0 0 0",
            "|-------|",
            "  . . . |",
            "| # # . |",
            "| . . .  ",
            "|-------|",
            "Solution in 5 steps.",
        ];

        assert_eq!(report(&["-s", "-b", "-m"], MAZE), expected.join("\n") + "\n");
    }

    #[test]
    fn test_matrix_normalizes_trailing_spaces() {
        assert_eq!(report(&["-m"], "0 1 \n0 0 \n"), "0 1\n0 0\n");
    }

    #[test]
    fn test_run_appends_to_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, MAZE).unwrap();
        fs::write(&output, "previous\n").unwrap();

        let args = Args::try_parse_from([
            "mopsolver",
            "-s",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();
        run(&args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "previous\nSolution in 5 steps.\nSolution in 5 steps.\n"
        );
    }

    #[test]
    fn test_run_creates_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        let output = dir.path().join("created.txt");
        fs::write(&input, "0\n").unwrap();

        let args = Args::try_parse_from([
            "mopsolver",
            "-m",
            "-s",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "0\nSolution in 1 steps.\n"
        );
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.txt");

        let args =
            Args::try_parse_from(["mopsolver", "-s", "-i", input.to_str().unwrap()]).unwrap();

        assert!(matches!(run(&args), Err(MopsolverError::Io(_))));
    }

    #[test]
    fn test_run_malformed_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "0 0 0\n0 0\n").unwrap();

        let args = Args::try_parse_from([
            "mopsolver",
            "-s",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert!(matches!(run(&args), Err(MopsolverError::Parse { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_empty_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        let args = Args::try_parse_from(["mopsolver", "-i", input.to_str().unwrap()]).unwrap();

        for source in ["", "\n", " \n"] {
            fs::write(&input, source).unwrap();
            assert!(
                matches!(run(&args), Err(MopsolverError::EmptyMaze)),
                "{source:?} was not reported as an empty maze"
            );
        }
    }

    #[test]
    fn test_run_with_custom_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        let output = dir.path().join("out.txt");
        let config = dir.path().join("config.toml");
        fs::write(&input, "0 1\n0 0\n").unwrap();
        fs::write(&config, "[render]\nwall = \"X\"\nopen = \" \"\n").unwrap();

        let args = Args::try_parse_from([
            "mopsolver",
            "-b",
            "-c",
            config.to_str().unwrap(),
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "|-----|\n    X |\n|      \n|-----|\n"
        );
    }
}
