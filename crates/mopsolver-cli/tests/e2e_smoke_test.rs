use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use mopsolver_cli::Args;

const MAZES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../mazes");

/// Collects all .txt files from a directory
fn collect_maze_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Writes a configuration file with the default glyphs into `dir`, so runs
/// never pick up a config from the working or user directories.
fn default_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "[render]\nwall = \"#\"\nopen = \".\"\nvertical_border = \"|\"\nhorizontal_border = \"-\"\n",
    )
    .expect("Failed to write config");
    path
}

fn args_for(input: &Path, output: &Path, config: &Path) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: Some(output.to_string_lossy().to_string()),
        border: true,
        steps: true,
        matrix: true,
        config: Some(config.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_mazes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = default_config(temp_dir.path());

    let valid_mazes = collect_maze_files(PathBuf::from(MAZES_DIR));

    assert!(!valid_mazes.is_empty(), "No valid mazes found in mazes/");

    let mut failed_mazes = Vec::new();

    for maze_path in &valid_mazes {
        let output_path = temp_dir
            .path()
            .join(maze_path.file_name().expect("maze file has a name"));

        if let Err(e) = mopsolver_cli::run(&args_for(maze_path, &output_path, &config)) {
            failed_mazes.push((maze_path.clone(), e));
        }
    }

    if !failed_mazes.is_empty() {
        eprintln!("\nValid mazes that failed:");
        for (path, err) in &failed_mazes {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid maze(s) failed unexpectedly", failed_mazes.len());
    }
}

#[test]
fn e2e_smoke_test_error_mazes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = default_config(temp_dir.path());

    let error_mazes = collect_maze_files(Path::new(MAZES_DIR).join("errors"));

    assert!(
        !error_mazes.is_empty(),
        "No error mazes found in mazes/errors/"
    );

    let mut unexpected_successes = Vec::new();

    for maze_path in &error_mazes {
        let output_path = temp_dir
            .path()
            .join(maze_path.file_name().expect("maze file has a name"));

        if mopsolver_cli::run(&args_for(maze_path, &output_path, &config)).is_ok() {
            unexpected_successes.push(maze_path.clone());
        }
    }

    if !unexpected_successes.is_empty() {
        eprintln!("\nError mazes that unexpectedly succeeded:");
        for path in &unexpected_successes {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error maze(s) succeeded unexpectedly",
            unexpected_successes.len()
        );
    }
}

#[test]
fn e2e_expected_step_counts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = default_config(temp_dir.path());

    let cases = [
        ("three_by_three.txt", "Solution in 5 steps."),
        ("trailing_spaces.txt", "Solution in 5 steps."),
        ("single_cell.txt", "Solution in 1 steps."),
        ("unreachable.txt", "No solution."),
        ("walled_start.txt", "No solution."),
        ("winding.txt", "Solution in 14 steps."),
        ("no_final_newline.txt", "Solution in 7 steps."),
    ];

    for (name, expected) in cases {
        let input = Path::new(MAZES_DIR).join(name);
        let output = temp_dir.path().join(name);
        let args = Args {
            steps: true,
            border: false,
            matrix: false,
            ..args_for(&input, &output, &config)
        };

        mopsolver_cli::run(&args).unwrap_or_else(|e| panic!("{name} failed: {e}"));

        let text = fs::read_to_string(&output).expect("output written");
        assert_eq!(text.trim_end(), expected, "unexpected result for {name}");
    }
}
