//! Command-line argument definitions for the mopsolver CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input and output streams, what to
//! print, the configuration file and the logging verbosity.

use clap::Parser;

/// Command-line arguments for the mopsolver maze tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Read the maze from INFILE instead of stdin
    #[arg(short, long, value_name = "INFILE")]
    pub input: Option<String>,

    /// Append output to OUTFILE instead of writing to stdout
    #[arg(short, long, value_name = "OUTFILE")]
    pub output: Option<String>,

    /// Print the maze with borders
    #[arg(short, long)]
    pub border: bool,

    /// Print the number of steps in the shortest solution
    #[arg(short, long)]
    pub steps: bool,

    /// Print the maze matrix after reading it
    #[arg(short, long)]
    pub matrix: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["mopsolver", "-bsm", "-i", "in.txt", "-o", "out.txt"])
            .unwrap();

        assert!(args.border);
        assert!(args.steps);
        assert!(args.matrix);
        assert_eq!(args.input.as_deref(), Some("in.txt"));
        assert_eq!(args.output.as_deref(), Some("out.txt"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["mopsolver"]).unwrap();

        assert!(!args.border && !args.steps && !args.matrix);
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["mopsolver", "-p"]).is_err());
    }
}
