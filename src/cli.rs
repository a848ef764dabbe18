//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::error::AggregateError;
use crate::report::SummaryFormat;
use clap::Parser;
use std::path::PathBuf;

/// vcplot - vertex-cover benchmark log to gnuplot tables
///
/// Reads a log written by the CNF-SAT and approximation vertex-cover
/// solvers, and appends `SIZE MEAN STDDEV` to one gnuplot table per
/// measurement series.
///
/// Examples:
///   vcplot 5 vc_output.log
///   vcplot 10 runs/v10.log --output-dir plots
///   vcplot 15 runs/v15.log --dry-run --format json
///   vcplot --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Problem size (number of vertices) the log was produced for
    #[arg(value_name = "PROBLEM_SIZE", required_unless_present = "init_config")]
    pub problem_size: Option<u64>,

    /// Path to the solver log
    #[arg(value_name = "LOG_PATH", required_unless_present = "init_config")]
    pub log_path: Option<PathBuf>,

    /// Directory holding the gnuplot tables
    ///
    /// Overrides the config file. Defaults to the current directory.
    #[arg(short, long, value_name = "DIR", env = "VCPLOT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .vcplot.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Parse and aggregate, but do not touch any table
    #[arg(long)]
    pub dry_run: bool,

    /// Format of the summary printed to stdout (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: SummaryFormat,

    /// Generate a default .vcplot.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    ///
    /// Presence of the positionals is enforced by clap.
    pub fn validate(&self) -> Result<(), AggregateError> {
        if self.init_config {
            return Ok(());
        }

        if self.problem_size == Some(0) {
            return Err(AggregateError::Argument(
                "problem size must be a positive integer".to_string(),
            ));
        }

        if self.verbose && self.quiet {
            return Err(AggregateError::Argument(
                "cannot use both --verbose and --quiet".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `config_verbose` is the `[general] verbose` setting; `--quiet` wins over it.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_args() -> Args {
        Args {
            problem_size: Some(5),
            log_path: Some(PathBuf::from("vc_output.log")),
            output_dir: None,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            format: SummaryFormat::Text,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_positionals() {
        let args = Args::try_parse_from(["vcplot", "12", "runs/v12.log"]).unwrap();
        assert_eq!(args.problem_size, Some(12));
        assert_eq!(args.log_path, Some(PathBuf::from("runs/v12.log")));
        assert_eq!(args.format, SummaryFormat::Text);
    }

    #[test]
    fn test_non_integer_size_rejected() {
        assert!(Args::try_parse_from(["vcplot", "five", "a.log"]).is_err());
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(Args::try_parse_from(["vcplot"]).is_err());
        assert!(Args::try_parse_from(["vcplot", "--dry-run"]).is_err());
    }

    #[test]
    fn test_missing_log_path_rejected() {
        assert!(Args::try_parse_from(["vcplot", "5"]).is_err());
    }

    #[test]
    fn test_init_config_needs_no_positionals() {
        let args = Args::try_parse_from(["vcplot", "--init-config"]).unwrap();
        assert!(args.init_config);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_size() {
        let mut args = make_args();
        args.problem_size = Some(0);
        assert!(matches!(args.validate(), Err(AggregateError::Argument(_))));
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(false), tracing::Level::INFO);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }
}
