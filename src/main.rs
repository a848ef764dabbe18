//! vcplot - vertex-cover benchmark log aggregator
//!
//! Reads the log written by the vertex-cover solver suite (exact CNF-SAT
//! solver plus two approximations), computes mean and sample standard
//! deviation of every timing and ratio series, and appends one
//! `SIZE MEAN STDDEV` line per series to gnuplot data tables.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any failure (arguments, unreadable log, parse error, missing samples, write error)
//!   2 - Command-line syntax error reported by clap

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod parser;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use error::AggregateError;
use models::AggregateRecord;
use report::OutputTables;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("vcplot v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let (Some(problem_size), Some(log_path)) = (args.problem_size, args.log_path.as_deref())
    else {
        unreachable!("clap requires PROBLEM_SIZE and LOG_PATH unless --init-config is given");
    };

    let records = match run_aggregation(problem_size, log_path, args.dry_run, &config) {
        Ok(records) => records,
        Err(e) => {
            error!("Aggregation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let summary = report::generate_summary(&records, args.format)?;
    print!("{}", summary);

    Ok(())
}

/// Handle --init-config: generate a default .vcplot.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", DEFAULT_CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml()?;
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// `RUST_LOG` directives, when set, take precedence over the flags.
fn init_logging(args: &Args, config: &Config) {
    let level = args.log_level(config.general.verbose);
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = log_filter(level, &directives);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

/// Build the log filter: `directives` on top of a default `level`.
fn log_filter(level: tracing::Level, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(directives)
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is set up, so problems with the default file are
/// reported on stderr directly.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("Warning: ignoring {}: {:#}", DEFAULT_CONFIG_FILE, e);
            Ok(Config::default())
        }
    }
}

/// Parse the log, aggregate every series and append to the tables.
///
/// All records are computed before any table is opened, so a parse or
/// aggregation failure leaves every table untouched.
fn run_aggregation(
    problem_size: u64,
    log_path: &Path,
    dry_run: bool,
    config: &Config,
) -> Result<Vec<AggregateRecord>, AggregateError> {
    info!("Reading {} (problem size {})", log_path.display(), problem_size);
    let samples = parser::parse_file(log_path)?;
    debug!(
        "Classified {} samples, skipped {} lines",
        samples.total(),
        samples.skipped
    );

    let records = analysis::aggregate_all(&samples, problem_size)?;

    let tables = OutputTables::from_config(&config.output);
    if dry_run {
        info!("Dry run: no table will be modified");
        for record in &records {
            info!(
                "would append {:?} to {}",
                record.table_line().trim_end(),
                tables.path(record.series).display()
            );
        }
    } else {
        tables.append_all(&records)?;
        info!("Appended {} records", records.len());
    }

    Ok(records)
}
