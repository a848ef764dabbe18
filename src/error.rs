//! Error types for log aggregation.
//!
//! Every failure is fatal for the run; these variants exist so the
//! top level can report which stage stopped it.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal condition raised while turning a log into table records.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Invalid command-line input that clap itself cannot reject.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Reading the log or appending to a table failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recognized label was followed by a value of the wrong type.
    #[error("line {line}: cannot parse {raw:?} as {expected} for {label}")]
    Parse {
        line: usize,
        label: &'static str,
        expected: &'static str,
        raw: String,
    },

    /// No line in the log matched the series label.
    #[error("no samples found for {0}")]
    EmptySeries(&'static str),

    /// Sample standard deviation needs at least two points.
    #[error("{label} has {count} sample, at least 2 are required for a standard deviation")]
    InsufficientSamples { label: &'static str, count: usize },

    /// A statistic is too large to be written as a 64-bit float.
    #[error("statistics for {0} do not fit in a 64-bit float")]
    Overflow(&'static str),
}

impl AggregateError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AggregateError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
