//! Data models for benchmark log aggregation.
//!
//! The five measurement series written by the vertex-cover solver suite,
//! and the per-run record appended to each gnuplot table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the value after a label is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Signed integer (microsecond timings).
    Integer,
    /// Floating-point number (approximation ratios).
    Float,
}

impl SampleKind {
    /// Name used in parse diagnostics.
    pub fn expected(&self) -> &'static str {
        match self {
            SampleKind::Integer => "integer",
            SampleKind::Float => "float",
        }
    }
}

/// One of the five measurement streams found in a solver log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    /// Exact CNF-SAT solver running time
    CnfSatTime,
    /// First approximation running time
    Approx1Time,
    /// Second approximation running time
    Approx2Time,
    /// First approximation ratio against the exact cover
    Approx1Ratio,
    /// Second approximation ratio against the exact cover
    Approx2Ratio,
}

impl Series {
    /// All series, in the order their tables are written.
    pub const ALL: [Series; 5] = [
        Series::CnfSatTime,
        Series::Approx1Time,
        Series::Approx2Time,
        Series::Approx1Ratio,
        Series::Approx2Ratio,
    ];

    /// The label prefix that identifies a log line for this series.
    pub fn label(&self) -> &'static str {
        match self {
            Series::CnfSatTime => "CNF-SAT-VC(microsecond)",
            Series::Approx1Time => "APPROX-VC-1(microsecond)",
            Series::Approx2Time => "APPROX-VC-2(microsecond)",
            Series::Approx1Ratio => "APPROX-VC-1(ratio)",
            Series::Approx2Ratio => "APPROX-VC-2(ratio)",
        }
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            Series::CnfSatTime | Series::Approx1Time | Series::Approx2Time => SampleKind::Integer,
            Series::Approx1Ratio | Series::Approx2Ratio => SampleKind::Float,
        }
    }

    /// Default gnuplot table file name.
    pub fn default_table(&self) -> &'static str {
        match self {
            Series::CnfSatTime => "gnuplot_time_cnf_sat.dat",
            Series::Approx1Time => "gnuplot_time_approx_1.dat",
            Series::Approx2Time => "gnuplot_time_approx_2.dat",
            Series::Approx1Ratio => "gnuplot_ratio_approx_1.dat",
            Series::Approx2Ratio => "gnuplot_ratio_approx_2.dat",
        }
    }

    /// Position in [`Series::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::CnfSatTime => write!(f, "CNF-SAT time"),
            Series::Approx1Time => write!(f, "APPROX-1 time"),
            Series::Approx2Time => write!(f, "APPROX-2 time"),
            Series::Approx1Ratio => write!(f, "APPROX-1 ratio"),
            Series::Approx2Ratio => write!(f, "APPROX-2 ratio"),
        }
    }
}

/// Aggregate statistics of one series for one problem size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Series the samples came from.
    pub series: Series,
    /// Problem size (number of vertices) the log was produced for.
    pub problem_size: u64,
    /// Number of samples aggregated.
    pub samples: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Bessel-corrected sample standard deviation.
    pub std_dev: f64,
}

impl AggregateRecord {
    /// Formats the record as one gnuplot table row: `size mean stddev`.
    pub fn table_line(&self) -> String {
        format!("{} {:.2} {:.2}\n", self.problem_size, self.mean, self.std_dev)
    }
}
