//! Output of aggregated records: gnuplot tables and the stdout summary.

pub mod summary;
pub mod tables;

pub use summary::{generate_summary, SummaryFormat};
pub use tables::OutputTables;
