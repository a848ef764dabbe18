//! Analysis modules.
//!
//! Statistics over the parsed series.

pub mod aggregator;

pub use aggregator::*;
