//! Solver log parsing.
//!
//! Each line of a solver log looks like `LABEL:VALUE`. Lines whose label
//! is one of the five known series are collected; anything else is skipped.
//! Values are kept as exact rationals: timings are integers of any size,
//! ratios are the exact value of the parsed `f64`.

use crate::error::AggregateError;
use crate::models::{SampleKind, Series};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Samples collected for every series, in log order.
#[derive(Debug, Clone, Default)]
pub struct SeriesSamples {
    samples: [Vec<BigRational>; 5],
    /// Lines that matched no series label.
    pub skipped: usize,
}

impl SeriesSamples {
    pub fn push(&mut self, series: Series, value: BigRational) {
        self.samples[series.index()].push(value);
    }

    /// Samples of one series.
    pub fn get(&self, series: Series) -> &[BigRational] {
        &self.samples[series.index()]
    }

    /// Total number of classified samples.
    pub fn total(&self) -> usize {
        self.samples.iter().map(Vec::len).sum()
    }
}

/// Remove `_` digit separators. Each one must sit between two digits.
fn strip_digit_separators(raw: &str) -> Option<Cow<'_, str>> {
    if !raw.contains('_') {
        return Some(Cow::Borrowed(raw));
    }

    let bytes = raw.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i > 0 && bytes[i - 1].is_ascii_digit();
        let after = bytes.get(i + 1).map(u8::is_ascii_digit).unwrap_or(false);
        if !(before && after) {
            return None;
        }
    }

    Some(Cow::Owned(raw.replace('_', "")))
}

/// Parse a raw value according to the series kind.
///
/// Non-finite floats (`inf`, `nan`) are rejected.
fn parse_value(raw: &str, kind: SampleKind) -> Option<BigRational> {
    let digits = strip_digit_separators(raw)?;
    match kind {
        SampleKind::Integer => digits.parse::<BigInt>().ok().map(BigRational::from_integer),
        SampleKind::Float => digits
            .parse::<f64>()
            .ok()
            .and_then(BigRational::from_float),
    }
}

/// Classify a single line.
///
/// Returns `Ok(None)` for blank or unrecognized lines. `line_no` is only
/// used for diagnostics.
pub fn classify_line(
    line: &str,
    line_no: usize,
) -> Result<Option<(Series, BigRational)>, AggregateError> {
    let line = line.trim();
    let Some(series) = Series::ALL.into_iter().find(|s| line.starts_with(s.label())) else {
        return Ok(None);
    };

    let raw = line.split_once(':').map(|(_, value)| value).unwrap_or(line);
    let raw = raw.trim();

    let value = parse_value(raw, series.kind()).ok_or_else(|| AggregateError::Parse {
        line: line_no,
        label: series.label(),
        expected: series.kind().expected(),
        raw: raw.to_string(),
    })?;

    Ok(Some((series, value)))
}

/// Scan a whole log.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SeriesSamples, AggregateError> {
    let mut samples = SeriesSamples::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AggregateError::io("failed to read", "<log>", e))?;

        match classify_line(&line, line_no)? {
            Some((series, value)) => {
                debug!("line {}: {} = {}", line_no, series, value);
                samples.push(series, value);
            }
            None => samples.skipped += 1,
        }
    }

    Ok(samples)
}

/// Open and scan the log at `path`.
pub fn parse_file(path: &Path) -> Result<SeriesSamples, AggregateError> {
    let file = File::open(path).map_err(|e| AggregateError::io("failed to open", path, e))?;

    parse_reader(BufReader::new(file)).map_err(|e| match e {
        AggregateError::Io { action, source, .. } => AggregateError::io(action, path, source),
        other => other,
    })
}
