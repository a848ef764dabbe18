//! Per-series aggregation and statistics.
//!
//! Turns the collected samples into one [`AggregateRecord`] per series.
//! Sums and squared deviations are computed on exact rationals, and each
//! statistic is rounded to `f64` once at the end, so the two-decimal table
//! columns do not depend on the order or magnitude of the samples.

use crate::error::AggregateError;
use crate::models::{AggregateRecord, Series};
use crate::parser::SeriesSamples;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

/// Extra bits carried by the integer square root before the final rounding.
const SQRT_PRECISION_BITS: i64 = 2 * f64::MANTISSA_DIGITS as i64 + 3;

fn count(n: usize) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn to_finite_f64(value: &BigRational) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite())
}

/// Exact arithmetic mean. `None` for an empty slice.
pub fn exact_mean(values: &[BigRational]) -> Option<BigRational> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(BigRational::zero(), |acc, v| acc + v);
    Some(sum / count(values.len()))
}

/// Exact sample variance (denominator n - 1). `None` below two points.
pub fn exact_variance(values: &[BigRational]) -> Option<BigRational> {
    if values.len() < 2 {
        return None;
    }
    let mean = exact_mean(values)?;
    let sum_sq = values.iter().fold(BigRational::zero(), |acc, v| {
        let diff = v - &mean;
        acc + &diff * &diff
    });
    Some(sum_sq / count(values.len() - 1))
}

/// `floor(sqrt(n / m))`, with the lowest bit set when the root is inexact.
fn isqrt_round_to_odd(n: &BigInt, m: &BigInt) -> BigInt {
    let root = (n / m).sqrt();
    if &(&root * &root) * m != *n {
        root | BigInt::one()
    } else {
        root
    }
}

/// Correctly rounded square root of a non-negative rational.
pub fn sqrt_to_f64(value: &BigRational) -> Option<f64> {
    if value.is_zero() {
        return Some(0.0);
    }
    let (n, m) = (value.numer(), value.denom());

    let shift = (n.bits() as i64 - m.bits() as i64 - SQRT_PRECISION_BITS).div_euclid(2);
    let (numer, denom) = if shift >= 0 {
        let shift = shift as usize;
        (isqrt_round_to_odd(n, &(m << (2 * shift))) << shift, BigInt::one())
    } else {
        let shift = shift.unsigned_abs() as usize;
        (isqrt_round_to_odd(&(n << (2 * shift)), m), BigInt::one() << shift)
    };

    to_finite_f64(&BigRational::new(numer, denom))
}

/// Arithmetic mean rounded to `f64`. `None` for an empty slice.
pub fn mean(values: &[BigRational]) -> Option<f64> {
    exact_mean(values).as_ref().and_then(to_finite_f64)
}

/// Sample standard deviation rounded to `f64`. `None` below two points.
pub fn sample_std_dev(values: &[BigRational]) -> Option<f64> {
    exact_variance(values).as_ref().and_then(sqrt_to_f64)
}

/// Aggregate one series.
pub fn aggregate_series(
    series: Series,
    values: &[BigRational],
    problem_size: u64,
) -> Result<AggregateRecord, AggregateError> {
    let exact = exact_mean(values).ok_or(AggregateError::EmptySeries(series.label()))?;
    let variance = exact_variance(values).ok_or(AggregateError::InsufficientSamples {
        label: series.label(),
        count: values.len(),
    })?;

    let mean = to_finite_f64(&exact).ok_or(AggregateError::Overflow(series.label()))?;
    let std_dev = sqrt_to_f64(&variance).ok_or(AggregateError::Overflow(series.label()))?;

    Ok(AggregateRecord {
        series,
        problem_size,
        samples: values.len(),
        mean,
        std_dev,
    })
}

/// Aggregate every series, failing on the first one that cannot be computed.
///
/// Records come back in [`Series::ALL`] order.
pub fn aggregate_all(
    samples: &SeriesSamples,
    problem_size: u64,
) -> Result<Vec<AggregateRecord>, AggregateError> {
    Series::ALL
        .iter()
        .map(|&series| aggregate_series(series, samples.get(series), problem_size))
        .collect()
}
