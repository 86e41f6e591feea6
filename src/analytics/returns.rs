//! Pure return-series arithmetic.
//!
//! Risk measures are computed over fractional returns between consecutive
//! close prices, never over raw prices.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::market_data::Quote;

/// One fractional return, stamped with the timestamp of the later of the
/// two observations it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPoint {
    pub timestamp: DateTime<Utc>,
    pub value: Decimal,
}

/// Builds the return series `r[t] = (close[t] - close[t-1]) / close[t-1]`
/// from a timestamp-ordered quote series.
///
/// A zero previous close cannot form a fractional return; such pairs are
/// skipped.
pub fn return_series(quotes: &[Quote]) -> Vec<ReturnPoint> {
    quotes
        .windows(2)
        .filter_map(|window| {
            let previous = &window[0];
            let current = &window[1];
            if previous.close.is_zero() {
                return None;
            }
            Some(ReturnPoint {
                timestamp: current.timestamp,
                value: (current.close - previous.close) / previous.close,
            })
        })
        .collect()
}

/// Inner-joins two timestamp-ordered return series on timestamp, dropping
/// unmatched points. Returns the paired values.
pub fn align(a: &[ReturnPoint], b: &[ReturnPoint]) -> (Vec<Decimal>, Vec<Decimal>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].timestamp.cmp(&b[j].timestamp) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                left.push(a[i].value);
                right.push(b[j].value);
                i += 1;
                j += 1;
            }
        }
    }
    (left, right)
}

pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len() as u64)
}

/// Unbiased sample variance (n - 1 denominator). `None` when n < 2.
pub fn sample_variance(values: &[Decimal]) -> Option<Decimal> {
    sample_covariance(values, values)
}

/// Unbiased sample covariance (n - 1 denominator) over two equally long
/// value slices. `None` when n < 2 or the lengths differ.
pub fn sample_covariance(a: &[Decimal], b: &[Decimal]) -> Option<Decimal> {
    let n = a.len();
    if n < 2 || b.len() != n {
        return None;
    }
    let mean_a = mean(a);
    let mean_b = mean(b);
    let sum: Decimal = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - mean_a) * (*y - mean_b))
        .sum();
    Some(sum / Decimal::from((n - 1) as u64))
}
