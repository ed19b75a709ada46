//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the SMA series: `values.len() - period + 1` values
pub fn calculate_sma(values: &[f64], period: usize) -> Vec<f64> {
    math::rolling_mean(values, period)
}

/// Calculate several SMAs at once, keyed by period
pub fn calculate_smas(values: &[f64], periods: &[usize]) -> Vec<(usize, Vec<f64>)> {
    periods
        .iter()
        .map(|&period| (period, calculate_sma(values, period)))
        .collect()
}
