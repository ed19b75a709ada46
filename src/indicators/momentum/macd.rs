//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::MacdSeries;

/// Calculate MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Both EMAs are seeded with the first close. Output starts at index
/// `slow - 1`, giving `closes.len() - slow + 1` values per line.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    if fast_period == 0
        || slow_period == 0
        || signal_period == 0
        || fast_period > slow_period
        || closes.len() < slow_period
    {
        return MacdSeries::default();
    }

    let fast_ema = calculate_ema(closes, fast_period);
    let slow_ema = calculate_ema(closes, slow_period);
    let signal_alpha = math::ema_alpha(signal_period);

    let start = slow_period - 1;
    let len = closes.len() - start;
    let mut series = MacdSeries {
        macd: Vec::with_capacity(len),
        signal: Vec::with_capacity(len),
        hist: Vec::with_capacity(len),
    };

    let mut signal = 0.0;
    for i in start..closes.len() {
        let macd = fast_ema[i] - slow_ema[i];
        signal = if i == start {
            macd
        } else {
            math::ema_step(macd, signal, signal_alpha)
        };
        series.macd.push(macd);
        series.signal.push(signal);
        series.hist.push(macd - signal);
    }

    series
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
