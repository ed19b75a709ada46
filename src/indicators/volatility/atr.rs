//! ATR (Average True Range) indicator

use crate::common::math;

/// Calculate the ATR series
///
/// The first bar's true range is its high-low span. The first ATR is the mean
/// of the first `period` true ranges, later values use Wilder smoothing.
/// Output has `len - period + 1` values where `len` is the shortest input.
pub fn calculate_atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let len = high.len().min(low.len()).min(close.len());
    if period == 0 || len < period {
        return Vec::new();
    }

    let per = 1.0 / period as f64;
    let mut sum = high[0] - low[0];
    for i in 1..period {
        sum += math::true_range(high[i], low[i], close[i - 1]);
    }

    let mut atr = sum / period as f64;
    let mut out = Vec::with_capacity(len - period + 1);
    out.push(atr);

    for i in period..len {
        let tr = math::true_range(high[i], low[i], close[i - 1]);
        atr = math::ema_step(tr, atr, per);
        out.push(atr);
    }

    out
}
