//! RSI (Relative Strength Index) and Stochastic RSI indicators

use crate::common::math;

/// Calculate the RSI series with Wilder smoothing
///
/// RSI = 100 * AvgUp / (AvgUp + AvgDown)
///
/// The first value needs `period` price changes, so the output has
/// `closes.len() - period` values. No movement at all reads as 50.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() <= period {
        return Vec::new();
    }

    let per = 1.0 / period as f64;
    let mut up_sum = 0.0;
    let mut down_sum = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            up_sum += change;
        } else {
            down_sum -= change;
        }
    }

    let mut smooth_up = up_sum / period as f64;
    let mut smooth_down = down_sum / period as f64;

    let mut out = Vec::with_capacity(closes.len() - period);
    out.push(rsi_value(smooth_up, smooth_down));

    for i in period + 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (up, down) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };
        smooth_up = math::ema_step(up, smooth_up, per);
        smooth_down = math::ema_step(down, smooth_down, per);
        out.push(rsi_value(smooth_up, smooth_down));
    }

    out
}

fn rsi_value(up: f64, down: f64) -> f64 {
    let total = up + down;
    if total == 0.0 {
        return 50.0;
    }
    100.0 * up / total
}

/// Calculate the Stochastic RSI series, scaled to [0, 100]
///
/// StochRSI = 100 * (RSI - min(RSI, n)) / (max(RSI, n) - min(RSI, n))
///
/// Output has `closes.len() - 2 * period + 1` values. When the RSI window is
/// flat the RSI reading itself is emitted, so a saturated trend stays at the
/// matching end of the range.
pub fn calculate_stoch_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let rsi = calculate_rsi(closes, period);
    if period == 0 || rsi.len() < period {
        return Vec::new();
    }

    rsi.windows(period)
        .filter_map(|window| {
            let (lo, hi) = math::min_max(window)?;
            let current = *window.last()?;
            let range = hi - lo;
            if range == 0.0 {
                Some(current)
            } else {
                Some(100.0 * (current - lo) / range)
            }
        })
        .collect()
}
