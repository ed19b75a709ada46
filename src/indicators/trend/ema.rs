//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the EMA series seeded with the first value
///
/// Output has the same length as the input; early values carry the seed's
/// bias until the average settles.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    if period == 0 {
        return Vec::new();
    }

    let alpha = math::ema_alpha(period);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = first;
    out.push(ema);
    for &value in &values[1..] {
        ema = math::ema_step(value, ema, alpha);
        out.push(ema);
    }
    out
}
