//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBands;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// Uses the population standard deviation of each window.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> BollingerBands {
    if period == 0 || closes.len() < period {
        return BollingerBands::default();
    }

    let len = closes.len() - period + 1;
    let mut bands = BollingerBands {
        upper: Vec::with_capacity(len),
        middle: Vec::with_capacity(len),
        lower: Vec::with_capacity(len),
    };

    for window in closes.windows(period) {
        let (Some(middle), Some(std)) = (math::mean(window), math::population_std_dev(window))
        else {
            continue;
        };
        bands.upper.push(middle + std_dev * std);
        bands.middle.push(middle);
        bands.lower.push(middle - std_dev * std);
    }

    bands
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerBands {
    calculate_bollinger_bands(closes, 20, 2.0)
}
