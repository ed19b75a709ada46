//! Indicator library trait and the standard implementation

use crate::indicators::momentum::{calculate_macd, calculate_stoch_rsi};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::models::indicators::{BollingerBands, MacdSeries};

/// Series transforms the indicator computer relies on.
///
/// Implementations never pad: insufficient input yields shorter or empty
/// output, aligned to the end of the input.
pub trait IndicatorLibrary: Send + Sync {
    fn stoch_rsi(&self, close: &[f64], period: usize) -> Vec<f64>;

    fn bbands(&self, close: &[f64], period: usize, multiplier: f64) -> BollingerBands;

    fn macd(&self, close: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries;

    fn atr(&self, high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64>;

    fn sma(&self, values: &[f64], period: usize) -> Vec<f64>;
}

/// Built-in indicator implementations
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIndicators;

impl IndicatorLibrary for StandardIndicators {
    fn stoch_rsi(&self, close: &[f64], period: usize) -> Vec<f64> {
        calculate_stoch_rsi(close, period)
    }

    fn bbands(&self, close: &[f64], period: usize, multiplier: f64) -> BollingerBands {
        calculate_bollinger_bands(close, period, multiplier)
    }

    fn macd(&self, close: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
        calculate_macd(close, fast, slow, signal)
    }

    fn atr(&self, high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
        calculate_atr(high, low, close, period)
    }

    fn sma(&self, values: &[f64], period: usize) -> Vec<f64> {
        calculate_sma(values, period)
    }
}
