use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub hist: Vec<f64>,
}

/// Indicator series derived from one OHLCV window. Each series is aligned
/// to the end of the window; leading bars consumed by warm-up are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub stochastic_rsi: Vec<f64>,
    pub bollinger_band: BollingerBands,
    pub macd: MacdSeries,
    pub atr: Vec<f64>,
    pub moving_avg: BTreeMap<String, Vec<f64>>,
}

impl IndicatorSet {
    pub fn moving_avg_key(period: usize) -> String {
        format!("ma_{}", period)
    }

    pub fn moving_average(&self, period: usize) -> Option<&[f64]> {
        self.moving_avg
            .get(&Self::moving_avg_key(period))
            .map(|v| v.as_slice())
    }
}
