use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::candle::{Candle, OhlcvHistory};
use crate::models::indicators::{BollingerBands, IndicatorSet, MacdSeries};
use crate::models::timeframe::TimeFrame;

/// Body posted to the scoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RequestPayload {
    pub symbol: String,
    pub time_frame: TimeFrame,
    pub last_candle: Option<Candle>,
    pub history: OhlcvHistory,
    pub stochastic_rsi: Vec<f64>,
    pub bollinger_band: BollingerBands,
    pub macd: MacdSeries,
    pub atr: Vec<f64>,
    pub moving_avg: BTreeMap<String, Vec<f64>>,
}

impl RequestPayload {
    pub fn new(
        symbol: impl Into<String>,
        time_frame: TimeFrame,
        last_candle: Option<Candle>,
        history: OhlcvHistory,
        indicators: IndicatorSet,
    ) -> Self {
        let IndicatorSet {
            stochastic_rsi,
            bollinger_band,
            macd,
            atr,
            moving_avg,
        } = indicators;

        Self {
            symbol: symbol.into(),
            time_frame,
            last_candle,
            history,
            stochastic_rsi,
            bollinger_band,
            macd,
            atr,
            moving_avg,
        }
    }
}
