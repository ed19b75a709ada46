//! Applies the configured indicator battery to an OHLCV window

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EvaluatorConfig;
use crate::error::IndicatorError;
use crate::indicators::library::{IndicatorLibrary, StandardIndicators};
use crate::models::candle::OhlcvHistory;
use crate::models::indicators::IndicatorSet;

/// Periods for every indicator in the battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub bb_period: usize,
    pub bb_std: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub atr_period: usize,
    pub short_ma_period: usize,
    pub long_ma_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            bb_period: 20,
            bb_std: 2.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            atr_period: 5,
            short_ma_period: 20,
            long_ma_period: 50,
        }
    }
}

impl IndicatorParams {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("bb_period", self.bb_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("atr_period", self.atr_period),
            ("short_ma_period", self.short_ma_period),
            ("long_ma_period", self.long_ma_period),
        ];
        if let Some(&(name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(IndicatorError::ZeroPeriod(name));
        }
        if self.macd_fast > self.macd_slow {
            return Err(IndicatorError::MacdPeriods {
                fast: self.macd_fast,
                slow: self.macd_slow,
            });
        }
        if !self.bb_std.is_finite() || self.bb_std <= 0.0 {
            return Err(IndicatorError::InvalidMultiplier(self.bb_std));
        }
        Ok(())
    }

    /// Longest warm-up any indicator needs before emitting a value
    pub fn largest_period(&self) -> usize {
        [
            self.rsi_period * 2,
            self.bb_period,
            self.macd_slow,
            self.atr_period,
            self.short_ma_period,
            self.long_ma_period,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl From<&EvaluatorConfig> for IndicatorParams {
    fn from(config: &EvaluatorConfig) -> Self {
        Self {
            rsi_period: config.rsi_period,
            bb_period: config.bb_period,
            bb_std: config.bb_std,
            macd_fast: config.macd_fast,
            macd_slow: config.macd_slow,
            macd_signal: config.macd_signal,
            atr_period: config.atr_period,
            short_ma_period: config.short_ma_period,
            long_ma_period: config.long_ma_period,
        }
    }
}

pub struct IndicatorComputer {
    params: IndicatorParams,
    library: Arc<dyn IndicatorLibrary>,
}

impl IndicatorComputer {
    pub fn new(params: IndicatorParams) -> Result<Self, IndicatorError> {
        Self::with_library(params, Arc::new(StandardIndicators))
    }

    pub fn with_library(
        params: IndicatorParams,
        library: Arc<dyn IndicatorLibrary>,
    ) -> Result<Self, IndicatorError> {
        params.validate()?;
        Ok(Self { params, library })
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute every indicator over the window. Short windows produce short
    /// or empty series; nothing is padded.
    pub fn compute(&self, history: &OhlcvHistory) -> IndicatorSet {
        let p = &self.params;
        let close = history.close();

        if history.len() < p.largest_period() {
            debug!(
                candles = history.len(),
                required = p.largest_period(),
                "Window shorter than the longest indicator warm-up"
            );
        }

        let mut moving_avg = BTreeMap::new();
        for period in [p.short_ma_period, p.long_ma_period] {
            moving_avg.insert(
                IndicatorSet::moving_avg_key(period),
                self.library.sma(close, period),
            );
        }

        IndicatorSet {
            stochastic_rsi: self.library.stoch_rsi(close, p.rsi_period),
            bollinger_band: self.library.bbands(close, p.bb_period, p.bb_std),
            macd: self
                .library
                .macd(close, p.macd_fast, p.macd_slow, p.macd_signal),
            atr: self
                .library
                .atr(history.high(), history.low(), close, p.atr_period),
            moving_avg,
        }
    }
}
