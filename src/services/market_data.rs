//! Market data provider interface

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::candle::Candle;
use crate::models::timeframe::TimeFrame;

/// Source of OHLCV windows for a given exchange/symbol/time frame
#[async_trait]
pub trait OhlcvSource: Send + Sync {
    /// Get up to `limit` most recent candles, oldest first
    async fn get_candles(
        &self,
        exchange: &str,
        exchange_id: &str,
        symbol: &str,
        time_frame: TimeFrame,
        limit: usize,
        include_in_construction: bool,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory candle store, keyed by symbol and time frame.
///
/// Used by the standalone runner and tests. The last candle of a series is
/// treated as the one still in construction.
#[derive(Default)]
pub struct InMemoryOhlcvSource {
    candles: RwLock<HashMap<(String, TimeFrame), Vec<Candle>>>,
}

impl InMemoryOhlcvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, symbol: &str, time_frame: TimeFrame, mut candles: Vec<Candle>) {
        candles.sort_by_key(|c| c.timestamp);
        let mut store = self.candles.write().await;
        store.insert((symbol.to_string(), time_frame), candles);
    }

    /// Append or replace (same timestamp) a single candle
    pub async fn push(&self, symbol: &str, time_frame: TimeFrame, candle: Candle) {
        let mut store = self.candles.write().await;
        let series = store
            .entry((symbol.to_string(), time_frame))
            .or_insert_with(Vec::new);
        series.retain(|c| c.timestamp != candle.timestamp);
        series.push(candle);
        series.sort_by_key(|c| c.timestamp);
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl OhlcvSource for InMemoryOhlcvSource {
    async fn get_candles(
        &self,
        _exchange: &str,
        _exchange_id: &str,
        symbol: &str,
        time_frame: TimeFrame,
        limit: usize,
        include_in_construction: bool,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let store = self.candles.read().await;
        let Some(series) = store.get(&(symbol.to_string(), time_frame)) else {
            return Ok(Vec::new());
        };

        let end = if include_in_construction {
            series.len()
        } else {
            series.len().saturating_sub(1)
        };
        let start = end.saturating_sub(limit);
        Ok(series[start..end].to_vec())
    }
}
