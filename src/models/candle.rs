use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single OHLCV bar. `timestamp` is the candle open time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Column-oriented OHLCV window, oldest first.
///
/// Every column is built from the same candle slice, so all of them always
/// share one length and alignment index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OhlcvHistory {
    timestamp: Vec<i64>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl OhlcvHistory {
    pub fn from_candles(candles: &[Candle]) -> Self {
        let n = candles.len();
        let mut history = Self {
            timestamp: Vec::with_capacity(n),
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        };

        for candle in candles {
            history.timestamp.push(candle.timestamp.timestamp());
            history.open.push(candle.open);
            history.high.push(candle.high);
            history.low.push(candle.low);
            history.close.push(candle.close);
            history.volume.push(candle.volume);
        }

        history
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn timestamp(&self) -> &[i64] {
        &self.timestamp
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }
}
