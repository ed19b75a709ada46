//! Shared data models spanning the evaluation layers.

pub mod candle;
pub mod evaluation;
pub mod indicators;
pub mod payload;
pub mod timeframe;

pub use candle::{Candle, OhlcvHistory};
pub use evaluation::{EvalTime, EvaluationResult};
pub use indicators::{BollingerBands, IndicatorSet, MacdSeries};
pub use payload::RequestPayload;
pub use timeframe::TimeFrame;
