use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::candle::Candle;
use crate::models::timeframe::TimeFrame;

/// Neutral eval note published whenever the remote score is unavailable
pub const NEUTRAL_SCORE: f64 = 0.0;

/// Time attached to a published evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTime {
    /// End of a closed candle
    Closed(DateTime<Utc>),
    /// Candle still being built by the exchange
    InConstruction,
}

impl EvalTime {
    pub fn for_candle(candle: &Candle, time_frame: TimeFrame, in_construction: bool) -> Self {
        if in_construction {
            EvalTime::InConstruction
        } else {
            EvalTime::Closed(candle.timestamp + time_frame.duration())
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            EvalTime::Closed(ts) => Some(*ts),
            EvalTime::InConstruction => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub eval_time: EvalTime,
}

impl EvaluationResult {
    pub fn new(score: f64, eval_time: EvalTime) -> Self {
        Self { score, eval_time }
    }

    pub fn neutral(eval_time: EvalTime) -> Self {
        Self::new(NEUTRAL_SCORE, eval_time)
    }
}
