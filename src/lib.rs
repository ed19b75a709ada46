//! Request evaluator: computes technical indicators over an OHLCV window,
//! posts them to an external scoring endpoint and publishes the bounded
//! score to the host decision pipeline.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

pub use crate::config::EvaluatorConfig;
pub use crate::core::evaluator::RequestEvaluator;
pub use crate::error::{EvaluatorError, ScoringError};
pub use crate::models::{Candle, EvalTime, EvaluationResult, IndicatorSet, OhlcvHistory, TimeFrame};
