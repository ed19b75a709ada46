//! Error types for each layer of the evaluation pipeline

use thiserror::Error;

/// Configuration resolution failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid type for input '{name}': expected {expected}")]
    InvalidType { name: String, expected: &'static str },

    #[error("Input '{name}' out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid value for environment variable {var}: {value}")]
    InvalidEnv { var: String, value: String },

    #[error("Inconsistent configuration: {0}")]
    Inconsistent(String),
}

/// Indicator parameter failures
#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("Indicator period '{0}' must be greater than zero")]
    ZeroPeriod(&'static str),

    #[error("MACD fast period ({fast}) must not exceed slow period ({slow})")]
    MacdPeriods { fast: usize, slow: usize },

    #[error("Bollinger multiplier must be finite and positive, got {0}")]
    InvalidMultiplier(f64),
}

/// Payload serialization failures
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload is not JSON-serializable: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Remote scoring failures. Every variant maps to the neutral score at the
/// evaluator boundary.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to scoring endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Scoring endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Scoring endpoint returned an invalid body: {0}")]
    InvalidBody(String),

    #[error("Score field '{field}' is not a number: {value}")]
    NonNumericScore { field: String, value: String },
}

impl ScoringError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScoringError::Transport(e) if e.is_timeout())
    }
}

/// Errors surfaced to the host framework. Remote scoring failures never
/// appear here.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("Market data error: {0}")]
    DataSource(String),

    #[error("Failed to publish evaluation: {0}")]
    Publish(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
