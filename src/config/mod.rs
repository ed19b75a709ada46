//! Evaluator configuration: defaults, user-input declarations and loading

pub mod inputs;

use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::ConfigError;
use crate::indicators::IndicatorParams;

pub use inputs::{InputKind, UserInput};

/// Prefix for environment variables read by [`EvaluatorConfig::from_env`]
pub const ENV_PREFIX: &str = "REQUEST_EVALUATOR_";

pub const DEFAULT_HISTORY_LENGTH: usize = 60;
pub const DEFAULT_URL: &str = "http://127.0.0.1:8000/evaluate";
pub const DEFAULT_SCORE_FIELD: &str = "score";
pub const DEFAULT_TIMEOUT_SECS: f64 = 2.0;
pub const MIN_TIMEOUT_SECS: f64 = 1.0;
pub const MAX_TIMEOUT_SECS: f64 = 120.0;
pub const MAX_PERIOD: f64 = 500.0;

/// Get the current runtime environment (`ENVIRONMENT`, default "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Settings for one evaluator instance. Resolved once during setup and
/// never changed afterwards.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub history_length: usize,
    pub url: String,
    pub score_field: String,
    pub basic_auth: bool,
    pub auth_username: String,
    #[serde(skip_serializing)]
    pub auth_password: String,
    pub timeout: f64,
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

impl Default for EvaluatorConfig {
    fn default() -> Self {
        let params = IndicatorParams::default();
        Self {
            history_length: DEFAULT_HISTORY_LENGTH,
            url: DEFAULT_URL.to_string(),
            score_field: DEFAULT_SCORE_FIELD.to_string(),
            basic_auth: false,
            auth_username: String::new(),
            auth_password: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            rsi_period: params.rsi_period,
            bb_period: params.bb_period,
            bb_std: params.bb_std,
            macd_fast: params.macd_fast,
            macd_slow: params.macd_slow,
            macd_signal: params.macd_signal,
            atr_period: params.atr_period,
            short_ma_period: params.short_ma_period,
            long_ma_period: params.long_ma_period,
        }
    }
}

impl fmt::Debug for EvaluatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorConfig")
            .field("history_length", &self.history_length)
            .field("url", &self.url)
            .field("score_field", &self.score_field)
            .field("basic_auth", &self.basic_auth)
            .field("auth_username", &self.auth_username)
            .field("auth_password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("indicators", &self.indicator_params())
            .finish()
    }
}

impl EvaluatorConfig {
    /// Declare every configurable field as a user input, with defaults taken
    /// from [`EvaluatorConfig::default`].
    pub fn user_inputs() -> Vec<UserInput> {
        let d = Self::default();
        let period = |name, title, default: usize| {
            UserInput::new(name, title, InputKind::Int, json!(default))
                .min(1.0)
                .max(MAX_PERIOD)
        };

        vec![
            UserInput::new(
                "history_length",
                "History Length",
                InputKind::Int,
                json!(d.history_length),
            )
            .min(1.0),
            UserInput::new("url", "Request URL", InputKind::Text, json!(d.url)),
            UserInput::new(
                "score_field",
                "Response Score Field",
                InputKind::Text,
                json!(d.score_field),
            ),
            UserInput::new(
                "basic_auth",
                "Use Basic Authentication",
                InputKind::Boolean,
                json!(d.basic_auth),
            ),
            UserInput::new(
                "auth_username",
                "Authentication Username",
                InputKind::Text,
                json!(d.auth_username),
            ),
            UserInput::new(
                "auth_password",
                "Authentication Password",
                InputKind::Text,
                json!(d.auth_password),
            ),
            UserInput::new(
                "timeout",
                "Request Timeout (seconds)",
                InputKind::Float,
                json!(d.timeout),
            )
            .min(MIN_TIMEOUT_SECS)
            .max(MAX_TIMEOUT_SECS),
            period("rsi_period", "Stochastic RSI Period", d.rsi_period),
            period("bb_period", "Bollinger Bands Period", d.bb_period),
            UserInput::new(
                "bb_std",
                "Bollinger Bands Standard Deviations",
                InputKind::Float,
                json!(d.bb_std),
            )
            .min(0.1)
            .max(10.0),
            period("macd_fast", "MACD Fast Period", d.macd_fast),
            period("macd_slow", "MACD Slow Period", d.macd_slow),
            period("macd_signal", "MACD Signal Period", d.macd_signal),
            period("atr_period", "ATR Period", d.atr_period),
            period("short_ma_period", "Short Moving Average Period", d.short_ma_period),
            period("long_ma_period", "Long Moving Average Period", d.long_ma_period),
        ]
    }

    /// Resolve a configuration from host-supplied user input values. Missing
    /// keys fall back to their defaults; unknown keys are ignored.
    pub fn from_inputs(inputs: &Map<String, Value>) -> Result<Self, ConfigError> {
        let mut resolved = Map::new();
        for input in Self::user_inputs() {
            let value = input.resolve(inputs)?;
            resolved.insert(input.name.to_string(), value);
        }

        let config: Self = serde_json::from_value(Value::Object(resolved))
            .map_err(|e| ConfigError::Inconsistent(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve a configuration from `REQUEST_EVALUATOR_*` environment
    /// variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut inputs = Map::new();
        for input in Self::user_inputs() {
            let var = format!("{}{}", ENV_PREFIX, input.name.to_uppercase());
            let Ok(raw) = env::var(&var) else {
                continue;
            };
            let value = input
                .kind
                .parse_raw(&raw)
                .ok_or_else(|| ConfigError::InvalidEnv {
                    var: var.clone(),
                    value: raw.clone(),
                })?;
            debug!(var = %var, "Configuration input read from environment");
            inputs.insert(input.name.to_string(), value);
        }

        Self::from_inputs(&inputs)
    }

    /// Cross-field checks that single-input bounds cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout) {
            return Err(ConfigError::OutOfRange {
                name: "timeout".to_string(),
                value: self.timeout,
                min: MIN_TIMEOUT_SECS,
                max: MAX_TIMEOUT_SECS,
            });
        }
        if self.score_field.is_empty() {
            return Err(ConfigError::Inconsistent(
                "score_field must not be empty".to_string(),
            ));
        }
        self.indicator_params()
            .validate()
            .map_err(|e| ConfigError::Inconsistent(e.to_string()))?;
        Ok(())
    }

    /// Request timeout, clamped to the accepted range. A NaN timeout falls
    /// back to the default.
    pub fn timeout_duration(&self) -> Duration {
        let secs = if self.timeout.is_nan() {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
        };
        Duration::from_secs_f64(secs)
    }

    pub fn indicator_params(&self) -> IndicatorParams {
        IndicatorParams::from(self)
    }
}
