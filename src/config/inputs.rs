//! User input declarations and their resolution against host-supplied values

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Int,
    Float,
    Text,
    Boolean,
}

impl InputKind {
    fn expected(&self) -> &'static str {
        match self {
            InputKind::Int => "integer",
            InputKind::Float => "number",
            InputKind::Text => "string",
            InputKind::Boolean => "boolean",
        }
    }

    /// Parse a raw string (environment variable) into a JSON value of this kind
    pub fn parse_raw(&self, raw: &str) -> Option<Value> {
        let raw = raw.trim();
        match self {
            InputKind::Int => raw.parse::<i64>().ok().map(Value::from),
            InputKind::Float => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Value::from),
            InputKind::Text => Some(Value::String(raw.to_string())),
            InputKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(Value::Bool(true)),
                "false" | "0" | "no" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

/// A named, typed, optionally bounded configuration input
#[derive(Debug, Clone, Serialize)]
pub struct UserInput {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: InputKind,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl UserInput {
    pub fn new(name: &'static str, title: &'static str, kind: InputKind, default: Value) -> Self {
        Self {
            name,
            title,
            kind,
            default,
            min: None,
            max: None,
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Pick the user value (or the default when absent or null) and check
    /// its type and bounds.
    pub fn resolve(&self, inputs: &Map<String, Value>) -> Result<Value, ConfigError> {
        let value = match inputs.get(self.name) {
            Some(Value::Null) | None => return Ok(self.default.clone()),
            Some(value) => value,
        };

        let numeric = match self.kind {
            InputKind::Int => Some(value.as_i64().ok_or_else(|| self.type_error())? as f64),
            InputKind::Float => Some(value.as_f64().ok_or_else(|| self.type_error())?),
            InputKind::Text => {
                value.as_str().ok_or_else(|| self.type_error())?;
                None
            }
            InputKind::Boolean => {
                value.as_bool().ok_or_else(|| self.type_error())?;
                None
            }
        };

        if let Some(number) = numeric {
            self.check_bounds(number)?;
        }

        Ok(value.clone())
    }

    fn check_bounds(&self, value: f64) -> Result<(), ConfigError> {
        let min = self.min.unwrap_or(f64::NEG_INFINITY);
        let max = self.max.unwrap_or(f64::INFINITY);
        if value < min || value > max {
            return Err(ConfigError::OutOfRange {
                name: self.name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    fn type_error(&self) -> ConfigError {
        ConfigError::InvalidType {
            name: self.name.to_string(),
            expected: self.kind.expected(),
        }
    }
}
