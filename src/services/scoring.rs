//! HTTP client for the external scoring endpoint

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::EvaluatorConfig;
use crate::error::ScoringError;
use crate::metrics::Metrics;

/// Saturate a raw score into [-1, 1]
pub fn clamp_score(raw: f64) -> f64 {
    raw.max(-1.0).min(1.0)
}

/// Read the score out of a response body.
///
/// A body that is not an object, or that lacks the field (or holds null),
/// reads as 0. A field holding anything other than a finite number is an
/// error.
pub fn extract_score(body: &Value, field: &str) -> Result<f64, ScoringError> {
    let raw = match body.get(field) {
        None | Some(Value::Null) => return Ok(0.0),
        Some(raw) => raw,
    };

    raw.as_f64()
        .filter(|v| v.is_finite())
        .map(clamp_score)
        .ok_or_else(|| ScoringError::NonNumericScore {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// Posts evaluation payloads to the configured endpoint. One attempt per
/// call, no retries.
pub struct ScoringClient {
    client: reqwest::Client,
    url: String,
    score_field: String,
    credentials: Option<Credentials>,
    metrics: Option<Arc<Metrics>>,
}

impl ScoringClient {
    pub fn new(config: &EvaluatorConfig) -> Result<Self, ScoringError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(ScoringError::Client)?;

        let credentials = config.basic_auth.then(|| Credentials {
            username: config.auth_username.clone(),
            password: config.auth_password.clone(),
        });

        Ok(Self {
            client,
            url: config.url.clone(),
            score_field: config.score_field.clone(),
            credentials,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the payload and return the clamped score
    pub async fn score(&self, payload: &Value) -> Result<f64, ScoringError> {
        let start = Instant::now();
        let result = self.send(payload).await;

        if let Some(metrics) = &self.metrics {
            metrics.scoring_requests_total.inc();
            metrics
                .scoring_request_duration_seconds
                .observe(start.elapsed().as_secs_f64());
            if result.is_err() {
                metrics.scoring_failures_total.inc();
            }
        }

        result
    }

    async fn send(&self, payload: &Value) -> Result<f64, ScoringError> {
        let mut request = self.client.post(&self.url).json(payload);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        debug!(url = %self.url, "Sending evaluation request");
        let response = request.send().await.map_err(ScoringError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(ScoringError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(ScoringError::Transport)?;
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(url = %self.url, error = %e, "Scoring endpoint returned a non-JSON body");
            ScoringError::InvalidBody(e.to_string())
        })?;

        let score = extract_score(&body, &self.score_field)?;
        debug!(url = %self.url, score = score, "Received score");
        Ok(score)
    }
}
