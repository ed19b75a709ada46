//! Evaluator orchestration: window fetch, indicators, remote score, publish

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::config::EvaluatorConfig;
use crate::error::EvaluatorError;
use crate::indicators::{IndicatorComputer, IndicatorLibrary};
use crate::metrics::Metrics;
use crate::models::candle::{Candle, OhlcvHistory};
use crate::models::evaluation::{EvalTime, EvaluationResult, NEUTRAL_SCORE};
use crate::models::payload::RequestPayload;
use crate::models::timeframe::TimeFrame;
use crate::services::market_data::OhlcvSource;
use crate::services::payload::serialize_payload;
use crate::services::pipeline::EvaluationSink;
use crate::services::scoring::ScoringClient;

/// Evaluator that delegates scoring to a remote HTTP endpoint.
///
/// Holds no state between calls apart from the last published eval note.
/// Remote failures are absorbed here and published as the neutral score.
pub struct RequestEvaluator {
    config: EvaluatorConfig,
    computer: IndicatorComputer,
    client: ScoringClient,
    source: Arc<dyn OhlcvSource>,
    sink: Arc<dyn EvaluationSink>,
    metrics: Option<Arc<Metrics>>,
    eval_note: RwLock<f64>,
}

impl RequestEvaluator {
    pub fn new(
        config: EvaluatorConfig,
        source: Arc<dyn OhlcvSource>,
        sink: Arc<dyn EvaluationSink>,
    ) -> Result<Self, EvaluatorError> {
        config.validate()?;
        let computer = IndicatorComputer::new(config.indicator_params())?;
        let client = ScoringClient::new(&config)?;

        info!(
            url = %config.url,
            history_length = config.history_length,
            basic_auth = config.basic_auth,
            "RequestEvaluator initialized"
        );

        Ok(Self {
            config,
            computer,
            client,
            source,
            sink,
            metrics: None,
            eval_note: RwLock::new(NEUTRAL_SCORE),
        })
    }

    /// Replace the indicator implementation
    pub fn with_library(mut self, library: Arc<dyn IndicatorLibrary>) -> Result<Self, EvaluatorError> {
        self.computer = IndicatorComputer::with_library(self.config.indicator_params(), library)?;
        Ok(self)
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.client = self.client.with_metrics(metrics.clone());
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score published by the most recent evaluation
    pub async fn eval_note(&self) -> f64 {
        *self.eval_note.read().await
    }

    /// Handle a new or updated candle: fetch the window, evaluate, publish.
    ///
    /// Only market data and publishing failures are returned; a failing
    /// scoring endpoint yields a neutral evaluation instead.
    #[allow(clippy::too_many_arguments)]
    pub async fn ohlcv_callback(
        &self,
        exchange: &str,
        exchange_id: &str,
        cryptocurrency: &str,
        symbol: &str,
        time_frame: TimeFrame,
        candle: &Candle,
        inc_in_construction_data: bool,
    ) -> Result<EvaluationResult, EvaluatorError> {
        let candles = self
            .source
            .get_candles(
                exchange,
                exchange_id,
                symbol,
                time_frame,
                self.config.history_length,
                inc_in_construction_data,
            )
            .await
            .map_err(|e| {
                error!(symbol = %symbol, time_frame = %time_frame, error = %e, "Failed to fetch candles");
                EvaluatorError::DataSource(e.to_string())
            })?;

        debug!(
            symbol = %symbol,
            time_frame = %time_frame,
            count = candles.len(),
            "Fetched {} candles for {}",
            candles.len(),
            symbol
        );

        self.evaluate(
            cryptocurrency,
            symbol,
            time_frame,
            &candles,
            candle,
            inc_in_construction_data,
        )
        .await
    }

    /// Evaluate an already fetched window and publish the result
    pub async fn evaluate(
        &self,
        cryptocurrency: &str,
        symbol: &str,
        time_frame: TimeFrame,
        candles: &[Candle],
        candle: &Candle,
        in_construction: bool,
    ) -> Result<EvaluationResult, EvaluatorError> {
        let payload = self.build_payload(symbol, time_frame, candles, candle);
        let score = self.request_score(&payload).await;
        let result = EvaluationResult::new(
            score,
            EvalTime::for_candle(candle, time_frame, in_construction),
        );

        *self.eval_note.write().await = score;
        if let Some(metrics) = &self.metrics {
            metrics.last_evaluation_score.set(score);
        }

        self.sink
            .evaluation_completed(cryptocurrency, symbol, time_frame, &result)
            .await
            .map_err(|e| EvaluatorError::Publish(e.to_string()))?;

        Ok(result)
    }

    /// Assemble the request body for one window. The last candle is the
    /// newest in the window, or the triggering candle when the window is
    /// empty.
    pub fn build_payload(
        &self,
        symbol: &str,
        time_frame: TimeFrame,
        candles: &[Candle],
        candle: &Candle,
    ) -> RequestPayload {
        let history = OhlcvHistory::from_candles(candles);
        let indicators = self.computer.compute(&history);
        let last_candle = candles.last().unwrap_or(candle).clone();
        RequestPayload::new(symbol, time_frame, Some(last_candle), history, indicators)
    }

    async fn request_score(&self, payload: &RequestPayload) -> f64 {
        let body = match serialize_payload(payload) {
            Ok(body) => body,
            Err(e) => {
                error!(symbol = %payload.symbol, error = %e, "Failed to serialize payload, using neutral score");
                return NEUTRAL_SCORE;
            }
        };

        match self.client.score(&body).await {
            Ok(score) => {
                info!(
                    symbol = %payload.symbol,
                    time_frame = %payload.time_frame,
                    score = score,
                    "Remote evaluation completed"
                );
                score
            }
            Err(e) => {
                error!(
                    symbol = %payload.symbol,
                    time_frame = %payload.time_frame,
                    url = %self.client.url(),
                    timeout = e.is_timeout(),
                    error = %e,
                    "Scoring request failed, using neutral score"
                );
                NEUTRAL_SCORE
            }
        }
    }
}
