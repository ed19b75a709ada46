//! Prometheus metrics for the scoring integration

use prometheus::{Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub scoring_requests_total: IntCounter,
    pub scoring_failures_total: IntCounter,
    pub scoring_request_duration_seconds: Histogram,
    pub last_evaluation_score: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scoring_requests_total = IntCounter::new(
            "scoring_requests_total",
            "Requests sent to the scoring endpoint",
        )?;
        let scoring_failures_total = IntCounter::new(
            "scoring_failures_total",
            "Scoring requests that fell back to the neutral score",
        )?;
        let scoring_request_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "scoring_request_duration_seconds",
                "Round-trip time of scoring requests",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 120.0]),
        )?;
        let last_evaluation_score = Gauge::new(
            "last_evaluation_score",
            "Most recently published evaluation score",
        )?;

        registry.register(Box::new(scoring_requests_total.clone()))?;
        registry.register(Box::new(scoring_failures_total.clone()))?;
        registry.register(Box::new(scoring_request_duration_seconds.clone()))?;
        registry.register(Box::new(last_evaluation_score.clone()))?;

        Ok(Self {
            registry,
            scoring_requests_total,
            scoring_failures_total,
            scoring_request_duration_seconds,
            last_evaluation_score,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
