//! Publishing evaluations to the host decision pipeline

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::evaluation::EvaluationResult;
use crate::models::timeframe::TimeFrame;

#[async_trait]
pub trait EvaluationSink: Send + Sync {
    async fn evaluation_completed(
        &self,
        cryptocurrency: &str,
        symbol: &str,
        time_frame: TimeFrame,
        result: &EvaluationResult,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Published evaluation, as recorded by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvaluation {
    pub cryptocurrency: String,
    pub symbol: String,
    pub time_frame: TimeFrame,
    pub result: EvaluationResult,
}

/// Sink that keeps every published evaluation in memory
#[derive(Default)]
pub struct RecordingSink {
    published: Mutex<Vec<PublishedEvaluation>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn published(&self) -> Vec<PublishedEvaluation> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl EvaluationSink for RecordingSink {
    async fn evaluation_completed(
        &self,
        cryptocurrency: &str,
        symbol: &str,
        time_frame: TimeFrame,
        result: &EvaluationResult,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.published.lock().await.push(PublishedEvaluation {
            cryptocurrency: cryptocurrency.to_string(),
            symbol: symbol.to_string(),
            time_frame,
            result: result.clone(),
        });
        Ok(())
    }
}
