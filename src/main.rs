use std::sync::Arc;

use chrono::Utc;
use request_evaluator::config::EvaluatorConfig;
use request_evaluator::logging;
use request_evaluator::metrics::Metrics;
use request_evaluator::models::{Candle, EvalTime, TimeFrame};
use request_evaluator::services::{InMemoryOhlcvSource, RecordingSink};
use request_evaluator::RequestEvaluator;
use tracing::info;

const SYMBOL: &str = "BTC/USDT";
const EXCHANGE: &str = "demo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = EvaluatorConfig::from_env()?;
    info!(config = ?config, "Loaded configuration");

    let time_frame = TimeFrame::OneHour;
    let candles = synthetic_candles(config.history_length + 1, time_frame);
    // Newest candle is still in construction; evaluate the one before it
    let Some(trigger) = candles.iter().rev().nth(1).cloned() else {
        return Err("history_length must be at least 1".into());
    };

    let source = InMemoryOhlcvSource::new();
    source.insert(SYMBOL, time_frame, candles).await;

    let sink = Arc::new(RecordingSink::new());
    let metrics = Arc::new(Metrics::new()?);
    let evaluator = RequestEvaluator::new(config, source.shared(), sink.clone())?
        .with_metrics(metrics.clone());

    let result = evaluator
        .ohlcv_callback(EXCHANGE, EXCHANGE, "BTC", SYMBOL, time_frame, &trigger, false)
        .await?;

    println!("Evaluation for {} {}:", SYMBOL, time_frame);
    println!("  Score: {:.4}", result.score);
    match result.eval_time {
        EvalTime::Closed(ts) => println!("  Eval time: {}", ts),
        EvalTime::InConstruction => println!("  Eval time: in construction"),
    }
    println!("  Published evaluations: {}", sink.published().await.len());
    println!();
    print!("{}", metrics.export()?);

    Ok(())
}

/// Gently oscillating uptrend, newest last
fn synthetic_candles(count: usize, time_frame: TimeFrame) -> Vec<Candle> {
    let start = Utc::now() - time_frame.duration() * count as i32;
    (0..count)
        .map(|i| {
            let x = i as f64;
            let close = 100.0 + x * 0.5 + (x / 3.0).sin() * 2.0;
            let open = close - (x / 5.0).cos();
            Candle::new(
                open,
                open.max(close) + 0.4,
                open.min(close) - 0.4,
                close,
                1_000.0 + (x * 7.0) % 300.0,
                start + time_frame.duration() * i as i32,
            )
        })
        .collect()
}
