//! Unit tests for the in-memory candle source and recording sink

use request_evaluator::models::{EvalTime, EvaluationResult, TimeFrame};
use request_evaluator::services::{EvaluationSink, InMemoryOhlcvSource, OhlcvSource, RecordingSink};
use tokio_test::{assert_ok, block_on};

use crate::test_utils::create_trending_candles;

#[tokio::test]
async fn test_window_excludes_candle_in_construction() {
    let source = InMemoryOhlcvSource::new();
    source
        .insert("BTC/USDT", TimeFrame::OneHour, create_trending_candles(10, 100.0, 1.0))
        .await;

    let closed = source
        .get_candles("binance", "binance-1", "BTC/USDT", TimeFrame::OneHour, 60, false)
        .await
        .unwrap();
    assert_eq!(closed.len(), 9);
    assert_eq!(closed.last().unwrap().close, 108.0);

    let live = source
        .get_candles("binance", "binance-1", "BTC/USDT", TimeFrame::OneHour, 60, true)
        .await
        .unwrap();
    assert_eq!(live.len(), 10);
    assert_eq!(live.last().unwrap().close, 109.0);
}

#[tokio::test]
async fn test_window_is_limited_to_most_recent() {
    let source = InMemoryOhlcvSource::new();
    source
        .insert("BTC/USDT", TimeFrame::OneHour, create_trending_candles(10, 100.0, 1.0))
        .await;

    let window = source
        .get_candles("binance", "binance-1", "BTC/USDT", TimeFrame::OneHour, 3, false)
        .await
        .unwrap();
    let closes: Vec<f64> = window.iter().map(|c| c.close).collect();
    assert_eq!(closes, vec![106.0, 107.0, 108.0]);
}

#[tokio::test]
async fn test_unknown_series_is_empty() {
    let source = InMemoryOhlcvSource::new();
    let window = source
        .get_candles("binance", "binance-1", "ETH/USDT", TimeFrame::OneDay, 60, false)
        .await
        .unwrap();
    assert!(window.is_empty());
}

#[tokio::test]
async fn test_push_replaces_same_timestamp() {
    let source = InMemoryOhlcvSource::new();
    let mut candles = create_trending_candles(3, 100.0, 1.0);
    source.insert("BTC/USDT", TimeFrame::OneHour, candles.clone()).await;

    candles[2].close = 250.0;
    source.push("BTC/USDT", TimeFrame::OneHour, candles[2].clone()).await;

    let all = source
        .get_candles("binance", "binance-1", "BTC/USDT", TimeFrame::OneHour, 60, true)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].close, 250.0);
}

#[test]
fn test_recording_sink_keeps_order() {
    let sink = RecordingSink::new();
    let first = EvaluationResult::new(0.5, EvalTime::InConstruction);
    let second = EvaluationResult::neutral(EvalTime::InConstruction);

    block_on(async {
        assert_ok!(
            sink.evaluation_completed("BTC", "BTC/USDT", TimeFrame::OneHour, &first)
                .await
        );
        assert_ok!(
            sink.evaluation_completed("ETH", "ETH/USDT", TimeFrame::FourHours, &second)
                .await
        );
    });

    let published = block_on(sink.published());
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].symbol, "BTC/USDT");
    assert_eq!(published[0].result.score, 0.5);
    assert_eq!(published[1].time_frame, TimeFrame::FourHours);
    assert_eq!(published[1].result.score, 0.0);
}
