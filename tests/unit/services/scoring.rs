//! Unit tests for score extraction and clamping

use request_evaluator::error::ScoringError;
use request_evaluator::services::{clamp_score, extract_score};
use serde_json::json;

#[test]
fn test_clamp_score() {
    assert_eq!(clamp_score(5.0), 1.0);
    assert_eq!(clamp_score(-3.2), -1.0);
    assert_eq!(clamp_score(0.4), 0.4);
    assert_eq!(clamp_score(1.0), 1.0);
    assert_eq!(clamp_score(-1.0), -1.0);
}

#[test]
fn test_extract_score_reads_configured_field() {
    assert_eq!(extract_score(&json!({"score": 0.73}), "score").unwrap(), 0.73);
    assert_eq!(
        extract_score(&json!({"custom_score": -2.0}), "custom_score").unwrap(),
        -1.0
    );
    assert_eq!(extract_score(&json!({"score": 1}), "score").unwrap(), 1.0);
}

#[test]
fn test_missing_score_reads_as_zero() {
    assert_eq!(extract_score(&json!({"other": 0.9}), "score").unwrap(), 0.0);
    assert_eq!(extract_score(&json!({"score": null}), "score").unwrap(), 0.0);
    assert_eq!(extract_score(&json!([0.9]), "score").unwrap(), 0.0);
}

#[test]
fn test_non_numeric_score_is_an_error() {
    let err = extract_score(&json!({"score": "high"}), "score").unwrap_err();
    assert!(matches!(err, ScoringError::NonNumericScore { ref field, .. } if field == "score"));

    assert!(extract_score(&json!({"score": {"value": 1}}), "score").is_err());
    assert!(extract_score(&json!({"score": true}), "score").is_err());
}
