//! Integration tests for the scoring client against a mocked endpoint

use std::time::Duration;

use request_evaluator::config::EvaluatorConfig;
use request_evaluator::error::ScoringError;
use request_evaluator::services::ScoringClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{config_for, mock_score_response, unreachable_url, SCORE_PATH};

#[tokio::test]
async fn returns_score_from_response_body() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"score": 0.73})),
    )
    .await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    let score = client.score(&json!({"symbol": "BTC/USDT"})).await.unwrap();
    assert_eq!(score, 0.73);
}

#[tokio::test]
async fn reads_custom_score_field_and_clamps() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"custom_score": -2.0, "score": 0.5})),
    )
    .await;

    let config = EvaluatorConfig {
        score_field: "custom_score".to_string(),
        ..config_for(&server)
    };
    let client = ScoringClient::new(&config).unwrap();
    assert_eq!(client.score(&json!({})).await.unwrap(), -1.0);
}

#[tokio::test]
async fn missing_score_field_reads_as_zero() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"confidence": 0.9})),
    )
    .await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.score(&json!({})).await.unwrap(), 0.0);
}

#[tokio::test]
async fn posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCORE_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": 0.1})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = json!({"symbol": "ETH/USDT", "atr": [1.0, 2.0]});
    let client = ScoringClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.score(&payload).await.unwrap(), 0.1);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn server_error_is_reported_once_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCORE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    let err = client.score(&json!({})).await.unwrap_err();
    assert!(matches!(err, ScoringError::Status { status: 500, ref body } if body == "boom"));
}

#[tokio::test]
async fn non_json_body_is_invalid() {
    let server = MockServer::start().await;
    mock_score_response(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    let err = client.score(&json!({})).await.unwrap_err();
    assert!(matches!(err, ScoringError::InvalidBody(_)));
}

#[tokio::test]
async fn non_numeric_score_is_an_error() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"score": "bullish"})),
    )
    .await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    let err = client.score(&json!({})).await.unwrap_err();
    assert!(matches!(err, ScoringError::NonNumericScore { .. }));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"score": 0.9}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = ScoringClient::new(&config_for(&server)).unwrap();
    let err = client.score(&json!({})).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {}", err);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let config = EvaluatorConfig {
        url: unreachable_url(),
        timeout: 1.0,
        ..EvaluatorConfig::default()
    };
    let client = ScoringClient::new(&config).unwrap();
    let err = client.score(&json!({})).await.unwrap_err();
    assert!(matches!(err, ScoringError::Transport(_)));
}

#[tokio::test]
async fn basic_auth_header_is_attached_when_enabled() {
    let server = MockServer::start().await;
    // base64("user:pass")
    Mock::given(method("POST"))
        .and(path(SCORE_PATH))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": 0.5})))
        .expect(1)
        .mount(&server)
        .await;

    let config = EvaluatorConfig {
        basic_auth: true,
        auth_username: "user".to_string(),
        auth_password: "pass".to_string(),
        ..config_for(&server)
    };
    let client = ScoringClient::new(&config).unwrap();
    assert_eq!(client.score(&json!({})).await.unwrap(), 0.5);
}

#[tokio::test]
async fn no_credentials_sent_when_basic_auth_disabled() {
    let server = MockServer::start().await;
    mock_score_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"score": 0.2})),
    )
    .await;

    let config = EvaluatorConfig {
        basic_auth: false,
        auth_username: "user".to_string(),
        auth_password: "pass".to_string(),
        ..config_for(&server)
    };
    let client = ScoringClient::new(&config).unwrap();
    client.score(&json!({})).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}
