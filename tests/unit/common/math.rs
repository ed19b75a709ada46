//! Unit tests for rolling-window math helpers

use request_evaluator::common::math::*;

use crate::test_utils::assert_close;

#[test]
fn test_rolling_mean() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(rolling_mean(&values, 2), vec![1.5, 2.5, 3.5, 4.5]);
    assert_eq!(rolling_mean(&values, 5), vec![3.0]);
}

#[test]
fn test_rolling_mean_insufficient_data() {
    assert!(rolling_mean(&[1.0, 2.0], 3).is_empty());
    assert!(rolling_mean(&[1.0, 2.0], 0).is_empty());
    assert!(rolling_mean(&[], 1).is_empty());
}

#[test]
fn test_population_std_dev() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_close(population_std_dev(&values).unwrap(), 2.0);
    assert!(population_std_dev(&[]).is_none());
}

#[test]
fn test_true_range_uses_previous_close() {
    assert_eq!(true_range(10.0, 8.0, 9.0), 2.0);
    assert_eq!(true_range(10.0, 8.0, 12.0), 4.0);
    assert_eq!(true_range(10.0, 8.0, 5.0), 5.0);
}

#[test]
fn test_ema_step() {
    assert_close(ema_alpha(9), 0.2);
    assert_close(ema_step(20.0, 10.0, 0.2), 12.0);
}

#[test]
fn test_min_max() {
    assert_eq!(min_max(&[3.0, -1.0, 7.0, 2.0]), Some((-1.0, 7.0)));
    assert_eq!(min_max(&[]), None);
}
