use assert_approx_eq::assert_approx_eq;
use demand_forecast::metrics::evaluate;

#[test]
fn test_perfect_predictions() {
    let actual = vec![10.0, 20.0, 30.0];
    let report = evaluate(&actual, &actual).unwrap();

    assert_approx_eq!(report.mae, 0.0);
    assert_approx_eq!(report.mse, 0.0);
    assert_approx_eq!(report.rmse, 0.0);
    assert_approx_eq!(report.r2, 1.0);
}

#[test]
fn test_known_error_values() {
    let predicted = vec![11.0, 19.0, 32.0];
    let actual = vec![10.0, 20.0, 30.0];
    let report = evaluate(&predicted, &actual).unwrap();

    assert_approx_eq!(report.mae, (1.0 + 1.0 + 2.0) / 3.0);
    assert_approx_eq!(report.mse, (1.0 + 1.0 + 4.0) / 3.0);
    assert_approx_eq!(report.rmse, report.mse.sqrt());
}

#[test]
fn test_r2_for_mean_predictor_is_zero() {
    let actual = vec![10.0, 20.0, 30.0];
    let predicted = vec![20.0, 20.0, 20.0];
    let report = evaluate(&predicted, &actual).unwrap();

    assert_approx_eq!(report.r2, 0.0);
}

#[test]
fn test_constant_actuals_have_zero_r2() {
    let report = evaluate(&[5.0, 5.0], &[5.0, 5.0]).unwrap();
    assert_approx_eq!(report.r2, 0.0);
}

#[test]
fn test_length_mismatch_is_rejected() {
    assert!(evaluate(&[1.0, 2.0], &[1.0]).is_err());
    assert!(evaluate(&[], &[]).is_err());
}
