use chrono::NaiveDate;
use demand_forecast::data::DataLoader;
use demand_forecast::forecast::forecast_trajectory;
use demand_forecast::features::FeatureMatrix;
use demand_forecast::model::{RandomForestRegressor, Regressor};
use demand_forecast::persist::{load_artifacts, save_artifacts};
use demand_forecast::pipeline::{train, TrainingConfig};
use polars::prelude::*;

/// 100 daily observations with a weekly pattern and a mild trend
fn synthetic_sales() -> Vec<f64> {
    (0..100)
        .map(|i| {
            let weekly = 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin();
            100.0 + weekly + i as f64 * 0.3
        })
        .collect()
}

fn small_config() -> TrainingConfig {
    TrainingConfig {
        train_ratio: 0.8,
        forest: RandomForestRegressor::new(15, 6, 2).unwrap().with_seed(1),
        forecast_horizon: 10,
    }
}

#[test]
fn test_end_to_end_without_a_date_column() {
    let df = DataFrame::new(vec![Series::new("units_sold", synthetic_sales())]).unwrap();
    let history = DataLoader::from_dataframe(df).unwrap();

    // Synthetic daily index covers every row
    assert_eq!(history.len(), 100);
    assert_eq!(
        history.dates()[0],
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    );

    // Dropping undefined lag rows leaves 93, split 74/19
    let features = FeatureMatrix::from_history(&history).unwrap();
    assert_eq!(features.len(), 93);

    let outcome = train(&history, &small_config()).unwrap();
    assert_eq!(outcome.n_train, 74);
    assert_eq!(outcome.n_test, 19);

    let report = outcome.report.expect("test split should not be empty");
    assert!(report.rmse >= 0.0);
    assert!(report.mae >= 0.0);

    // Forecast starts the day after the last engineered row
    let trajectory = &outcome.trajectory;
    assert_eq!(trajectory.len(), 10);
    let last_date = features.last_date().unwrap();
    assert_eq!(trajectory.dates()[0], last_date + chrono::Duration::days(1));
    assert!(trajectory.values().iter().all(|v| v.is_finite()));
}

#[test]
fn test_horizon_one_matches_direct_prediction() {
    let df = DataFrame::new(vec![Series::new("units_sold", synthetic_sales())]).unwrap();
    let history = DataLoader::from_dataframe(df).unwrap();
    let features = FeatureMatrix::from_history(&history).unwrap();

    let outcome = train(&history, &small_config()).unwrap();
    let seed = features.last_row().unwrap();

    let direct = outcome
        .model
        .predict_row(&outcome.scaler.transform_row(&seed.to_vec()).unwrap())
        .unwrap();

    let trajectory = forecast_trajectory(
        &outcome.model,
        &outcome.scaler,
        seed,
        features.last_date().unwrap(),
        1,
    )
    .unwrap();

    assert_eq!(trajectory.values(), vec![direct]);
}

#[test]
fn test_trained_artifacts_survive_persistence() {
    let df = DataFrame::new(vec![Series::new("daily_sales", synthetic_sales())]).unwrap();
    let history = DataLoader::from_dataframe(df).unwrap();
    let features = FeatureMatrix::from_history(&history).unwrap();

    let outcome = train(&history, &small_config()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    save_artifacts(&outcome.model, &outcome.scaler, dir.path()).unwrap();

    let (model, scaler) = load_artifacts(dir.path()).unwrap();

    let seed = features.last_row().unwrap();
    let reference = features.last_date().unwrap();

    let before =
        forecast_trajectory(&outcome.model, &outcome.scaler, seed, reference, 14).unwrap();
    let after = forecast_trajectory(&model, &scaler, seed, reference, 14).unwrap();

    assert_eq!(before, after);
}
