use demand_forecast::error::DemandError;
use demand_forecast::model::{RandomForestRegressor, Regressor};
use demand_forecast::persist::{load_artifacts, save_artifacts, MODEL_FILE};
use demand_forecast::scaler::StandardScaler;
use pretty_assertions::assert_eq;

fn fitted_artifacts() -> (demand_forecast::TrainedRandomForest, StandardScaler) {
    let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64, (i % 3) as f64]).collect();
    let y: Vec<f64> = x.iter().map(|row| row[0] * 2.0 + row[1]).collect();

    let scaler = StandardScaler::fit(&x, &["a", "b"]).unwrap();
    let scaled = scaler.transform(&x).unwrap();
    let model = RandomForestRegressor::new(10, 6, 2)
        .unwrap()
        .fit(&scaled, &y)
        .unwrap();

    (model, scaler)
}

#[test]
fn test_artifact_round_trip_preserves_predictions() {
    let (model, scaler) = fitted_artifacts();
    let dir = tempfile::tempdir().unwrap();

    save_artifacts(&model, &scaler, dir.path()).unwrap();
    let (loaded_model, loaded_scaler) = load_artifacts(dir.path()).unwrap();

    assert_eq!(loaded_model, model);
    assert_eq!(loaded_scaler, scaler);

    let probe = loaded_scaler.transform_row(&[12.0, 1.0]).unwrap();
    assert_eq!(
        loaded_model.predict_row(&probe).unwrap(),
        model.predict_row(&probe).unwrap()
    );
}

#[test]
fn test_missing_artifacts_are_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_artifacts(dir.path()).unwrap_err();
    match err {
        DemandError::ArtifactMissing(path) => {
            assert!(path.ends_with(MODEL_FILE));
        }
        other => panic!("expected missing artifact error, got {:?}", other),
    }
}

#[test]
fn test_missing_scaler_alone_is_fatal() {
    let (model, scaler) = fitted_artifacts();
    let dir = tempfile::tempdir().unwrap();

    save_artifacts(&model, &scaler, dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(demand_forecast::persist::SCALER_FILE)).unwrap();

    assert!(matches!(
        load_artifacts(dir.path()).unwrap_err(),
        DemandError::ArtifactMissing(_)
    ));
}
