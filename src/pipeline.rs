//! End-to-end training pipeline

use crate::data::SalesHistory;
use crate::error::{DemandError, Result};
use crate::features::{FeatureMatrix, FEATURE_NAMES};
use crate::forecast::{forecast_trajectory, Trajectory};
use crate::metrics::{evaluate, RegressionReport};
use crate::model::{RandomForestRegressor, Regressor, TrainedRandomForest};
use crate::scaler::StandardScaler;
use crate::utils::chronological_split;

/// Training pipeline configuration
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Fraction of feature rows used for training
    pub train_ratio: f64,
    /// Forest configuration
    pub forest: RandomForestRegressor,
    /// Days to forecast past the end of the history
    pub forecast_horizon: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            forest: RandomForestRegressor::default(),
            forecast_horizon: 30,
        }
    }
}

/// Everything the training pipeline produces
#[derive(Debug)]
pub struct TrainingOutcome {
    /// Fitted forest
    pub model: TrainedRandomForest,
    /// Scaler fit on the training rows only
    pub scaler: StandardScaler,
    /// Test-set evaluation, absent when the test split is empty
    pub report: Option<RegressionReport>,
    /// Recursive forecast from the last known feature row
    pub trajectory: Trajectory,
    /// Number of training rows
    pub n_train: usize,
    /// Number of test rows
    pub n_test: usize,
}

/// Run the whole pipeline: engineer, split, scale, fit, evaluate, forecast
pub fn train(history: &SalesHistory, config: &TrainingConfig) -> Result<TrainingOutcome> {
    let features = FeatureMatrix::from_history(history)?;
    let matrix = features.to_matrix();

    let (x_train, x_test, y_train, y_test) =
        chronological_split(&matrix, features.targets(), config.train_ratio)?;

    let scaler = StandardScaler::fit(x_train, &FEATURE_NAMES)?;
    let x_train_scaled = scaler.transform(x_train)?;
    let x_test_scaled = scaler.transform(x_test)?;

    let model = config.forest.fit(&x_train_scaled, y_train)?;

    let report = if y_test.is_empty() {
        None
    } else {
        let predicted = model.predict(&x_test_scaled)?;
        Some(evaluate(&predicted, y_test)?)
    };

    let seed = features
        .last_row()
        .ok_or_else(|| DemandError::Feature("No feature rows to forecast from".to_string()))?;
    let reference_date = features
        .last_date()
        .ok_or_else(|| DemandError::Feature("No dates to forecast from".to_string()))?;

    let trajectory = forecast_trajectory(
        &model,
        &scaler,
        seed,
        reference_date,
        config.forecast_horizon,
    )?;

    Ok(TrainingOutcome {
        model,
        scaler,
        report,
        trajectory,
        n_train: x_train.len(),
        n_test: x_test.len(),
    })
}
