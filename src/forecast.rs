//! Recursive one-step-ahead demand forecasting

use crate::error::Result;
use crate::features::{FeatureRow, ROLLING_WINDOW};
use crate::model::Regressor;
use crate::scaler::StandardScaler;
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecasted day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Forecast date
    pub date: NaiveDate,
    /// Predicted demand in units
    pub predicted: f64,
}

/// Ordered multi-day forecast, one point per future day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Forecast points in chronological order
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Predicted values only
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    /// Forecast dates only
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Number of forecasted days
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the trajectory is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize the trajectory to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.points)
            .map_err(|e| crate::error::DemandError::Artifact(e.to_string()))
    }
}

/// Produce a multi-day forecast by feeding each prediction back in as a lag
///
/// Starting from `seed`, each iteration scales the current row, predicts one
/// step, and rewrites the history features from the prediction: `lag_1` and
/// `lag_7` both take the new prediction, and `rolling_mean_7` becomes the mean
/// of the trailing `min(7, k)` predictions made so far. The calendar fields
/// stay frozen at their seed values for the whole horizon. Dates advance one
/// day per step, starting the day after `reference_date`.
///
/// A horizon of zero yields an empty trajectory without touching the model.
pub fn forecast_trajectory(
    model: &dyn Regressor,
    scaler: &StandardScaler,
    seed: FeatureRow,
    reference_date: NaiveDate,
    horizon: usize,
) -> Result<Trajectory> {
    let mut row = seed;
    let mut predictions: Vec<f64> = Vec::with_capacity(horizon);
    let mut points = Vec::with_capacity(horizon);

    for date in future_dates(reference_date, horizon) {
        let scaled = scaler.transform_row(&row.to_vec())?;
        let predicted = model.predict_row(&scaled)?;
        predictions.push(predicted);
        points.push(TrajectoryPoint { date, predicted });

        // lag_7 deliberately tracks lag_1: the recurrence keeps no memory of
        // the prediction seven steps back
        row.lag_1 = predicted;
        row.lag_7 = predicted;
        let window = &predictions[predictions.len().saturating_sub(ROLLING_WINDOW)..];
        row.rolling_mean_7 = window.iter().sum::<f64>() / window.len() as f64;
    }

    Ok(Trajectory { points })
}
