//! Regression models for demand estimation

use crate::error::Result;
use std::fmt::Debug;

pub mod forest;
pub mod tree;

pub use forest::{RandomForestRegressor, TrainedRandomForest};
pub use tree::DecisionTreeRegressor;

/// A fitted regressor mapping a standardized feature row to a demand estimate
pub trait Regressor: Debug {
    /// Predict a single scalar from one feature row
    fn predict_row(&self, features: &[f64]) -> Result<f64>;

    /// Predict one scalar per row
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    /// Name of the model
    fn name(&self) -> &str;
}
