//! Per-feature standardization, fit once on training data

use crate::error::{DemandError, Result};
use serde::{Deserialize, Serialize};

/// Affine per-feature transform: subtract mean, divide by standard deviation
///
/// Fit once by the training pipeline and reused unchanged at prediction time.
/// The feature order and count supplied to [`StandardScaler::transform_row`]
/// must match what the scaler was fit on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Names of the features the scaler was fit on, in order
    feature_names: Vec<String>,
    /// Per-feature means
    means: Vec<f64>,
    /// Per-feature standard deviations; zero-variance features keep 1.0
    scales: Vec<f64>,
}

impl StandardScaler {
    /// Fit the scaler on training rows
    pub fn fit(rows: &[Vec<f64>], feature_names: &[&str]) -> Result<Self> {
        if rows.is_empty() {
            return Err(DemandError::Data(
                "Cannot fit scaler on empty training data".to_string(),
            ));
        }

        let width = feature_names.len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(DemandError::Data(format!(
                "All rows must have {} features to fit the scaler",
                width
            )));
        }

        let n = rows.len() as f64;
        let mut means = vec![0.0; width];
        let mut scales = vec![0.0; width];

        for row in rows {
            for (j, value) in row.iter().enumerate() {
                means[j] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        for row in rows {
            for (j, value) in row.iter().enumerate() {
                scales[j] += (value - means[j]).powi(2);
            }
        }
        for scale in &mut scales {
            // Population standard deviation; constant features pass through
            *scale = (*scale / n).sqrt();
            if *scale == 0.0 {
                *scale = 1.0;
            }
        }

        Ok(Self {
            feature_names: feature_names.iter().map(|s| s.to_string()).collect(),
            means,
            scales,
        })
    }

    /// Standardize one row; fails if the width differs from fit time
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.means.len() {
            return Err(DemandError::ShapeMismatch {
                expected: self.means.len(),
                got: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(value, (mean, scale))| (value - mean) / scale)
            .collect())
    }

    /// Standardize a batch of rows
    pub fn transform(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    /// Number of features the scaler was fit on
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Names of the features the scaler was fit on
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Per-feature means
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Per-feature standard deviations
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }
}
