//! Calendar and lag feature engineering

use crate::data::SalesHistory;
use crate::error::{DemandError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical feature names, in the order rows are laid out
pub const FEATURE_NAMES: [&str; 5] = ["month", "dayofweek", "lag_1", "lag_7", "rolling_mean_7"];

/// Trailing window length for the rolling mean feature
pub const ROLLING_WINDOW: usize = 7;

/// One fully populated model input row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Calendar month (1-12)
    pub month: f64,
    /// Day of week (Monday = 0)
    pub dayofweek: f64,
    /// Demand one step back
    pub lag_1: f64,
    /// Demand seven steps back
    pub lag_7: f64,
    /// Mean demand over the trailing seven steps
    pub rolling_mean_7: f64,
}

impl FeatureRow {
    /// Create a row with calendar fields taken from a date
    pub fn new(date: NaiveDate, lag_1: f64, lag_7: f64, rolling_mean_7: f64) -> Self {
        Self {
            month: date.month() as f64,
            dayofweek: date.weekday().num_days_from_monday() as f64,
            lag_1,
            lag_7,
            rolling_mean_7,
        }
    }

    /// Fields in canonical order
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.month,
            self.dayofweek,
            self.lag_1,
            self.lag_7,
            self.rolling_mean_7,
        ]
    }
}

/// Engineered feature rows with aligned targets and dates
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
    targets: Vec<f64>,
    dates: Vec<NaiveDate>,
}

impl FeatureMatrix {
    /// Engineer features from a sales history
    ///
    /// The first `ROLLING_WINDOW` observations only seed lags and the rolling
    /// mean; they produce no rows of their own.
    pub fn from_history(history: &SalesHistory) -> Result<Self> {
        let values = history.values();
        let dates = history.dates();

        if values.len() <= ROLLING_WINDOW {
            return Err(DemandError::Feature(format!(
                "Need more than {} observations to engineer lag features, got {}",
                ROLLING_WINDOW,
                values.len()
            )));
        }

        let mut rows = Vec::with_capacity(values.len() - ROLLING_WINDOW);
        let mut targets = Vec::with_capacity(values.len() - ROLLING_WINDOW);
        let mut row_dates = Vec::with_capacity(values.len() - ROLLING_WINDOW);

        for i in ROLLING_WINDOW..values.len() {
            // Trailing window ends at the current observation, pandas-style
            let window = &values[i + 1 - ROLLING_WINDOW..=i];
            let rolling_mean = window.iter().sum::<f64>() / window.len() as f64;

            rows.push(FeatureRow::new(
                dates[i],
                values[i - 1],
                values[i - ROLLING_WINDOW],
                rolling_mean,
            ));
            targets.push(values[i]);
            row_dates.push(dates[i]);
        }

        Ok(Self {
            rows,
            targets,
            dates: row_dates,
        })
    }

    /// Feature rows
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Target values aligned with the rows
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Observation dates aligned with the rows
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Rows as plain vectors, in canonical feature order
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }

    /// The most recent feature row, the seed for recursive forecasting
    pub fn last_row(&self) -> Option<FeatureRow> {
        self.rows.last().copied()
    }

    /// Date of the most recent row
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
