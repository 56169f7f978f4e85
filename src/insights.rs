//! Interactive input surface and stock-sufficiency insights

use crate::features::FeatureRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fraction of sales velocity standing in for yesterday's demand
const LAG_1_FACTOR: f64 = 0.95;

/// Fraction of sales velocity standing in for demand a week ago
const LAG_7_FACTOR: f64 = 0.85;

/// User-entered product attributes
///
/// Only `sales_velocity` feeds the model, as a proxy for the lag features.
/// The remaining business fields drive the stock advice and display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Product name, a display label only
    pub name: String,
    /// Current stock in units
    pub stock: f64,
    /// Cost price per unit
    pub cost_price: f64,
    /// Selling price per unit
    pub selling_price: f64,
    /// Supplier reliability, 1-10
    pub supplier_rating: u8,
    /// Average daily sales velocity in units per day
    pub sales_velocity: f64,
    /// Days until the product expires
    pub days_to_expire: u32,
    /// Seasonal demand factor, 1-5
    pub seasonal_index: u8,
    /// Promotion and marketing impact, 1-5
    pub marketing_boost: u8,
    /// Competition level, 1-5
    pub competitor_intensity: u8,
}

impl Default for ProductProfile {
    fn default() -> Self {
        Self {
            name: "Almonds".to_string(),
            stock: 100.0,
            cost_price: 5.0,
            selling_price: 7.0,
            supplier_rating: 8,
            sales_velocity: 120.0,
            days_to_expire: 30,
            seasonal_index: 3,
            marketing_boost: 2,
            competitor_intensity: 3,
        }
    }
}

impl ProductProfile {
    /// Build the model input row from today's calendar and the sales velocity
    ///
    /// Lag features are simulated from the velocity since the interactive
    /// surface has no access to real history: `lag_1` is 95% of velocity,
    /// `lag_7` is 85%, and the rolling mean is their midpoint.
    pub fn seed_features(&self, today: NaiveDate) -> FeatureRow {
        let lag_1 = self.sales_velocity * LAG_1_FACTOR;
        let lag_7 = self.sales_velocity * LAG_7_FACTOR;
        let rolling_mean_7 = (lag_1 + lag_7) / 2.0;

        FeatureRow::new(today, lag_1, lag_7, rolling_mean_7)
    }
}

/// Three-way stock recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAdvice {
    /// Predicted demand exceeds current stock
    Reorder,
    /// Predicted demand is below half of current stock
    Sufficient,
    /// Anything in between
    Stable,
}

impl StockAdvice {
    /// Classify predicted demand against current stock
    pub fn from_prediction(predicted: f64, stock: f64) -> Self {
        if predicted > stock {
            StockAdvice::Reorder
        } else if predicted < stock * 0.5 {
            StockAdvice::Sufficient
        } else {
            StockAdvice::Stable
        }
    }

    /// Human-readable recommendation
    pub fn message(&self) -> &'static str {
        match self {
            StockAdvice::Reorder => "Stock may run out soon, consider reordering",
            StockAdvice::Sufficient => "Stock levels are sufficient for the forecast period",
            StockAdvice::Stable => "Maintain current stock; demand seems stable",
        }
    }
}
