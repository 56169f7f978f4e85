//! # Demand Forecast
//!
//! A Rust library for retail demand forecasting from historical sales data.
//!
//! ## Features
//!
//! - Sales history ingestion from CSV with date/target column detection
//! - Calendar and lag feature engineering (month, day of week, lags, rolling mean)
//! - Standardized features via a persisted per-feature scaler
//! - Random forest regression with reproducible fits
//! - Recursive one-step-ahead forecasting over a multi-day horizon
//! - Stock-sufficiency insights for interactive use
//!
//! ## Quick Start
//!
//! ```no_run
//! use demand_forecast::data::DataLoader;
//! use demand_forecast::pipeline::{train, TrainingConfig};
//! use demand_forecast::persist::save_artifacts;
//! use std::path::Path;
//!
//! # fn main() -> demand_forecast::Result<()> {
//! // Load historical sales data
//! let history = DataLoader::from_csv("sales.csv")?;
//!
//! // Train, evaluate, and forecast 30 days ahead
//! let outcome = train(&history, &TrainingConfig::default())?;
//!
//! if let Some(report) = &outcome.report {
//!     println!("RMSE: {:.2}", report.rmse);
//! }
//!
//! // Persist the fitted model and scaler for the interactive predictor
//! save_artifacts(&outcome.model, &outcome.scaler, Path::new("."))?;
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod features;
pub mod forecast;
pub mod insights;
pub mod metrics;
pub mod model;
pub mod persist;
pub mod pipeline;
pub mod scaler;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{DataLoader, SalesHistory};
pub use crate::error::{DemandError, Result};
pub use crate::features::{FeatureMatrix, FeatureRow, FEATURE_NAMES};
pub use crate::forecast::{forecast_trajectory, Trajectory};
pub use crate::insights::{ProductProfile, StockAdvice};
pub use crate::model::{RandomForestRegressor, Regressor, TrainedRandomForest};
pub use crate::scaler::StandardScaler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
