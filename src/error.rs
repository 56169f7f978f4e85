//! Error types for the demand_forecast crate

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum DemandError {
    /// Error related to data ingestion or validation
    #[error("Data error: {0}")]
    Data(String),

    /// Error related to feature engineering
    #[error("Feature error: {0}")]
    Feature(String),

    /// Feature width at prediction time differs from fit time
    #[error("Shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Error from model fitting or prediction
    #[error("Model error: {0}")]
    Model(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A persisted artifact file is missing
    #[error("Artifact not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// Error encoding or decoding a persisted artifact
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    Polars(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DemandError>;

impl From<PolarsError> for DemandError {
    fn from(err: PolarsError) -> Self {
        DemandError::Polars(err.to_string())
    }
}

impl From<bincode::Error> for DemandError {
    fn from(err: bincode::Error) -> Self {
        DemandError::Artifact(err.to_string())
    }
}
