//! Artifact persistence for the trained model and scaler

use crate::error::{DemandError, Result};
use crate::model::TrainedRandomForest;
use crate::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name for the persisted model
pub const MODEL_FILE: &str = "demand_forecast_model.bin";

/// Default file name for the persisted scaler
pub const SCALER_FILE: &str = "scaler.bin";

/// Write both artifacts into `dir`, returning their paths
pub fn save_artifacts(
    model: &TrainedRandomForest,
    scaler: &StandardScaler,
    dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;
    let model_path = dir.join(MODEL_FILE);
    let scaler_path = dir.join(SCALER_FILE);

    save_blob(model, &model_path)?;
    save_blob(scaler, &scaler_path)?;

    Ok((model_path, scaler_path))
}

/// Load both artifacts from `dir`; missing files are fatal
pub fn load_artifacts(dir: &Path) -> Result<(TrainedRandomForest, StandardScaler)> {
    let model = load_blob(&dir.join(MODEL_FILE))?;
    let scaler = load_blob(&dir.join(SCALER_FILE))?;
    Ok((model, scaler))
}

/// Serialize a single artifact to disk
pub fn save_blob<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let bytes = bincode::serialize(value)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a single artifact back from disk
pub fn load_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DemandError::ArtifactMissing(path.to_path_buf()),
        _ => DemandError::Io(e),
    })?;

    Ok(bincode::deserialize(&bytes)?)
}
