//! Training pipeline entry point
//!
//! Loads a sales history CSV, trains the demand model, prints an evaluation
//! report and a 30-day forecast, and persists the model and scaler artifacts.

use demand_forecast::data::DataLoader;
use demand_forecast::error::DemandError;
use demand_forecast::persist::save_artifacts;
use demand_forecast::pipeline::{train, TrainingConfig};
use std::path::PathBuf;

fn main() -> demand_forecast::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next().ok_or_else(|| {
        DemandError::InvalidParameter("Usage: train <sales.csv> [output-dir]".to_string())
    })?;
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    println!("Demand Forecast: Training Pipeline");
    println!("==================================\n");

    let history = DataLoader::from_csv(&csv_path)?;
    println!(
        "Loaded {} observations of '{}' from {}",
        history.len(),
        history.target_column(),
        csv_path
    );

    let config = TrainingConfig::default();
    let outcome = train(&history, &config)?;

    println!(
        "Training samples: {}, testing samples: {}\n",
        outcome.n_train, outcome.n_test
    );

    match &outcome.report {
        Some(report) => {
            println!("Model performance:");
            println!("  RMSE: {:.2}", report.rmse);
            println!("  MAE:  {:.2}", report.mae);
            println!("  R2:   {:.3}", report.r2);
        }
        None => println!("Test split is empty, skipping evaluation"),
    }

    println!("\n{}-day demand forecast (first days):", config.forecast_horizon);
    for point in outcome.trajectory.points().iter().take(5) {
        println!("  {}  {:.2} units", point.date, point.predicted);
    }

    let (model_path, scaler_path) = save_artifacts(&outcome.model, &outcome.scaler, &out_dir)?;
    println!(
        "\nSaved model to {} and scaler to {}",
        model_path.display(),
        scaler_path.display()
    );

    Ok(())
}
