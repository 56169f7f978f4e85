//! Interactive demand predictor
//!
//! Loads the persisted model and scaler, asks for product and market details
//! on stdin, and prints a demand prediction, a stock recommendation, and an
//! optional multi-day forecast. Empty input accepts the shown default.

use demand_forecast::error::Result;
use demand_forecast::forecast::forecast_trajectory;
use demand_forecast::insights::{ProductProfile, StockAdvice};
use demand_forecast::model::Regressor;
use demand_forecast::persist::load_artifacts;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Width of the text bar chart in characters
const CHART_WIDTH: usize = 40;

fn main() -> Result<()> {
    env_logger::init();

    let artifact_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let (model, scaler) = load_artifacts(&artifact_dir)?;

    println!("Demand Forecasting Dashboard");
    println!("============================");
    println!("Enter product and market details to predict future demand.");
    println!("Press Enter to accept the default shown in brackets.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let defaults = ProductProfile::default();

    let profile = ProductProfile {
        name: prompt_string(&mut input, "Product name", &defaults.name)?,
        stock: prompt(&mut input, "Current stock (units)", defaults.stock)?,
        cost_price: prompt(&mut input, "Cost price (per unit)", defaults.cost_price)?,
        selling_price: prompt(&mut input, "Selling price (per unit)", defaults.selling_price)?,
        supplier_rating: prompt(&mut input, "Supplier reliability (1-10)", defaults.supplier_rating)?,
        sales_velocity: prompt(
            &mut input,
            "Avg daily sales velocity (units/day)",
            defaults.sales_velocity,
        )?,
        days_to_expire: prompt(&mut input, "Days until expiration", defaults.days_to_expire)?,
        seasonal_index: prompt(&mut input, "Seasonal demand factor (1-5)", defaults.seasonal_index)?,
        marketing_boost: prompt(&mut input, "Marketing impact (1-5)", defaults.marketing_boost)?,
        competitor_intensity: prompt(&mut input, "Competition level (1-5)", defaults.competitor_intensity)?,
    };

    let today = chrono::Local::now().date_naive();
    let seed = profile.seed_features(today);

    let scaled = scaler.transform_row(&seed.to_vec())?;
    let predicted = model.predict_row(&scaled)?;

    println!("\nPredicted demand for {}", profile.name);
    println!("  Estimated units (next period): {:.2}", predicted);

    let advice = StockAdvice::from_prediction(predicted, profile.stock);
    println!("  {}", advice.message());

    let horizon: usize = prompt(&mut input, "\nForecast how many days ahead? (7-60)", 30)?;
    let horizon = horizon.clamp(7, 60);

    let trajectory = forecast_trajectory(&model, &scaler, seed, today, horizon)?;
    let max = trajectory
        .values()
        .into_iter()
        .fold(f64::MIN, f64::max)
        .max(1.0);

    println!("\n{}-day forecast:", horizon);
    for point in trajectory.points() {
        let bar = (point.predicted / max * CHART_WIDTH as f64).round().max(0.0) as usize;
        println!(
            "  {}  {:>8.2}  {}",
            point.date,
            point.predicted,
            "#".repeat(bar)
        );
    }

    Ok(())
}

/// Prompt for a value, accepting the default on empty input
fn prompt<R: BufRead, T: FromStr + std::fmt::Display>(
    input: &mut R,
    label: &str,
    default: T,
) -> Result<T> {
    loop {
        print!("{} [{}]: ", label, default);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like accepting every remaining default
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Could not parse '{}', try again.", trimmed),
        }
    }
}

/// Prompt for a free-form string, accepting the default on empty input
fn prompt_string<R: BufRead>(input: &mut R, label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
