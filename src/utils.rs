//! Utility functions for the demand_forecast crate

use crate::error::{DemandError, Result};
use chrono::{Duration, NaiveDate};

/// Split rows and targets chronologically, training split first
///
/// The split point is `floor(train_ratio * n)`, matching a time-based split
/// where the most recent observations form the test set.
pub fn chronological_split<'a>(
    rows: &'a [Vec<f64>],
    targets: &'a [f64],
    train_ratio: f64,
) -> Result<(&'a [Vec<f64>], &'a [Vec<f64>], &'a [f64], &'a [f64])> {
    if rows.len() != targets.len() {
        return Err(DemandError::Data(format!(
            "Rows ({}) don't match targets ({})",
            rows.len(),
            targets.len()
        )));
    }
    if !(0.0..=1.0).contains(&train_ratio) {
        return Err(DemandError::InvalidParameter(
            "Train ratio must be between 0 and 1".to_string(),
        ));
    }

    let split_point = (rows.len() as f64 * train_ratio) as usize;

    Ok((
        &rows[..split_point],
        &rows[split_point..],
        &targets[..split_point],
        &targets[split_point..],
    ))
}

/// Consecutive daily dates starting the day after `last_date`
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as i64)
        .map(|offset| last_date + Duration::days(offset))
        .collect()
}
