//! Sales history ingestion for demand forecasting

use crate::error::{DemandError, Result};
use chrono::NaiveDate;
use log::warn;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column name fragments that identify the date column
const DATE_HINTS: [&str; 2] = ["date", "time"];

/// Column name fragments that identify the target (demand) column
const TARGET_HINTS: [&str; 4] = ["demand", "sales", "quantity", "units"];

/// First day of the synthetic index used when no date column is present
const SYNTHETIC_START: (i32, u32, u32) = (2020, 1, 1);

/// Chronologically sorted demand series extracted from tabular sales data
#[derive(Debug, Clone)]
pub struct SalesHistory {
    /// Observation dates, strictly increasing
    dates: Vec<NaiveDate>,
    /// Demand values, one per date, missing values already filled
    values: Vec<f64>,
    /// Name of the column the values came from
    target_column: String,
}

/// Loader for tabular sales data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load sales history from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<SalesHistory> {
        let file = File::open(path.as_ref())?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(df)
    }

    /// Build sales history from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<SalesHistory> {
        let target_column = Self::detect_target_column(&df)?;
        let raw_values = column_as_f64_opts(&df, &target_column)?;

        let (mut dates, mut values) = match Self::detect_date_column(&df) {
            Some(date_column) => {
                let dates = column_as_dates(&df, &date_column)?;
                (dates, raw_values)
            }
            None => {
                warn!("No date column found, using sequential daily index");
                (synthetic_index(raw_values.len()), raw_values)
            }
        };

        // Sort chronologically before filling so forward-fill follows time order
        let mut order: Vec<usize> = (0..dates.len()).collect();
        order.sort_by_key(|&i| dates[i]);
        dates = order.iter().map(|&i| dates[i]).collect();
        values = order.iter().map(|&i| values[i]).collect();

        let values = forward_fill(values);

        Ok(SalesHistory {
            dates,
            values,
            target_column,
        })
    }

    /// Detect the date column by name substring
    fn detect_date_column(df: &DataFrame) -> Option<String> {
        df.get_column_names()
            .iter()
            .find(|name| {
                let lower = name.to_lowercase();
                DATE_HINTS.iter().any(|hint| lower.contains(hint))
            })
            .map(|name| name.to_string())
    }

    /// Detect the target column by name substring; absence is fatal
    fn detect_target_column(df: &DataFrame) -> Result<String> {
        df.get_column_names()
            .iter()
            .find(|name| {
                let lower = name.to_lowercase();
                TARGET_HINTS.iter().any(|hint| lower.contains(hint))
            })
            .map(|name| name.to_string())
            .ok_or_else(|| {
                DemandError::Data(
                    "No demand/sales/quantity/units column found in data".to_string(),
                )
            })
    }
}

impl SalesHistory {
    /// Create sales history directly from dates and values (for testing)
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>, target_column: &str) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(DemandError::Data(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }

        Ok(Self {
            dates,
            values,
            target_column: target_column.to_string(),
        })
    }

    /// Observation dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Demand values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Name of the target column
    pub fn target_column(&self) -> &str {
        &self.target_column
    }

    /// Last known observation date
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sequential daily index starting at the synthetic origin
fn synthetic_index(len: usize) -> Vec<NaiveDate> {
    let (y, m, d) = SYNTHETIC_START;
    let start = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    (0..len)
        .map(|i| start + chrono::Duration::days(i as i64))
        .collect()
}

/// Forward-fill missing values, then fill any leading holes with zero
fn forward_fill(values: Vec<Option<f64>>) -> Vec<f64> {
    let mut filled = Vec::with_capacity(values.len());
    let mut last: Option<f64> = None;

    for value in values {
        let v = match value.or(last) {
            Some(v) => v,
            None => 0.0,
        };
        filled.push(v);
        last = Some(v);
    }

    filled
}

/// Extract a column as optional f64 values, preserving missing entries
fn column_as_f64_opts(df: &DataFrame, column_name: &str) -> Result<Vec<Option<f64>>> {
    let col = df.column(column_name).map_err(|e| {
        DemandError::Data(format!("Column '{}' not found: {}", column_name, e))
    })?;

    match col.dtype() {
        DataType::Float64 => Ok(col.f64().unwrap().into_iter().collect()),
        DataType::Float32 => Ok(col
            .f32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::Int64 => Ok(col
            .i64()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::Int32 => Ok(col
            .i32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::UInt64 => Ok(col
            .u64()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        DataType::UInt32 => Ok(col
            .u32()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|v| v as f64))
            .collect()),
        _ => Err(DemandError::Data(format!(
            "Column '{}' cannot be converted to f64",
            column_name
        ))),
    }
}

/// Extract a column as calendar dates
fn column_as_dates(df: &DataFrame, column_name: &str) -> Result<Vec<NaiveDate>> {
    let col = df.column(column_name).map_err(|e| {
        DemandError::Data(format!("Column '{}' not found: {}", column_name, e))
    })?;

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();

    match col.dtype() {
        DataType::Utf8 => col
            .utf8()
            .unwrap()
            .into_iter()
            .map(|opt| {
                let s = opt.ok_or_else(|| {
                    DemandError::Data(format!("Missing date in column '{}'", column_name))
                })?;
                parse_date(s).ok_or_else(|| {
                    DemandError::Data(format!("Could not parse date '{}'", s))
                })
            })
            .collect(),
        DataType::Date => col
            .date()
            .unwrap()
            .into_iter()
            .map(|opt| {
                opt.map(|days| epoch + chrono::Duration::days(days as i64))
                    .ok_or_else(|| {
                        DemandError::Data(format!("Missing date in column '{}'", column_name))
                    })
            })
            .collect(),
        DataType::Datetime(time_unit, _) => {
            let divisor = match time_unit {
                TimeUnit::Nanoseconds => 1_000_000_000_i64,
                TimeUnit::Microseconds => 1_000_000_i64,
                TimeUnit::Milliseconds => 1_000_i64,
            };
            col.datetime()
                .unwrap()
                .into_iter()
                .map(|opt| {
                    opt.map(|ts| epoch + chrono::Duration::seconds(ts / divisor))
                        .ok_or_else(|| {
                            DemandError::Data(format!(
                                "Missing date in column '{}'",
                                column_name
                            ))
                        })
                })
                .collect()
        }
        _ => Err(DemandError::Data(format!(
            "Column '{}' cannot be interpreted as dates",
            column_name
        ))),
    }
}

/// Parse a date string in the common formats seen in sales exports
fn parse_date(s: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // Timestamps like "2020-01-01 00:00:00" keep only the date part
    s.split_whitespace()
        .next()
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
