use chrono::NaiveDate;
use demand_forecast::data::DataLoader;
use demand_forecast::error::DemandError;
use polars::prelude::*;
use std::io::Write;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_detects_target_by_substring() {
    let df = DataFrame::new(vec![
        Series::new("region", vec!["a", "b", "c"]),
        Series::new("units_sold", vec![10.0, 20.0, 30.0]),
    ])
    .unwrap();

    let history = DataLoader::from_dataframe(df).unwrap();
    assert_eq!(history.target_column(), "units_sold");
    assert_eq!(history.values(), &[10.0, 20.0, 30.0]);
}

#[test]
fn test_missing_target_column_is_fatal() {
    let df = DataFrame::new(vec![
        Series::new("date", vec!["2023-01-01", "2023-01-02"]),
        Series::new("temperature", vec![21.0, 22.0]),
    ])
    .unwrap();

    let err = DataLoader::from_dataframe(df).unwrap_err();
    assert!(matches!(err, DemandError::Data(_)));
}

#[test]
fn test_missing_date_column_uses_synthetic_index() {
    let df = DataFrame::new(vec![Series::new("demand", vec![1.0, 2.0, 3.0, 4.0])]).unwrap();

    let history = DataLoader::from_dataframe(df).unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history.dates()[0], date(2020, 1, 1));
    assert_eq!(history.dates()[3], date(2020, 1, 4));
}

#[test]
fn test_rows_are_sorted_chronologically() {
    let df = DataFrame::new(vec![
        Series::new("order_date", vec!["2023-01-03", "2023-01-01", "2023-01-02"]),
        Series::new("quantity", vec![3.0, 1.0, 2.0]),
    ])
    .unwrap();

    let history = DataLoader::from_dataframe(df).unwrap();
    assert_eq!(history.values(), &[1.0, 2.0, 3.0]);
    assert_eq!(history.last_date(), Some(date(2023, 1, 3)));
}

#[test]
fn test_missing_values_are_forward_filled() {
    let values = Series::new("sales", vec![Some(5.0), None, None, Some(8.0), None]);
    let df = DataFrame::new(vec![values]).unwrap();

    let history = DataLoader::from_dataframe(df).unwrap();
    assert_eq!(history.values(), &[5.0, 5.0, 5.0, 8.0, 8.0]);
}

#[test]
fn test_leading_missing_values_become_zero() {
    let values = Series::new("sales", vec![None, None, Some(4.0)]);
    let df = DataFrame::new(vec![values]).unwrap();

    let history = DataLoader::from_dataframe(df).unwrap();
    assert_eq!(history.values(), &[0.0, 0.0, 4.0]);
}

#[test]
fn test_load_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,units").unwrap();
    writeln!(file, "2023-05-01,12").unwrap();
    writeln!(file, "2023-05-02,15").unwrap();
    writeln!(file, "2023-05-03,11").unwrap();
    file.flush().unwrap();

    let history = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history.target_column(), "units");
    assert_eq!(history.dates()[0], date(2023, 5, 1));
    assert_eq!(history.values(), &[12.0, 15.0, 11.0]);
}
