use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use demand_forecast::insights::{ProductProfile, StockAdvice};
use rstest::rstest;

#[test]
fn test_seed_features_from_velocity() {
    let profile = ProductProfile {
        sales_velocity: 120.0,
        ..ProductProfile::default()
    };
    let today = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(); // a Monday

    let row = profile.seed_features(today);
    assert_approx_eq!(row.lag_1, 114.0);
    assert_approx_eq!(row.lag_7, 102.0);
    assert_approx_eq!(row.rolling_mean_7, 108.0);
    assert_eq!(row.month, 6.0);
    assert_eq!(row.dayofweek, 0.0);
}

#[test]
fn test_business_fields_do_not_affect_features() {
    let today = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();

    let a = ProductProfile {
        sales_velocity: 120.0,
        ..ProductProfile::default()
    };
    let b = ProductProfile {
        name: "Walnuts".to_string(),
        stock: 9999.0,
        cost_price: 1.0,
        selling_price: 99.0,
        supplier_rating: 1,
        sales_velocity: 120.0,
        days_to_expire: 2,
        seasonal_index: 5,
        marketing_boost: 5,
        competitor_intensity: 1,
    };

    assert_eq!(a.seed_features(today), b.seed_features(today));
}

#[rstest]
#[case(150.0, 100.0, StockAdvice::Reorder)]
#[case(100.1, 100.0, StockAdvice::Reorder)]
#[case(30.0, 100.0, StockAdvice::Sufficient)]
#[case(49.9, 100.0, StockAdvice::Sufficient)]
#[case(50.0, 100.0, StockAdvice::Stable)]
#[case(75.0, 100.0, StockAdvice::Stable)]
#[case(100.0, 100.0, StockAdvice::Stable)]
fn test_stock_advice_rule(#[case] predicted: f64, #[case] stock: f64, #[case] expected: StockAdvice) {
    assert_eq!(StockAdvice::from_prediction(predicted, stock), expected);
}

#[test]
fn test_advice_messages_are_distinct() {
    let messages = [
        StockAdvice::Reorder.message(),
        StockAdvice::Sufficient.message(),
        StockAdvice::Stable.message(),
    ];
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
}
