use std::fs::File;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use heart_health::error::Error;
use heart_health::models::{GeneralHealth, columns};
use heart_health::{DashboardConfig, derive_features, load_table, univariate};
use parquet::arrow::ArrowWriter;

use crate::utils::{SURVEY_CSV, temp_file};

#[test]
fn test_csv_load_and_derive() {
    let file = temp_file(SURVEY_CSV, ".csv").unwrap();
    let table = load_table(file.path(), &DashboardConfig::default()).unwrap();
    assert_eq!(table.num_rows(), 3);

    let records = table.records().unwrap();
    assert_eq!(records[0].general_health, GeneralHealth::Excellent);
    assert_eq!(records[1].weight_in_kilograms, None);
    assert_eq!(records[2].had_diabetes, None);
    assert_eq!(records[2].state.label(), "Guam");

    let derived = derive_features(&table).unwrap();

    let scores = derived.column(columns::HEALTH_SCORE).unwrap();
    let scores = scores.as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(scores.values().to_vec(), vec![100, 0, 97]);

    let bmi = derived.column(columns::BMI).unwrap();
    let bmi = bmi.as_any().downcast_ref::<Float64Array>().unwrap();
    assert!(bmi.is_null(1));
    assert_eq!(bmi.value(2), 18.5);

    let chronic = derived.column(columns::CHRONIC_CONDITION).unwrap();
    let chronic = chronic.as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(chronic.value(0), "NoChronicCondition");
    assert_eq!(chronic.value(1), "HasChronicCondition");
    assert_eq!(chronic.value(2), "NoChronicCondition");
}

#[test]
fn test_derived_table_is_explorable() {
    let file = temp_file(SURVEY_CSV, ".csv").unwrap();
    let table = derive_features(&load_table(file.path(), &DashboardConfig::default()).unwrap())
        .unwrap();

    let charts = univariate(&table, columns::CHRONIC_CONDITION, &DashboardConfig::default())
        .unwrap();
    assert_eq!(charts.len(), 1);
    let charts = univariate(&table, columns::HEALTH_SCORE, &DashboardConfig::default()).unwrap();
    assert_eq!(charts.len(), 3);
}

#[test]
fn test_blank_measurement_column_derives_nulls() {
    let csv = "GeneralHealth,SleepHours,HeightInMeters,WeightInKilograms\n\
               Good,7,1.8,\n\
               Poor,8,1.7,\n";
    let file = temp_file(csv, ".csv").unwrap();
    let table = load_table(file.path(), &DashboardConfig::default()).unwrap();
    assert_eq!(
        table.data_type(columns::WEIGHT_IN_KILOGRAMS).unwrap(),
        DataType::Float64
    );

    let derived = derive_features(&table).unwrap();
    let bmi = derived.column(columns::BMI).unwrap();
    assert_eq!(bmi.null_count(), 2);
    let scores = derived.column(columns::HEALTH_SCORE).unwrap();
    assert_eq!(scores.null_count(), 0);
}

#[test]
fn test_values_after_sampled_rows_are_kept() {
    let csv = "GeneralHealth,SleepHours,HeightInMeters,WeightInKilograms\n\
               Good,7,2.0,\n\
               Good,7,2.0,\n\
               Good,7,2.0,\n\
               Good,7,2.0,80\n";
    let file = temp_file(csv, ".csv").unwrap();
    let config = DashboardConfig {
        infer_rows: 3,
        ..DashboardConfig::default()
    };
    let table = load_table(file.path(), &config).unwrap();
    assert_eq!(table.record(3).unwrap().weight_in_kilograms, Some(80.0));

    let derived = derive_features(&table).unwrap();
    let bmi = derived.column(columns::BMI).unwrap();
    let bmi = bmi.as_any().downcast_ref::<Float64Array>().unwrap();
    assert!(bmi.is_null(0));
    assert_eq!(bmi.value(3), 20.0);
}

#[test]
fn test_parquet_round_trip() {
    let csv = temp_file(SURVEY_CSV, ".csv").unwrap();
    let table = load_table(csv.path(), &DashboardConfig::default()).unwrap();

    let parquet = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
    let mut writer =
        ArrowWriter::try_new(File::create(parquet.path()).unwrap(), table.schema(), None).unwrap();
    writer.write(table.batch()).unwrap();
    writer.close().unwrap();

    let reloaded = load_table(parquet.path(), &DashboardConfig::default()).unwrap();
    assert_eq!(reloaded.column_names(), table.column_names());
    assert_eq!(reloaded.batch().columns(), table.batch().columns());
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = temp_file(SURVEY_CSV, ".zip").unwrap();
    let err = load_table(file.path(), &DashboardConfig::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnsupportedFormat(_))
    ));
}
