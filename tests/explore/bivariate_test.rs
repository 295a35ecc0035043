use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use heart_health::explore::ChartKind;
use heart_health::{Chart, DashboardConfig, HealthTable, bivariate};

use crate::utils::two_column_table;

fn survey_table() -> HealthTable {
    let batch = RecordBatch::try_from_iter(vec![
        (
            "HeightInMeters",
            Arc::new(Float64Array::from(vec![
                Some(1.6),
                Some(1.7),
                None,
                Some(1.8),
                Some(1.9),
            ])) as ArrayRef,
        ),
        (
            "WeightInKilograms",
            Arc::new(Float64Array::from(vec![
                Some(60.0),
                None,
                Some(70.0),
                Some(80.0),
                Some(90.0),
            ])) as ArrayRef,
        ),
        (
            "Sex",
            Arc::new(StringArray::from(vec![
                "Female", "Male", "Female", "Male", "Male",
            ])) as ArrayRef,
        ),
        (
            "SmokerStatus",
            Arc::new(StringArray::from(vec![
                "Never smoked",
                "Former smoker",
                "Never smoked",
                "Never smoked",
                "Former smoker",
            ])) as ArrayRef,
        ),
    ])
    .unwrap();
    HealthTable::new(batch)
}

#[test]
fn test_two_numeric_columns_scatter_complete_rows() {
    let table = survey_table();
    let charts = bivariate(
        &table,
        "HeightInMeters",
        "WeightInKilograms",
        &DashboardConfig::default(),
    )
    .unwrap();

    assert_eq!(charts.len(), 1);
    match &charts[0] {
        Chart::Scatter { points, title, .. } => {
            assert_eq!(title, "Distribution between HeightInMeters & WeightInKilograms");
            assert_eq!(points, &vec![(1.6, 60.0), (1.8, 80.0), (1.9, 90.0)]);
        }
        other => panic!("expected scatter, got {other:?}"),
    }
}

#[test]
fn test_two_categorical_columns_stack_counts() {
    let table = survey_table();
    let charts = bivariate(&table, "Sex", "SmokerStatus", &DashboardConfig::default()).unwrap();

    match &charts[0] {
        Chart::StackedBar { stacks, x, color, .. } => {
            assert_eq!(x, "Sex");
            assert_eq!(color, "SmokerStatus");
            assert_eq!(stacks.len(), 2);

            let male = stacks.iter().find(|s| s.category == "Male").unwrap();
            let counts: Vec<(&str, usize)> = male
                .segments
                .iter()
                .map(|c| (c.category.as_str(), c.count))
                .collect();
            assert_eq!(counts, vec![("Former smoker", 2), ("Never smoked", 1)]);
        }
        other => panic!("expected stacked bar, got {other:?}"),
    }
}

#[test]
fn test_mixed_pair_groups_by_the_categorical_column_in_either_order() {
    let table = two_column_table(
        vec![Some(6.0), Some(7.0), Some(8.0), Some(5.0), None],
        vec![Some("Female"), Some("Male"), Some("Female"), Some("Male"), Some("Male")],
    )
    .unwrap();
    let config = DashboardConfig::default();

    let forward = bivariate(&table, "Sex", "SleepHours", &config).unwrap();
    let reversed = bivariate(&table, "SleepHours", "Sex", &config).unwrap();
    assert_eq!(forward, reversed);

    let kinds: Vec<ChartKind> = forward.iter().map(Chart::kind).collect();
    assert_eq!(
        kinds,
        vec![ChartKind::GroupedBox, ChartKind::Violin, ChartKind::Strip]
    );

    match &forward[2] {
        Chart::Strip {
            category,
            value,
            groups,
            ..
        } => {
            assert_eq!(category, "Sex");
            assert_eq!(value, "SleepHours");
            assert_eq!(groups[0].category, "Female");
            assert_eq!(groups[0].values, vec![6.0, 8.0]);
            assert_eq!(groups[1].values, vec![7.0, 5.0]);
        }
        other => panic!("expected strip, got {other:?}"),
    }
}
