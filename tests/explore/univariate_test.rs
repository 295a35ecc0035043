use heart_health::explore::ChartKind;
use heart_health::explore::classify::{ColumnKind, classify_column};
use heart_health::{Chart, DashboardConfig, univariate};

use crate::utils::{label_table, two_column_table};

fn kinds(charts: &[Chart]) -> Vec<ChartKind> {
    charts.iter().map(Chart::kind).collect()
}

#[test]
fn test_numeric_column_gets_three_distribution_charts() {
    let table = two_column_table(
        vec![Some(6.0), Some(7.0), None, Some(8.0), Some(9.5)],
        vec![Some("Female"); 5],
    )
    .unwrap();
    let config = DashboardConfig::default();

    let charts = univariate(&table, "SleepHours", &config).unwrap();
    assert_eq!(
        kinds(&charts),
        vec![ChartKind::Histogram, ChartKind::BoxPlot, ChartKind::Density]
    );
    assert!(charts.iter().all(|c| c.title() == "Distribution of SleepHours"));

    match &charts[0] {
        Chart::Histogram { bins, .. } => {
            assert_eq!(bins.len(), config.histogram_bins);
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
        }
        other => panic!("expected histogram, got {other:?}"),
    }
    match &charts[2] {
        Chart::Density { curve, .. } => assert_eq!(curve.len(), config.density_points),
        other => panic!("expected density, got {other:?}"),
    }
}

#[test]
fn test_seven_categories_get_a_pie() {
    let labels = ["a", "b", "c", "d", "e", "f", "g", "g"];
    let table = label_table("Group", &labels).unwrap();

    let charts = univariate(&table, "Group", &DashboardConfig::default()).unwrap();
    assert_eq!(kinds(&charts), vec![ChartKind::Pie]);
    match &charts[0] {
        Chart::Pie { slices, title, .. } => {
            assert_eq!(title, "Distribution of Group");
            assert_eq!(slices.len(), 7);
            assert_eq!(slices[0].category, "g");
            assert_eq!(slices[0].count, 2);
        }
        other => panic!("expected pie, got {other:?}"),
    }
}

#[test]
fn test_eight_categories_get_a_histogram() {
    let labels = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let table = label_table("Group", &labels).unwrap();

    let charts = univariate(&table, "Group", &DashboardConfig::default()).unwrap();
    match &charts[0] {
        Chart::CategoryHistogram { counts, title, .. } => {
            assert_eq!(title, "Histogram of Group");
            assert_eq!(counts.len(), 8);
            assert_eq!(counts[0].category, "a");
        }
        other => panic!("expected category histogram, got {other:?}"),
    }
}

#[test]
fn test_numeric_labels_stored_as_text_are_categorical() {
    let table = label_table("Code", &["1", "2", "3"]).unwrap();
    assert_eq!(
        classify_column(&table, "Code").unwrap(),
        ColumnKind::Categorical
    );
}

#[test]
fn test_unknown_and_empty_columns_are_errors() {
    let table = two_column_table(vec![None, None], vec![None, None]).unwrap();
    let config = DashboardConfig::default();

    assert!(univariate(&table, "Missing", &config).is_err());
    assert!(univariate(&table, "SleepHours", &config).is_err());
    assert!(univariate(&table, "Sex", &config).is_err());
}
