use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field};
use heart_health::algorithm::features::{ChronicCondition, ScoreTerm, chronic_condition};
use heart_health::models::{HealthRecord, YesNo, columns};
use heart_health::{HealthTable, derive_features, health_score, score_breakdown};

use crate::utils::{best_case_record, worst_case_record};

#[test]
fn test_best_case_is_clamped_to_100() {
    let breakdown = score_breakdown(&best_case_record());
    assert_eq!(breakdown.raw_total, 130);
    assert_eq!(breakdown.score, 100);
    assert!(breakdown.contributions.iter().all(|(_, points)| *points == 10));
}

#[test]
fn test_worst_case_is_clamped_to_0() {
    let breakdown = score_breakdown(&worst_case_record());
    assert_eq!(breakdown.raw_total, -30);
    assert_eq!(breakdown.score, 0);
}

#[test]
fn test_sleep_of_20_hours_is_a_partial_penalty() {
    let record = HealthRecord {
        sleep_hours: Some(20.0),
        ..worst_case_record()
    };
    let breakdown = score_breakdown(&record);
    assert_eq!(breakdown.points(ScoreTerm::SleepHours), -7);
    assert_eq!(breakdown.raw_total, -27);
    assert_eq!(breakdown.score, 0);
}

#[test]
fn test_bmi_of_exactly_18_5_scores_as_healthy() {
    let record = HealthRecord {
        height_in_meters: Some(2.0),
        weight_in_kilograms: Some(74.0),
        ..HealthRecord::default()
    };
    assert_eq!(score_breakdown(&record).points(ScoreTerm::Bmi), 10);
}

#[test]
fn test_missing_answers_score_from_the_base() {
    // Missing sleep takes the final -10; every other term contributes nothing
    let breakdown = score_breakdown(&HealthRecord::default());
    assert_eq!(breakdown.raw_total, 40);
    assert_eq!(health_score(&HealthRecord::default()), 40);
}

#[test]
fn test_chronic_flag_requires_an_exact_yes() {
    let mut record = HealthRecord::default();
    assert_eq!(chronic_condition(&record), ChronicCondition::NoChronicCondition);

    record.had_copd = Some(YesNo::No);
    assert_eq!(chronic_condition(&record), ChronicCondition::NoChronicCondition);

    record.had_kidney_disease = Some(YesNo::Yes);
    assert_eq!(chronic_condition(&record), ChronicCondition::HasChronicCondition);
}

#[test]
fn test_derivation_is_idempotent() {
    let table = HealthTable::from_records(&[best_case_record(), worst_case_record()]).unwrap();
    let once = derive_features(&table).unwrap();
    let twice = derive_features(&once).unwrap();

    assert_eq!(once.column_names(), twice.column_names());
    assert_eq!(once.batch(), twice.batch());
    assert_eq!(
        once.column_names().len(),
        table.column_names().len() + columns::DERIVED.len()
    );
}

#[test]
fn test_derived_columns_replace_stale_values() {
    let table = HealthTable::from_records(&[best_case_record()]).unwrap();
    let stale = table
        .with_columns(vec![(
            Field::new(columns::HEALTH_SCORE, DataType::Int64, false),
            Arc::new(Int64Array::from(vec![3])) as ArrayRef,
        )])
        .unwrap();

    let derived = derive_features(&stale).unwrap();
    let scores = derived.column(columns::HEALTH_SCORE).unwrap();
    let scores = scores.as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(scores.value(0), 100);
    assert_eq!(
        derived.column_names().iter().filter(|n| *n == columns::HEALTH_SCORE).count(),
        1
    );
}

#[test]
fn test_derived_column_types() {
    let table = HealthTable::from_records(&[
        best_case_record(),
        HealthRecord {
            height_in_meters: None,
            ..worst_case_record()
        },
    ])
    .unwrap();
    let derived = derive_features(&table).unwrap();

    let bmi = derived.column(columns::BMI).unwrap();
    let bmi = bmi.as_any().downcast_ref::<Float64Array>().unwrap();
    assert!((bmi.value(0) - 22.008).abs() < 1e-3);
    assert!(bmi.is_null(1));

    let chronic = derived.column(columns::CHRONIC_CONDITION).unwrap();
    let chronic = chronic.as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(chronic.value(0), "NoChronicCondition");
    assert_eq!(chronic.value(1), "HasChronicCondition");
}
