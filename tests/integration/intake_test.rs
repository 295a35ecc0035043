use arrow::array::{Array, Float64Array, StringArray};
use heart_health::error::Error;
use heart_health::intake::{FieldKind, IntakeForm, IntakeSubmission};
use heart_health::models::{CheckupTime, SmokerStatus, YesNo, columns};
use heart_health::{HealthRecord, health_score, records_to_batch};

use crate::utils::temp_file;

fn invalid_field(result: heart_health::Result<HealthRecord>) -> String {
    let err = result.unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidInput { field, .. }) => field.clone(),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn test_form_ranges_and_defaults() {
    let weight = IntakeForm::field(columns::WEIGHT_IN_KILOGRAMS).unwrap();
    assert_eq!(
        weight.kind,
        FieldKind::Number {
            min: 0.0,
            max: 300.0,
            default: 70.0,
            whole: false
        }
    );

    let state = IntakeForm::field(columns::STATE).unwrap();
    match state.kind {
        FieldKind::Choice { options } => {
            assert_eq!(options.len(), 54);
            assert_eq!(options.last(), Some(&"Virgin Islands"));
        }
        FieldKind::Number { .. } => panic!("State is a choice"),
    }
}

#[test]
fn test_out_of_range_numbers_are_rejected() {
    let mut submission = IntakeSubmission::new();
    submission.set(columns::WEIGHT_IN_KILOGRAMS, "300.5");
    assert_eq!(invalid_field(submission.submit()), columns::WEIGHT_IN_KILOGRAMS);

    let mut submission = IntakeSubmission::new();
    submission.set(columns::SLEEP_HOURS, "-1");
    assert_eq!(invalid_field(submission.submit()), columns::SLEEP_HOURS);

    let mut submission = IntakeSubmission::new();
    submission.set(columns::HEIGHT_IN_METERS, "tall");
    assert_eq!(invalid_field(submission.submit()), columns::HEIGHT_IN_METERS);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let mut submission = IntakeSubmission::new();
    submission
        .set(columns::PHYSICAL_HEALTH_DAYS, "30")
        .set(columns::SLEEP_HOURS, "24")
        .set(columns::HEIGHT_IN_METERS, "0");
    let record = submission.submit().unwrap();
    assert_eq!(record.physical_health_days, Some(30.0));
    assert_eq!(record.sleep_hours, Some(24.0));
    assert_eq!(record.height_in_meters, Some(0.0));
}

#[test]
fn test_unknown_options_and_fields_are_rejected() {
    let mut submission = IntakeSubmission::new();
    submission.set(columns::SMOKER_STATUS, "Occasionally");
    assert_eq!(invalid_field(submission.submit()), columns::SMOKER_STATUS);

    let mut submission = IntakeSubmission::new();
    submission.set(columns::HAD_STROKE, "Maybe");
    assert_eq!(invalid_field(submission.submit()), columns::HAD_STROKE);

    let mut submission = IntakeSubmission::new();
    submission.set(columns::HEALTH_SCORE, "100");
    assert_eq!(invalid_field(submission.submit()), columns::HEALTH_SCORE);
}

#[test]
fn test_submission_echoes_as_json_and_one_row_table() {
    let mut submission = IntakeSubmission::new();
    submission
        .set_assignment("SmokerStatus=Former smoker")
        .unwrap()
        .set_assignment("HadStroke=Yes")
        .unwrap()
        .set_assignment("LastCheckupTime=5 or more years ago")
        .unwrap();
    let record = submission.submit().unwrap();
    assert_eq!(record.smoker_status, SmokerStatus::FormerSmoker);
    assert_eq!(record.had_stroke, Some(YesNo::Yes));
    assert_eq!(record.last_checkup_time, CheckupTime::FiveOrMoreYears);

    let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(json["SmokerStatus"], "Former smoker");
    assert_eq!(json["SleepHours"], 7.0);
    assert_eq!(json["State"], "Alabama");

    let batch = records_to_batch(std::slice::from_ref(&record)).unwrap();
    assert_eq!(batch.num_rows(), 1);
    let sleep = batch.column_by_name(columns::SLEEP_HOURS).unwrap();
    let sleep = sleep.as_any().downcast_ref::<Float64Array>().unwrap();
    assert_eq!(sleep.value(0), 7.0);
    let stroke = batch.column_by_name(columns::HAD_STROKE).unwrap();
    let stroke = stroke.as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(stroke.value(0), "Yes");
}

#[test]
fn test_defaults_score() {
    // Very good +7, 0 days +10 +10, BMI 22.9 +10, 7h sleep +10, never smoked +10,
    // not at all (right now) +5, no alcohol +10
    let record = IntakeSubmission::new().submit().unwrap();
    assert_eq!(health_score(&record), 100);
}

#[test]
fn test_answers_from_json_file() {
    let file = temp_file(
        r#"{"Sex": "Male", "SleepHours": 5.5, "HadDiabetes": "Yes"}"#,
        ".json",
    )
    .unwrap();
    let record = IntakeSubmission::from_json_file(file.path())
        .unwrap()
        .submit()
        .unwrap();
    assert_eq!(record.sleep_hours, Some(5.5));
    assert_eq!(record.had_diabetes, Some(YesNo::Yes));
}
