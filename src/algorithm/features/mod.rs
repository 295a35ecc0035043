//! Engineered features for the heart-health survey
//!
//! Three columns are derived from each respondent's answers: `BMI`,
//! `ChronicCondition` and `HealthScore`. They depend on source fields only,
//! so deriving an already-derived table rewrites them with identical values.

pub mod bmi;
pub mod chronic;
pub mod score;

use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field};
use serde::Serialize;

use crate::error::Result;
use crate::models::{HealthRecord, HealthTable, columns};
use crate::utils::logging::log_columns_written;

pub use bmi::bmi;
pub use chronic::{ChronicCondition, chronic_condition, reported_conditions};
pub use score::{ScoreBreakdown, ScoreTerm, health_score, score_breakdown};

/// The derived values for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatures {
    pub bmi: Option<f64>,
    pub chronic_condition: ChronicCondition,
    pub health_score: u8,
}

/// Compute every derived feature for a record
#[must_use]
pub fn derive_record(record: &HealthRecord) -> DerivedFeatures {
    DerivedFeatures {
        bmi: bmi(record.weight_in_kilograms, record.height_in_meters),
        chronic_condition: chronic_condition(record),
        health_score: health_score(record),
    }
}

/// Append `BMI`, `ChronicCondition` and `HealthScore` to a table.
///
/// Existing columns with those names are replaced in place; a `BMI` column
/// read from the file is never used as an input.
pub fn derive_features(table: &HealthTable) -> Result<HealthTable> {
    let start = Instant::now();
    let derived: Vec<DerivedFeatures> = table.records()?.iter().map(derive_record).collect();

    let bmi_values: ArrayRef = Arc::new(derived.iter().map(|d| d.bmi).collect::<Float64Array>());
    let chronic_labels: ArrayRef = Arc::new(
        derived
            .iter()
            .map(|d| Some(d.chronic_condition.label()))
            .collect::<StringArray>(),
    );
    let scores: ArrayRef = Arc::new(
        derived
            .iter()
            .map(|d| Some(i64::from(d.health_score)))
            .collect::<Int64Array>(),
    );

    let result = table.with_columns(vec![
        (Field::new(columns::BMI, DataType::Float64, true), bmi_values),
        (
            Field::new(columns::CHRONIC_CONDITION, DataType::Utf8, false),
            chronic_labels,
        ),
        (
            Field::new(columns::HEALTH_SCORE, DataType::Int64, false),
            scores,
        ),
    ])?;

    log_columns_written(&columns::DERIVED, derived.len(), start.elapsed());
    Ok(result)
}
