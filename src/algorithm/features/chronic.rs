//! Chronic-condition flag
//!
//! A respondent has a chronic condition when any of the ten tracked
//! diagnoses was answered "Yes". Missing answers count as "No".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::HealthRecord;

/// Binary chronic-condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChronicCondition {
    HasChronicCondition,
    NoChronicCondition,
}

impl ChronicCondition {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HasChronicCondition => "HasChronicCondition",
            Self::NoChronicCondition => "NoChronicCondition",
        }
    }

    #[must_use]
    pub const fn is_chronic(self) -> bool {
        matches!(self, Self::HasChronicCondition)
    }
}

impl fmt::Display for ChronicCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a record by its ten chronic-condition flags
#[must_use]
pub fn chronic_condition(record: &HealthRecord) -> ChronicCondition {
    let has_condition = record
        .chronic_flags()
        .iter()
        .any(|(_, flag)| flag.is_some_and(|answer| answer.is_yes()));

    if has_condition {
        ChronicCondition::HasChronicCondition
    } else {
        ChronicCondition::NoChronicCondition
    }
}

/// Names of the flags answered "Yes"
#[must_use]
pub fn reported_conditions(record: &HealthRecord) -> Vec<&'static str> {
    record
        .chronic_flags()
        .iter()
        .filter(|(_, flag)| flag.is_some_and(|answer| answer.is_yes()))
        .map(|(name, _)| *name)
        .collect()
}
