//! Collecting and validating intake answers

use std::path::Path;

use anyhow::Context;
use rustc_hash::FxHashMap;

use crate::error::util::safe_read_to_string;
use crate::error::{Error, Result};
use crate::intake::form::{FieldKind, FieldSpec, IntakeForm};
use crate::models::columns;
use crate::models::{
    AlcoholDrinkers, CheckupTime, ECigaretteUsage, GeneralHealth, HealthRecord, Sex, SmokerStatus,
    State, YesNo,
};

/// Raw answers keyed by field name.
///
/// Fields left unset take the form default on [`IntakeSubmission::submit`].
#[derive(Debug, Clone, Default)]
pub struct IntakeSubmission {
    values: FxHashMap<String, String>,
}

impl IntakeSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one answer, replacing any earlier one
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Parse a `NAME=VALUE` assignment
    pub fn set_assignment(&mut self, assignment: &str) -> Result<&mut Self> {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::invalid_input(assignment, "expected NAME=VALUE"))?;
        Ok(self.set(field.trim(), value.trim()))
    }

    /// Answers from a JSON object of strings or numbers
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).context("Intake answers must be a JSON object")?;

        let mut submission = Self::new();
        for (field, value) in object {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(
                        Error::invalid_input(field, format!("unsupported value {other}")).into(),
                    );
                }
            };
            submission.set(field, value);
        }
        Ok(submission)
    }

    /// Answers from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = safe_read_to_string(path, "reading intake answers")?;
        Self::from_json_str(&json).with_context(|| format!("Invalid intake file {}", path.display()))
    }

    /// The answer for a field, if one was given
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Validate every answer against its widget and build the record.
    ///
    /// Only widget constraints are checked: option membership and numeric
    /// range. Unknown field names are rejected.
    pub fn submit(&self) -> Result<HealthRecord> {
        let fields = IntakeForm::fields();
        if let Some(unknown) = self
            .values
            .keys()
            .find(|name| !fields.iter().any(|f| f.name == name.as_str()))
        {
            return Err(Error::invalid_input(unknown.as_str(), "not an intake field").into());
        }

        let mut record = HealthRecord::default();
        for field in &fields {
            let value = self
                .get(field.name)
                .map_or_else(|| field.default_value(), str::to_string);
            apply(&mut record, field, &value)?;
        }

        log::debug!("Accepted intake submission with {} answers", self.values.len());
        Ok(record)
    }
}

fn apply(record: &mut HealthRecord, field: &FieldSpec, value: &str) -> Result<()> {
    match &field.kind {
        FieldKind::Choice { options } => {
            if !options.iter().any(|option| *option == value) {
                return Err(Error::invalid_input(
                    field.name,
                    format!("'{value}' is not one of the offered options"),
                )
                .into());
            }
            set_choice(record, field.name, value)
        }
        FieldKind::Number {
            min, max, whole, ..
        } => {
            let number = parse_number(field.name, value, *min, *max, *whole)?;
            let slot = record
                .measurement_mut(field.name)
                .ok_or_else(|| Error::invalid_input(field.name, "not a numeric field"))?;
            *slot = Some(number);
            Ok(())
        }
    }
}

fn parse_number(field: &str, value: &str, min: f64, max: f64, whole: bool) -> Result<f64> {
    let number: f64 = value
        .parse()
        .map_err(|_| Error::invalid_input(field, format!("'{value}' is not a number")))?;

    if !number.is_finite() || number < min || number > max {
        return Err(Error::invalid_input(field, format!("{value} is outside [{min}, {max}]")).into());
    }
    if whole && number.fract() != 0.0 {
        return Err(Error::invalid_input(field, format!("{value} is not a whole number")).into());
    }
    Ok(number)
}

fn set_choice(record: &mut HealthRecord, name: &str, value: &str) -> Result<()> {
    match name {
        columns::STATE => record.state = State::from_label(value),
        columns::SEX => record.sex = Sex::from_label(value),
        columns::GENERAL_HEALTH => record.general_health = GeneralHealth::from_label(value),
        columns::LAST_CHECKUP_TIME => record.last_checkup_time = CheckupTime::from_label(value),
        columns::SMOKER_STATUS => record.smoker_status = SmokerStatus::from_label(value),
        columns::E_CIGARETTE_USAGE => record.e_cigarette_usage = ECigaretteUsage::from_label(value),
        columns::ALCOHOL_DRINKERS => record.alcohol_drinkers = AlcoholDrinkers::from_label(value),
        _ => {
            let flag = record
                .flag_mut(name)
                .ok_or_else(|| Error::invalid_input(name, "not a choice field"))?;
            *flag = YesNo::from_label(value);
        }
    }
    Ok(())
}
