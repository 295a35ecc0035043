//! Field descriptors for the manual intake form

use serde::Serialize;

use crate::models::columns;
use crate::models::{
    AlcoholDrinkers, CheckupTime, ECigaretteUsage, GeneralHealth, STATES, Sex, SmokerStatus, YesNo,
};

/// What a field accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FieldKind {
    /// One of a fixed list of labels; the first is the default
    Choice { options: Vec<&'static str> },
    /// A number within `[min, max]`
    Number {
        min: f64,
        max: f64,
        default: f64,
        /// Only whole numbers are accepted
        whole: bool,
    },
}

/// One widget of the intake form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Dataset column the answer is stored under
    pub name: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// The value used when the field is left untouched
    #[must_use]
    pub fn default_value(&self) -> String {
        match &self.kind {
            FieldKind::Choice { options } => options.first().copied().unwrap_or_default().to_string(),
            FieldKind::Number { default, whole, .. } => {
                if *whole {
                    format!("{default:.0}")
                } else {
                    default.to_string()
                }
            }
        }
    }
}

pub const DEMOGRAPHICS: &str = "Select Your Information";
pub const MEDICAL_HISTORY: &str = "Medical History";
pub const LIFESTYLE: &str = "Physical and Lifestyle Information";
pub const METRICS: &str = "Enter Your Health Metrics";

/// The intake form layout
pub struct IntakeForm;

impl IntakeForm {
    /// Every field in display order
    #[must_use]
    pub fn fields() -> Vec<FieldSpec> {
        let mut fields = vec![
            choice(columns::STATE, "State", DEMOGRAPHICS, STATES.to_vec()),
            choice(
                columns::SEX,
                "Sex",
                DEMOGRAPHICS,
                Sex::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
            choice(
                columns::GENERAL_HEALTH,
                "General Health",
                DEMOGRAPHICS,
                GeneralHealth::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
            choice(
                columns::LAST_CHECKUP_TIME,
                "Last Checkup Time",
                DEMOGRAPHICS,
                CheckupTime::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
        ];

        fields.extend(
            [
                (columns::HAD_HEART_ATTACK, "Had Heart Attack?"),
                (columns::HAD_ANGINA, "Had Angina?"),
                (columns::HAD_STROKE, "Had Stroke?"),
                (columns::HAD_ASTHMA, "Had Asthma?"),
                (columns::HAD_SKIN_CANCER, "Had Skin Cancer?"),
                (columns::HAD_COPD, "Had COPD?"),
                (columns::HAD_DEPRESSIVE_DISORDER, "Had Depressive Disorder?"),
                (columns::HAD_KIDNEY_DISEASE, "Had Kidney Disease?"),
                (columns::HAD_ARTHRITIS, "Had Arthritis?"),
                (columns::HAD_DIABETES, "Had Diabetes?"),
            ]
            .into_iter()
            .map(|(name, label)| yes_no(name, label, MEDICAL_HISTORY)),
        );

        fields.extend([
            choice(
                columns::SMOKER_STATUS,
                "Smoker Status",
                LIFESTYLE,
                SmokerStatus::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
            choice(
                columns::E_CIGARETTE_USAGE,
                "E-Cigarette Usage",
                LIFESTYLE,
                ECigaretteUsage::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
            choice(
                columns::ALCOHOL_DRINKERS,
                "Drinks Alcohol?",
                LIFESTYLE,
                AlcoholDrinkers::OPTIONS.iter().map(|o| o.label()).collect(),
            ),
            yes_no(columns::CHEST_SCAN, "Had a Chest Scan?", LIFESTYLE),
            yes_no(
                columns::FLU_VAX_LAST_12,
                "Received Flu Vaccine in Last 12 Months?",
                LIFESTYLE,
            ),
            yes_no(columns::PNEUMO_VAX_EVER, "Ever Had Pneumonia Vaccine?", LIFESTYLE),
            number(
                columns::PHYSICAL_HEALTH_DAYS,
                "Physical Health Days (last 30 days)",
                (0.0, 30.0, 0.0),
                true,
            ),
            number(
                columns::MENTAL_HEALTH_DAYS,
                "Mental Health Days (last 30 days)",
                (0.0, 30.0, 0.0),
                true,
            ),
            number(
                columns::SLEEP_HOURS,
                "Average Sleep Hours per Night",
                (0.0, 24.0, 7.0),
                false,
            ),
            number(
                columns::HEIGHT_IN_METERS,
                "Height in Meters",
                (0.0, 3.0, 1.75),
                false,
            ),
            number(
                columns::WEIGHT_IN_KILOGRAMS,
                "Weight in Kilograms",
                (0.0, 300.0, 70.0),
                false,
            ),
        ]);

        fields
    }

    /// Look up one field by column name
    #[must_use]
    pub fn field(name: &str) -> Option<FieldSpec> {
        Self::fields().into_iter().find(|f| f.name == name)
    }
}

fn choice(
    name: &'static str,
    label: &'static str,
    section: &'static str,
    options: Vec<&'static str>,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        section,
        kind: FieldKind::Choice { options },
    }
}

fn yes_no(name: &'static str, label: &'static str, section: &'static str) -> FieldSpec {
    choice(
        name,
        label,
        section,
        YesNo::OPTIONS.iter().map(|o| o.label()).collect(),
    )
}

fn number(
    name: &'static str,
    label: &'static str,
    (min, max, default): (f64, f64, f64),
    whole: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        section: METRICS,
        kind: FieldKind::Number {
            min,
            max,
            default,
            whole,
        },
    }
}
