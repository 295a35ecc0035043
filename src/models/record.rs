//! A single survey respondent's answers

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::categories::{
    AlcoholDrinkers, CheckupTime, ECigaretteUsage, GeneralHealth, Sex, SmokerStatus, State, YesNo,
};
use crate::models::columns;

/// One row of the survey, typed.
///
/// Derived features (BMI, chronic-condition label, health score) are not stored
/// here; they are recomputed from these fields whenever needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthRecord {
    pub state: State,
    pub sex: Sex,
    pub general_health: GeneralHealth,
    pub last_checkup_time: CheckupTime,

    pub had_heart_attack: Option<YesNo>,
    pub had_angina: Option<YesNo>,
    pub had_stroke: Option<YesNo>,
    pub had_asthma: Option<YesNo>,
    pub had_skin_cancer: Option<YesNo>,
    #[serde(rename = "HadCOPD")]
    pub had_copd: Option<YesNo>,
    pub had_depressive_disorder: Option<YesNo>,
    pub had_kidney_disease: Option<YesNo>,
    pub had_arthritis: Option<YesNo>,
    pub had_diabetes: Option<YesNo>,

    pub smoker_status: SmokerStatus,
    pub e_cigarette_usage: ECigaretteUsage,
    pub alcohol_drinkers: AlcoholDrinkers,

    pub chest_scan: Option<YesNo>,
    pub flu_vax_last_12: Option<YesNo>,
    pub pneumo_vax_ever: Option<YesNo>,

    pub physical_health_days: Option<f64>,
    pub mental_health_days: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub height_in_meters: Option<f64>,
    pub weight_in_kilograms: Option<f64>,
}

impl Default for HealthRecord {
    /// A record with every answer missing or unrecognized
    fn default() -> Self {
        Self {
            state: State::Other(String::new()),
            sex: Sex::Other,
            general_health: GeneralHealth::Other,
            last_checkup_time: CheckupTime::Other,
            had_heart_attack: None,
            had_angina: None,
            had_stroke: None,
            had_asthma: None,
            had_skin_cancer: None,
            had_copd: None,
            had_depressive_disorder: None,
            had_kidney_disease: None,
            had_arthritis: None,
            had_diabetes: None,
            smoker_status: SmokerStatus::Other,
            e_cigarette_usage: ECigaretteUsage::Other,
            alcohol_drinkers: AlcoholDrinkers::Other,
            chest_scan: None,
            flu_vax_last_12: None,
            pneumo_vax_ever: None,
            physical_health_days: None,
            mental_health_days: None,
            sleep_hours: None,
            height_in_meters: None,
            weight_in_kilograms: None,
        }
    }
}

impl HealthRecord {
    /// The ten chronic-condition flags paired with their column names
    #[must_use]
    pub fn chronic_flags(&self) -> [(&'static str, Option<YesNo>); 10] {
        [
            (columns::HAD_HEART_ATTACK, self.had_heart_attack),
            (columns::HAD_ANGINA, self.had_angina),
            (columns::HAD_STROKE, self.had_stroke),
            (columns::HAD_ASTHMA, self.had_asthma),
            (columns::HAD_SKIN_CANCER, self.had_skin_cancer),
            (columns::HAD_COPD, self.had_copd),
            (columns::HAD_DEPRESSIVE_DISORDER, self.had_depressive_disorder),
            (columns::HAD_KIDNEY_DISEASE, self.had_kidney_disease),
            (columns::HAD_ARTHRITIS, self.had_arthritis),
            (columns::HAD_DIABETES, self.had_diabetes),
        ]
    }

    /// Mutable access to a Yes/No field by column name
    pub fn flag_mut(&mut self, column: &str) -> Option<&mut Option<YesNo>> {
        let flag = match column {
            columns::HAD_HEART_ATTACK => &mut self.had_heart_attack,
            columns::HAD_ANGINA => &mut self.had_angina,
            columns::HAD_STROKE => &mut self.had_stroke,
            columns::HAD_ASTHMA => &mut self.had_asthma,
            columns::HAD_SKIN_CANCER => &mut self.had_skin_cancer,
            columns::HAD_COPD => &mut self.had_copd,
            columns::HAD_DEPRESSIVE_DISORDER => &mut self.had_depressive_disorder,
            columns::HAD_KIDNEY_DISEASE => &mut self.had_kidney_disease,
            columns::HAD_ARTHRITIS => &mut self.had_arthritis,
            columns::HAD_DIABETES => &mut self.had_diabetes,
            columns::CHEST_SCAN => &mut self.chest_scan,
            columns::FLU_VAX_LAST_12 => &mut self.flu_vax_last_12,
            columns::PNEUMO_VAX_EVER => &mut self.pneumo_vax_ever,
            _ => return None,
        };
        Some(flag)
    }

    /// Mutable access to a numeric field by column name
    pub fn measurement_mut(&mut self, column: &str) -> Option<&mut Option<f64>> {
        let value = match column {
            columns::PHYSICAL_HEALTH_DAYS => &mut self.physical_health_days,
            columns::MENTAL_HEALTH_DAYS => &mut self.mental_health_days,
            columns::SLEEP_HOURS => &mut self.sleep_hours,
            columns::HEIGHT_IN_METERS => &mut self.height_in_meters,
            columns::WEIGHT_IN_KILOGRAMS => &mut self.weight_in_kilograms,
            _ => return None,
        };
        Some(value)
    }

    /// Pretty JSON keyed by the dataset's column names
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
