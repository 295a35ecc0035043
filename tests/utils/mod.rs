use std::io::Write;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use heart_health::models::{
    AlcoholDrinkers, ECigaretteUsage, GeneralHealth, HealthRecord, SmokerStatus, YesNo,
};
use heart_health::{HealthTable, Result};
use tempfile::NamedTempFile;

/// A respondent whose every scored answer earns the top rung
#[must_use]
pub fn best_case_record() -> HealthRecord {
    HealthRecord {
        general_health: GeneralHealth::Excellent,
        physical_health_days: Some(2.0),
        mental_health_days: Some(2.0),
        height_in_meters: Some(1.75),
        weight_in_kilograms: Some(67.4),
        sleep_hours: Some(7.0),
        smoker_status: SmokerStatus::NeverSmoked,
        e_cigarette_usage: ECigaretteUsage::NeverUsed,
        alcohol_drinkers: AlcoholDrinkers::No,
        ..HealthRecord::default()
    }
}

/// A respondent whose every scored answer earns the bottom rung
#[must_use]
pub fn worst_case_record() -> HealthRecord {
    HealthRecord {
        general_health: GeneralHealth::Poor,
        physical_health_days: Some(25.0),
        mental_health_days: Some(25.0),
        height_in_meters: Some(1.0),
        weight_in_kilograms: Some(45.0),
        sleep_hours: Some(30.0),
        smoker_status: SmokerStatus::EveryDay,
        e_cigarette_usage: ECigaretteUsage::EveryDay,
        alcohol_drinkers: AlcoholDrinkers::Yes,
        had_diabetes: Some(YesNo::Yes),
        ..HealthRecord::default()
    }
}

/// A table with one numeric and one categorical column
pub fn two_column_table(values: Vec<Option<f64>>, labels: Vec<Option<&str>>) -> Result<HealthTable> {
    let batch = RecordBatch::try_from_iter(vec![
        ("SleepHours", Arc::new(Float64Array::from(values)) as ArrayRef),
        ("Sex", Arc::new(StringArray::from(labels)) as ArrayRef),
    ])?;
    Ok(HealthTable::new(batch))
}

/// A table with a single categorical column
pub fn label_table(name: &str, labels: &[&str]) -> Result<HealthTable> {
    let batch = RecordBatch::try_from_iter(vec![(
        name,
        Arc::new(StringArray::from(labels.to_vec())) as ArrayRef,
    )])?;
    Ok(HealthTable::new(batch))
}

/// Header and rows in the survey's CSV layout
pub const SURVEY_CSV: &str = "\
State,Sex,GeneralHealth,PhysicalHealthDays,MentalHealthDays,LastCheckupTime,SleepHours,HadHeartAttack,HadAngina,HadStroke,HadAsthma,HadSkinCancer,HadCOPD,HadDepressiveDisorder,HadKidneyDisease,HadArthritis,HadDiabetes,HeightInMeters,WeightInKilograms,SmokerStatus,ECigaretteUsage,ChestScan,AlcoholDrinkers,FluVaxLast12,PneumoVaxEver
Alabama,Female,Excellent,2,2,Within past year (anytime less than 12 months ago),7,No,No,No,No,No,No,No,No,No,No,1.75,67.4,Never smoked,Never used e-cigarettes in my entire life,No,No,Yes,No
Alaska,Male,Poor,25,25,5 or more years ago,20,Yes,No,No,No,No,No,No,No,No,No,1.8,,Current smoker - now smokes every day,Use them every day,Yes,Yes,No,No
Guam,Female,Fair,0,10,Within past 2 years (1 year but less than 2 years ago),5,No,No,No,No,No,No,No,No,No,,2.0,74.0,Former smoker,Not at all (right now),No,No,No,Yes
";

/// Write text to a temporary file with the given extension
pub fn temp_file(contents: &str, suffix: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
