//! Column names used by the heart-health survey table

pub const STATE: &str = "State";
pub const SEX: &str = "Sex";
pub const GENERAL_HEALTH: &str = "GeneralHealth";
pub const LAST_CHECKUP_TIME: &str = "LastCheckupTime";

pub const HAD_HEART_ATTACK: &str = "HadHeartAttack";
pub const HAD_ANGINA: &str = "HadAngina";
pub const HAD_STROKE: &str = "HadStroke";
pub const HAD_ASTHMA: &str = "HadAsthma";
pub const HAD_SKIN_CANCER: &str = "HadSkinCancer";
pub const HAD_COPD: &str = "HadCOPD";
pub const HAD_DEPRESSIVE_DISORDER: &str = "HadDepressiveDisorder";
pub const HAD_KIDNEY_DISEASE: &str = "HadKidneyDisease";
pub const HAD_ARTHRITIS: &str = "HadArthritis";
pub const HAD_DIABETES: &str = "HadDiabetes";

/// The ten flags that make up the chronic-condition label
pub const CHRONIC_CONDITIONS: [&str; 10] = [
    HAD_HEART_ATTACK,
    HAD_ANGINA,
    HAD_STROKE,
    HAD_ASTHMA,
    HAD_SKIN_CANCER,
    HAD_COPD,
    HAD_DEPRESSIVE_DISORDER,
    HAD_KIDNEY_DISEASE,
    HAD_ARTHRITIS,
    HAD_DIABETES,
];

pub const SMOKER_STATUS: &str = "SmokerStatus";
pub const E_CIGARETTE_USAGE: &str = "ECigaretteUsage";
pub const ALCOHOL_DRINKERS: &str = "AlcoholDrinkers";

pub const CHEST_SCAN: &str = "ChestScan";
pub const FLU_VAX_LAST_12: &str = "FluVaxLast12";
pub const PNEUMO_VAX_EVER: &str = "PneumoVaxEver";

pub const PHYSICAL_HEALTH_DAYS: &str = "PhysicalHealthDays";
pub const MENTAL_HEALTH_DAYS: &str = "MentalHealthDays";
pub const SLEEP_HOURS: &str = "SleepHours";
pub const HEIGHT_IN_METERS: &str = "HeightInMeters";
pub const WEIGHT_IN_KILOGRAMS: &str = "WeightInKilograms";

/// Numeric answers, in dataset order
pub const MEASUREMENTS: [&str; 5] = [
    PHYSICAL_HEALTH_DAYS,
    MENTAL_HEALTH_DAYS,
    SLEEP_HOURS,
    HEIGHT_IN_METERS,
    WEIGHT_IN_KILOGRAMS,
];

// Derived
pub const BMI: &str = "BMI";
pub const CHRONIC_CONDITION: &str = "ChronicCondition";
pub const HEALTH_SCORE: &str = "HealthScore";

/// Columns appended by feature derivation, in append order
pub const DERIVED: [&str; 3] = [BMI, CHRONIC_CONDITION, HEALTH_SCORE];
