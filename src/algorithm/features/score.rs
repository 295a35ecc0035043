//! Composite health score
//!
//! Base 50, adjusted by one additive term per lifestyle or health answer,
//! then clamped to [0, 100]. Each categorical term is a total function over
//! its answer enum; each numeric term is a threshold ladder evaluated top to
//! bottom, first match wins.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::algorithm::features::bmi::bmi;
use crate::models::{
    AlcoholDrinkers, ECigaretteUsage, GeneralHealth, HealthRecord, SmokerStatus, columns,
};

/// Score every record starts from
pub const BASE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// The answers that contribute to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreTerm {
    GeneralHealth,
    PhysicalHealthDays,
    MentalHealthDays,
    Bmi,
    SleepHours,
    SmokerStatus,
    ECigaretteUsage,
    AlcoholDrinkers,
}

impl ScoreTerm {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::GeneralHealth => columns::GENERAL_HEALTH,
            Self::PhysicalHealthDays => columns::PHYSICAL_HEALTH_DAYS,
            Self::MentalHealthDays => columns::MENTAL_HEALTH_DAYS,
            Self::Bmi => columns::BMI,
            Self::SleepHours => columns::SLEEP_HOURS,
            Self::SmokerStatus => columns::SMOKER_STATUS,
            Self::ECigaretteUsage => columns::E_CIGARETTE_USAGE,
            Self::AlcoholDrinkers => columns::ALCOHOL_DRINKERS,
        }
    }
}

impl fmt::Display for ScoreTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[must_use]
pub const fn general_health_points(answer: GeneralHealth) -> i32 {
    match answer {
        GeneralHealth::Excellent => 10,
        GeneralHealth::VeryGood => 7,
        GeneralHealth::Good => 5,
        GeneralHealth::Fair => -5,
        GeneralHealth::Poor => -10,
        GeneralHealth::Other => 0,
    }
}

/// Points for days of poor physical or mental health in the past 30 days.
///
/// A missing count satisfies no rung and contributes nothing.
#[must_use]
pub fn unwell_days_points(days: Option<f64>) -> i32 {
    match days {
        Some(d) if d <= 5.0 => 10,
        Some(d) if d <= 10.0 => 5,
        Some(d) if d <= 20.0 => -7,
        Some(d) if d > 20.0 => -10,
        _ => 0,
    }
}

/// Points for body-mass index.
///
/// The first rung claims 18.5 itself even though the last rung's `< 18.5`
/// sits right next to it. Values in the gaps between rungs (for example 24.95)
/// and a missing BMI contribute nothing.
#[must_use]
pub fn bmi_points(bmi: Option<f64>) -> i32 {
    match bmi {
        Some(b) if (18.5..=24.9).contains(&b) => 10,
        Some(b) if (25.0..=29.9).contains(&b) => 5,
        Some(b) if (30.0..=39.9).contains(&b) => -7,
        Some(b) if b >= 40.0 || b < 18.5 => -10,
        _ => 0,
    }
}

/// Points for average nightly sleep.
///
/// Short sleep (under 6 hours) lands on the `<= 12` rung. A missing value
/// fails every rung and takes the final penalty.
#[must_use]
pub fn sleep_points(hours: Option<f64>) -> i32 {
    match hours {
        Some(h) if (6.0..=9.0).contains(&h) => 10,
        Some(h) if h <= 12.0 => 5,
        Some(h) if h <= 24.0 => -7,
        _ => -10,
    }
}

#[must_use]
pub const fn smoker_points(status: SmokerStatus) -> i32 {
    match status {
        SmokerStatus::NeverSmoked => 10,
        SmokerStatus::FormerSmoker => 7,
        SmokerStatus::SomeDays => -7,
        SmokerStatus::EveryDay => -10,
        SmokerStatus::Other => 0,
    }
}

#[must_use]
pub const fn e_cigarette_points(usage: ECigaretteUsage) -> i32 {
    match usage {
        ECigaretteUsage::NeverUsed => 10,
        ECigaretteUsage::NotAtAll => 5,
        ECigaretteUsage::SomeDays => -7,
        ECigaretteUsage::EveryDay => -10,
        ECigaretteUsage::Other => 0,
    }
}

#[must_use]
pub const fn alcohol_points(answer: AlcoholDrinkers) -> i32 {
    match answer {
        AlcoholDrinkers::No => 10,
        AlcoholDrinkers::Yes => -10,
        AlcoholDrinkers::Other => 0,
    }
}

/// Per-term contributions behind a health score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Each term and the points it added, in evaluation order
    pub contributions: SmallVec<[(ScoreTerm, i32); 8]>,
    /// Base plus every contribution, before clamping
    pub raw_total: i32,
    /// `raw_total` clamped to [0, 100]
    pub score: u8,
}

impl ScoreBreakdown {
    /// Points contributed by one term
    #[must_use]
    pub fn points(&self, term: ScoreTerm) -> i32 {
        self.contributions
            .iter()
            .find(|(t, _)| *t == term)
            .map_or(0, |(_, points)| *points)
    }
}

/// Score a record and keep every term's contribution
#[must_use]
pub fn score_breakdown(record: &HealthRecord) -> ScoreBreakdown {
    let record_bmi = bmi(record.weight_in_kilograms, record.height_in_meters);

    let contributions: SmallVec<[(ScoreTerm, i32); 8]> = SmallVec::from_buf([
        (
            ScoreTerm::GeneralHealth,
            general_health_points(record.general_health),
        ),
        (
            ScoreTerm::PhysicalHealthDays,
            unwell_days_points(record.physical_health_days),
        ),
        (
            ScoreTerm::MentalHealthDays,
            unwell_days_points(record.mental_health_days),
        ),
        (ScoreTerm::Bmi, bmi_points(record_bmi)),
        (ScoreTerm::SleepHours, sleep_points(record.sleep_hours)),
        (ScoreTerm::SmokerStatus, smoker_points(record.smoker_status)),
        (
            ScoreTerm::ECigaretteUsage,
            e_cigarette_points(record.e_cigarette_usage),
        ),
        (
            ScoreTerm::AlcoholDrinkers,
            alcohol_points(record.alcohol_drinkers),
        ),
    ]);

    let raw_total = BASE_SCORE + contributions.iter().map(|(_, points)| points).sum::<i32>();
    let score = u8::try_from(raw_total.clamp(MIN_SCORE, MAX_SCORE)).unwrap_or(u8::MIN);

    ScoreBreakdown {
        contributions,
        raw_total,
        score,
    }
}

/// Composite health score in [0, 100]
#[must_use]
pub fn health_score(record: &HealthRecord) -> u8 {
    score_breakdown(record).score
}
