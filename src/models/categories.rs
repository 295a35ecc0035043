//! Closed enumerations for the survey's categorical answers.
//!
//! Every enum parses from the dataset's exact label and falls back to an
//! explicit catch-all variant, so lookups over them are total.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Self-reported general health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralHealth {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
    /// Any other answer
    Other,
}

impl GeneralHealth {
    /// Labels offered by the intake form, in form order
    pub const OPTIONS: [Self; 5] = [
        Self::VeryGood,
        Self::Excellent,
        Self::Fair,
        Self::Poor,
        Self::Good,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Excellent" => Self::Excellent,
            "Very good" => Self::VeryGood,
            "Good" => Self::Good,
            "Fair" => Self::Fair,
            "Poor" => Self::Poor,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Other => "Other",
        }
    }
}

/// Cigarette smoking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmokerStatus {
    NeverSmoked,
    FormerSmoker,
    SomeDays,
    EveryDay,
    Other,
}

impl SmokerStatus {
    pub const OPTIONS: [Self; 4] = [
        Self::NeverSmoked,
        Self::SomeDays,
        Self::FormerSmoker,
        Self::EveryDay,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Never smoked" => Self::NeverSmoked,
            "Former smoker" => Self::FormerSmoker,
            "Current smoker - now smokes some days" => Self::SomeDays,
            "Current smoker - now smokes every day" => Self::EveryDay,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeverSmoked => "Never smoked",
            Self::FormerSmoker => "Former smoker",
            Self::SomeDays => "Current smoker - now smokes some days",
            Self::EveryDay => "Current smoker - now smokes every day",
            Self::Other => "Other",
        }
    }
}

/// E-cigarette usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECigaretteUsage {
    NeverUsed,
    NotAtAll,
    SomeDays,
    EveryDay,
    Other,
}

impl ECigaretteUsage {
    pub const OPTIONS: [Self; 4] = [
        Self::NotAtAll,
        Self::NeverUsed,
        Self::EveryDay,
        Self::SomeDays,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Never used e-cigarettes in my entire life" => Self::NeverUsed,
            "Not at all (right now)" => Self::NotAtAll,
            "Use them some days" => Self::SomeDays,
            "Use them every day" => Self::EveryDay,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeverUsed => "Never used e-cigarettes in my entire life",
            Self::NotAtAll => "Not at all (right now)",
            Self::SomeDays => "Use them some days",
            Self::EveryDay => "Use them every day",
            Self::Other => "Other",
        }
    }
}

/// Whether the respondent drinks alcohol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlcoholDrinkers {
    No,
    Yes,
    Other,
}

impl AlcoholDrinkers {
    pub const OPTIONS: [Self; 2] = [Self::No, Self::Yes];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "No" => Self::No,
            "Yes" => Self::Yes,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
            Self::Other => "Other",
        }
    }
}

/// A Yes/No answer. Anything else is treated as a missing answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub const OPTIONS: [Self; 2] = [Self::No, Self::Yes];

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    pub const OPTIONS: [Self; 2] = [Self::Female, Self::Male];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Female" => Self::Female,
            "Male" => Self::Male,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }
}

/// Time since the last routine checkup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckupTime {
    WithinPastYear,
    WithinPastTwoYears,
    WithinPastFiveYears,
    FiveOrMoreYears,
    Other,
}

impl CheckupTime {
    pub const OPTIONS: [Self; 4] = [
        Self::WithinPastYear,
        Self::WithinPastTwoYears,
        Self::WithinPastFiveYears,
        Self::FiveOrMoreYears,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Within past year (anytime less than 12 months ago)" => Self::WithinPastYear,
            "Within past 2 years (1 year but less than 2 years ago)" => Self::WithinPastTwoYears,
            "Within past 5 years (2 years but less than 5 years ago)" => {
                Self::WithinPastFiveYears
            }
            "5 or more years ago" => Self::FiveOrMoreYears,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WithinPastYear => "Within past year (anytime less than 12 months ago)",
            Self::WithinPastTwoYears => "Within past 2 years (1 year but less than 2 years ago)",
            Self::WithinPastFiveYears => {
                "Within past 5 years (2 years but less than 5 years ago)"
            }
            Self::FiveOrMoreYears => "5 or more years ago",
            Self::Other => "Other",
        }
    }
}

/// States and territories offered by the intake form
pub const STATES: [&str; 54] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    "Guam",
    "Puerto Rico",
    "Virgin Islands",
];

/// State of residence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum State {
    /// One of [`STATES`]
    Known(&'static str),
    /// Any other label, kept verbatim
    Other(String),
}

impl State {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        STATES
            .iter()
            .find(|state| **state == label)
            .map_or_else(|| Self::Other(label.to_string()), |state| Self::Known(state))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(name) => name,
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Label written back to a table; unlisted states keep their source text
    #[must_use]
    pub fn recorded_label(&self) -> Option<&str> {
        Some(self.label()).filter(|label| !label.is_empty())
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }
        )*
    };
}

// Answers travel as the dataset's own label strings.
macro_rules! impl_deserialize_from_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let label = String::deserialize(deserializer)?;
                    Ok(Self::from_label(&label))
                }
            }
        )*
    };
}

// `Other` stands for a missing or unrecognised answer and is stored as null.
macro_rules! impl_recorded_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                #[must_use]
                pub const fn recorded_label(self) -> Option<&'static str> {
                    match self {
                        Self::Other => None,
                        known => Some(known.label()),
                    }
                }
            }
        )*
    };
}

impl_recorded_label!(
    GeneralHealth,
    SmokerStatus,
    ECigaretteUsage,
    AlcoholDrinkers,
    Sex,
    CheckupTime,
);

impl_display_via_label!(
    GeneralHealth,
    SmokerStatus,
    ECigaretteUsage,
    AlcoholDrinkers,
    YesNo,
    Sex,
    CheckupTime,
    State,
);

impl_deserialize_from_label!(
    GeneralHealth,
    SmokerStatus,
    ECigaretteUsage,
    AlcoholDrinkers,
    Sex,
    CheckupTime,
    State,
);

impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("expected \"Yes\" or \"No\", got \"{label}\"")))
    }
}
