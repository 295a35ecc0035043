//! Survey data model
//!
//! Typed answers, the record they make up, and the table of records.

pub mod categories;
pub mod columns;
pub mod record;
pub mod table;

pub use categories::{
    AlcoholDrinkers, CheckupTime, ECigaretteUsage, GeneralHealth, STATES, Sex, SmokerStatus,
    State, YesNo,
};
pub use record::HealthRecord;
pub use table::{HealthTable, records_to_batch};
