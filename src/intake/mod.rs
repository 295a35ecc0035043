//! Manual data entry for a single respondent
//!
//! [`IntakeForm`] describes the widgets and their constraints.
//! [`IntakeSubmission`] collects answers and turns them into a
//! [`HealthRecord`](crate::models::HealthRecord), which is echoed back and
//! never stored.

pub mod form;
pub mod submission;

pub use form::{FieldKind, FieldSpec, IntakeForm};
pub use submission::IntakeSubmission;
