//! Algorithms over survey records
//!
//! Currently the feature derivation pass: BMI, chronic-condition flag and
//! the composite health score.

pub mod features;

pub use features::{DerivedFeatures, derive_features, derive_record};
