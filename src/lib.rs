//! A Rust library for exploring the heart-health survey dataset: loading,
//! feature derivation, chart construction and manual intake.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod explore;
pub mod intake;
pub mod loader;
pub mod models;
pub mod overview;
pub mod utils;

// Core types
pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use models::{HealthRecord, HealthTable, records_to_batch};

// Feature derivation
pub use algorithm::{DerivedFeatures, derive_features, derive_record};
pub use algorithm::features::{ScoreBreakdown, health_score, score_breakdown};

// Exploration
pub use explore::{Chart, ColumnKind, bivariate, classify_column, correlation_heatmap};
pub use explore::{multivariate, univariate};

// Loading and intake
pub use intake::{IntakeForm, IntakeSubmission};
pub use loader::load_table;

// Arrow types
pub use arrow::record_batch::RecordBatch;
