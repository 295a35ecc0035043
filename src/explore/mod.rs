//! Chart construction for the exploration views
//!
//! Every builder returns [`Chart`] values holding both the chart type and
//! its computed data. The chart type follows the storage type of each
//! column, see [`ColumnKind`].

pub mod bivariate;
pub mod chart;
pub mod classify;
pub mod multivariate;
pub mod stats;
pub mod univariate;

pub use bivariate::bivariate;
pub use chart::{Chart, ChartKind, charts_to_json};
pub use classify::{ColumnKind, categorical_columns, classify_column, numeric_columns};
pub use multivariate::{correlation_heatmap, multivariate};
pub use stats::Summary;
pub use univariate::univariate;
