//! Single-column exploration
//!
//! Numeric columns get a histogram, a box plot and a density curve.
//! Categorical columns get a pie of value counts when they have few distinct
//! values, and a frequency histogram otherwise.

use smallvec::{SmallVec, smallvec};

use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::explore::chart::{Chart, distribution_title};
use crate::explore::classify::{ColumnKind, category_labels, chartable_kind};
use crate::explore::stats::{BoxStats, appearance_counts, histogram, kernel_density, value_counts};
use crate::models::HealthTable;
use crate::utils::arrow::finite_values;

/// Charts for one column, chosen by its storage type
pub fn univariate(
    table: &HealthTable,
    column: &str,
    config: &DashboardConfig,
) -> Result<SmallVec<[Chart; 3]>> {
    let charts = match chartable_kind(table, column)? {
        ColumnKind::Numeric => numeric_charts(table, column, config)?,
        _ => smallvec![categorical_chart(table, column, config)?],
    };
    log::debug!("Built {} charts for '{column}'", charts.len());
    Ok(charts)
}

fn numeric_charts(
    table: &HealthTable,
    column: &str,
    config: &DashboardConfig,
) -> Result<SmallVec<[Chart; 3]>> {
    let values = finite_values(table.batch(), column)?;

    let stats = BoxStats::from_values(&values).ok_or_else(|| Error::EmptyColumn(column.to_string()))?;
    let (bandwidth, curve) = kernel_density(&values, config.density_points)
        .ok_or_else(|| Error::EmptyColumn(column.to_string()))?;

    Ok(smallvec![
        Chart::Histogram {
            title: distribution_title(column),
            column: column.to_string(),
            bins: histogram(&values, config.histogram_bins),
        },
        Chart::BoxPlot {
            title: distribution_title(column),
            column: column.to_string(),
            stats,
        },
        Chart::Density {
            title: distribution_title(column),
            column: column.to_string(),
            bandwidth,
            curve,
        },
    ])
}

fn categorical_chart(table: &HealthTable, column: &str, config: &DashboardConfig) -> Result<Chart> {
    let labels = category_labels(table, column)?;
    let labels = labels.iter().map(Option::as_deref);

    let counts = appearance_counts(labels.clone());
    if counts.is_empty() {
        return Err(Error::EmptyColumn(column.to_string()).into());
    }

    if counts.len() <= config.pie_category_limit {
        Ok(Chart::Pie {
            title: distribution_title(column),
            column: column.to_string(),
            slices: value_counts(labels),
        })
    } else {
        Ok(Chart::CategoryHistogram {
            title: format!("Histogram of {column}"),
            column: column.to_string(),
            counts,
        })
    }
}
