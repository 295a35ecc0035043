//! Whole-table exploration over the numeric columns

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::explore::bivariate::paired_points;
use crate::explore::chart::{Chart, MatrixCell};
use crate::explore::classify::{numeric_columns, numeric_values};
use crate::explore::stats::pearson;
use crate::models::HealthTable;
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};

/// Pearson correlation matrix of every numeric column.
///
/// The diagonal is 1 for columns with any spread; pairs without two complete
/// rows or with a constant member are `None`.
pub fn correlation_heatmap(table: &HealthTable) -> Result<Chart> {
    let columns = numeric_columns(table);
    let values = columns
        .iter()
        .map(|name| numeric_values(table, name))
        .collect::<Result<Vec<_>>>()?;

    let matrix = values
        .iter()
        .map(|row| values.iter().map(|col| pearson(row, col)).collect())
        .collect();

    Ok(Chart::Heatmap {
        title: "Correlation Heatmap".to_string(),
        columns,
        matrix,
    })
}

/// Scatter matrix over every ordered pair of numeric columns
pub fn multivariate(table: &HealthTable, config: &DashboardConfig) -> Result<Chart> {
    let columns = numeric_columns(table);
    let values = columns
        .iter()
        .map(|name| numeric_values(table, name))
        .collect::<Result<Vec<_>>>()?;

    let panels = columns.len() * columns.len();
    let per_panel = (config.max_points / panels.max(1)).max(1);
    let pb = create_main_progress_bar(panels as u64, Some("Building scatter matrix"));

    let mut cells = Vec::with_capacity(panels);
    for (y, ys) in columns.iter().zip(&values) {
        for (x, xs) in columns.iter().zip(&values) {
            cells.push(MatrixCell {
                x: x.clone(),
                y: y.clone(),
                points: paired_points(xs, ys, per_panel),
            });
            pb.inc(1);
        }
    }
    finish_progress_bar(&pb, Some("Scatter matrix ready"));

    log::debug!("Scatter matrix over {} numeric columns", columns.len());
    Ok(Chart::ScatterMatrix {
        title: "Scatter Matrix".to_string(),
        columns,
        cells,
    })
}
