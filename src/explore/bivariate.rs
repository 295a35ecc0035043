//! Two-column exploration
//!
//! - numeric x numeric: scatter
//! - categorical x categorical: stacked bar of the second within the first
//! - mixed: box, violin and strip plots grouped by the categorical column

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::explore::chart::{BoxGroup, Chart, Stack, StripGroup, ViolinGroup, pair_title};
use crate::explore::classify::{ColumnKind, category_labels, chartable_kind, numeric_values};
use crate::explore::stats::{BoxStats, appearance_counts, kernel_density};
use crate::models::HealthTable;

/// Charts relating two columns, chosen by their storage types
pub fn bivariate(
    table: &HealthTable,
    x: &str,
    y: &str,
    config: &DashboardConfig,
) -> Result<SmallVec<[Chart; 3]>> {
    let charts = match (chartable_kind(table, x)?, chartable_kind(table, y)?) {
        (ColumnKind::Numeric, ColumnKind::Numeric) => smallvec![scatter(table, x, y, config)?],
        (ColumnKind::Categorical, ColumnKind::Categorical) => {
            smallvec![stacked_bar(table, x, y)?]
        }
        (ColumnKind::Categorical, _) => grouped_charts(table, x, y, config)?,
        _ => grouped_charts(table, y, x, config)?,
    };
    Ok(charts)
}

/// Scatter of two numeric columns, rows missing either value dropped
pub fn scatter(table: &HealthTable, x: &str, y: &str, config: &DashboardConfig) -> Result<Chart> {
    Ok(Chart::Scatter {
        title: pair_title(x, y),
        x: x.to_string(),
        y: y.to_string(),
        points: paired_points(
            &numeric_values(table, x)?,
            &numeric_values(table, y)?,
            config.max_points,
        ),
    })
}

/// Complete `(x, y)` pairs, strided down to at most `max_points`
#[must_use]
pub fn paired_points(xs: &[Option<f64>], ys: &[Option<f64>], max_points: usize) -> Vec<(f64, f64)> {
    let complete: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| x.zip(*y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let stride = complete.len().div_ceil(max_points.max(1)).max(1);
    complete.into_iter().step_by(stride).collect()
}

fn stacked_bar(table: &HealthTable, x: &str, color: &str) -> Result<Chart> {
    let xs = category_labels(table, x)?;
    let colors = category_labels(table, color)?;

    let order = appearance_counts(xs.iter().map(Option::as_deref));
    let stacks = order
        .into_iter()
        .map(|group| {
            let segments = appearance_counts(
                xs.iter()
                    .zip(&colors)
                    .filter(|(label, _)| label.as_deref() == Some(group.category.as_str()))
                    .map(|(_, c)| c.as_deref()),
            );
            Stack {
                category: group.category,
                segments,
            }
        })
        .collect();

    Ok(Chart::StackedBar {
        title: pair_title(x, color),
        x: x.to_string(),
        color: color.to_string(),
        stacks,
    })
}

/// Numeric values of `value` grouped by the labels of `category`
fn grouped_values(
    table: &HealthTable,
    category: &str,
    value: &str,
) -> Result<Vec<(String, Vec<f64>)>> {
    let labels = category_labels(table, category)?;
    let values = numeric_values(table, value)?;

    let order = appearance_counts(labels.iter().map(Option::as_deref));
    let grouped = labels
        .iter()
        .zip(&values)
        .filter_map(|(label, v)| Some((label.as_deref()?, (*v)?)))
        .filter(|(_, v)| v.is_finite())
        .into_group_map();

    Ok(order
        .into_iter()
        .filter_map(|group| {
            let values = grouped.get(group.category.as_str())?.clone();
            Some((group.category, values))
        })
        .collect())
}

fn grouped_charts(
    table: &HealthTable,
    category: &str,
    value: &str,
    config: &DashboardConfig,
) -> Result<SmallVec<[Chart; 3]>> {
    let groups = grouped_values(table, category, value)?;
    let stride = groups
        .iter()
        .map(|(_, v)| v.len())
        .sum::<usize>()
        .div_ceil(config.max_points.max(1))
        .max(1);

    let boxes = groups
        .iter()
        .filter_map(|(name, values)| {
            Some(BoxGroup {
                category: name.clone(),
                stats: BoxStats::from_values(values)?,
            })
        })
        .collect();

    let violins = groups
        .iter()
        .filter_map(|(name, values)| {
            let (bandwidth, curve) = kernel_density(values, config.density_points)?;
            Some(ViolinGroup {
                category: name.clone(),
                bandwidth,
                curve,
            })
        })
        .collect();

    let strips = groups
        .into_iter()
        .map(|(name, values)| StripGroup {
            category: name,
            values: values.into_iter().step_by(stride).collect(),
        })
        .collect();

    let title = pair_title(category, value);
    Ok(smallvec![
        Chart::GroupedBox {
            title: title.clone(),
            category: category.to_string(),
            value: value.to_string(),
            groups: boxes,
        },
        Chart::Violin {
            title: title.clone(),
            category: category.to_string(),
            value: value.to_string(),
            groups: violins,
        },
        Chart::Strip {
            title,
            category: category.to_string(),
            value: value.to_string(),
            groups: strips,
        },
    ])
}
