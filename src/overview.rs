//! Dataset overview: column listing, schema report and descriptive statistics

use serde::Serialize;

use crate::error::{Error, Result};
use crate::explore::classify::{category_labels, chartable_kind, numeric_columns};
use crate::explore::stats::{CategoryCount, Summary, appearance_counts, value_counts};
use crate::explore::ColumnKind;
use crate::models::HealthTable;
use crate::utils::arrow::{finite_values, null_counts};

/// One line of the schema report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: String,
}

/// Per-column non-null counts and storage types, in schema order
#[must_use]
pub fn column_info(table: &HealthTable) -> Vec<ColumnInfo> {
    let rows = table.num_rows();
    let schema = table.schema();
    null_counts(table.batch())
        .into_iter()
        .zip(schema.fields())
        .map(|((name, nulls), field)| ColumnInfo {
            name,
            non_null: rows - nulls,
            dtype: field.data_type().to_string(),
        })
        .collect()
}

/// Summary statistics for every numeric column that has values
pub fn describe(table: &HealthTable) -> Result<Vec<(String, Summary)>> {
    let mut summaries = Vec::new();
    for name in numeric_columns(table) {
        match Summary::from_values(&finite_values(table.batch(), &name)?) {
            Some(summary) => summaries.push((name, summary)),
            None => log::debug!("Skipping '{name}' in describe: no values"),
        }
    }
    Ok(summaries)
}

/// Distinct labels of a categorical column in first-appearance order
pub fn unique_values(table: &HealthTable, column: &str) -> Result<Vec<String>> {
    let labels = categorical_labels(table, column)?;
    Ok(appearance_counts(labels.iter().map(Option::as_deref))
        .into_iter()
        .map(|c| c.category)
        .collect())
}

/// Label frequencies of a categorical column, most frequent first
pub fn column_value_counts(table: &HealthTable, column: &str) -> Result<Vec<CategoryCount>> {
    let labels = categorical_labels(table, column)?;
    Ok(value_counts(labels.iter().map(Option::as_deref)))
}

fn categorical_labels(table: &HealthTable, column: &str) -> Result<Vec<Option<String>>> {
    match chartable_kind(table, column)? {
        ColumnKind::Categorical => category_labels(table, column),
        _ => Err(Error::InvalidColumnType {
            column: column.to_string(),
            expected: "categorical".to_string(),
            actual: table.data_type(column)?.to_string(),
        }
        .into()),
    }
}
