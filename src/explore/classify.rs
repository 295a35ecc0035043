//! Column classification by declared storage type

use arrow::array::Array;
use arrow::datatypes::DataType;

use crate::error::{Error, Result};
use crate::models::HealthTable;
use crate::utils::arrow::{extract_f64, extract_string, is_categorical, is_numeric};
use crate::utils::arrow::{to_f64_array, to_string_array};

/// How a column is explored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
    /// Dates, lists and other types no chart is defined for
    Unsupported,
}

impl ColumnKind {
    #[must_use]
    pub fn of(data_type: &DataType) -> Self {
        if is_numeric(data_type) {
            Self::Numeric
        } else if is_categorical(data_type) {
            Self::Categorical
        } else {
            Self::Unsupported
        }
    }
}

/// Classify a table column
pub fn classify_column(table: &HealthTable, name: &str) -> Result<ColumnKind> {
    Ok(ColumnKind::of(&table.data_type(name)?))
}

/// Classify a column, failing for types no chart is defined for
pub fn chartable_kind(table: &HealthTable, name: &str) -> Result<ColumnKind> {
    match classify_column(table, name)? {
        ColumnKind::Unsupported => Err(Error::InvalidColumnType {
            column: name.to_string(),
            expected: "numeric or categorical".to_string(),
            actual: table.data_type(name)?.to_string(),
        }
        .into()),
        kind => Ok(kind),
    }
}

/// Names of the numeric columns, in schema order
#[must_use]
pub fn numeric_columns(table: &HealthTable) -> Vec<String> {
    columns_of_kind(table, ColumnKind::Numeric)
}

/// Names of the categorical columns, in schema order
#[must_use]
pub fn categorical_columns(table: &HealthTable) -> Vec<String> {
    columns_of_kind(table, ColumnKind::Categorical)
}

fn columns_of_kind(table: &HealthTable, kind: ColumnKind) -> Vec<String> {
    table
        .schema()
        .fields()
        .iter()
        .filter(|field| ColumnKind::of(field.data_type()) == kind)
        .map(|field| field.name().clone())
        .collect()
}

/// A numeric column as per-row optional values
pub fn numeric_values(table: &HealthTable, name: &str) -> Result<Vec<Option<f64>>> {
    let values = to_f64_array(table.column(name)?, name)?;
    Ok((0..values.len()).map(|row| extract_f64(&values, row)).collect())
}

/// A categorical column as per-row optional labels
pub fn category_labels(table: &HealthTable, name: &str) -> Result<Vec<Option<String>>> {
    let labels = to_string_array(table.column(name)?, name)?;
    Ok((0..labels.len())
        .map(|row| extract_string(&labels, row).map(str::to_string))
        .collect())
}
