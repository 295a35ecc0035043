//! Field extraction utilities for Arrow record batches
//!
//! Row-level reads with the survey's missing-value rules: null and NaN
//! measurements are missing, and so are null or empty answers.

use arrow::array::{Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow::array_utils::get_column;
use crate::utils::arrow::conversion::{to_f64_array, to_string_array};

/// Read a measurement; null and NaN are both missing
#[must_use]
pub fn extract_f64(array: &Float64Array, row: usize) -> Option<f64> {
    if row >= array.len() || array.is_null(row) {
        return None;
    }
    let value = array.value(row);
    (!value.is_nan()).then_some(value)
}

/// Read an answer; null and empty strings are both missing
#[must_use]
pub fn extract_string(array: &StringArray, row: usize) -> Option<&str> {
    if row >= array.len() || array.is_null(row) {
        return None;
    }
    let value = array.value(row);
    (!value.is_empty()).then_some(value)
}

/// A column cast to Float64, or `None` when the batch lacks it
pub fn float_column(batch: &RecordBatch, column_name: &str) -> Result<Option<Float64Array>> {
    get_column(batch, column_name, false)?
        .map(|column| to_f64_array(&column, column_name))
        .transpose()
}

/// A column cast to Utf8, or `None` when the batch lacks it
pub fn string_column(batch: &RecordBatch, column_name: &str) -> Result<Option<StringArray>> {
    get_column(batch, column_name, false)?
        .map(|column| to_string_array(&column, column_name))
        .transpose()
}

/// Non-missing values of a numeric column
pub fn finite_values(batch: &RecordBatch, column_name: &str) -> Result<Vec<f64>> {
    let values = float_column(batch, column_name)?.ok_or_else(|| {
        crate::error::Error::ColumnNotFound {
            column: column_name.to_string(),
        }
    })?;
    Ok((0..values.len())
        .filter_map(|row| extract_f64(&values, row))
        .filter(|value| value.is_finite())
        .collect())
}
