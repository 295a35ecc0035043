//! Utilities for working with Arrow arrays.
//!
//! Lookup and downcast helpers that turn Arrow's dynamic arrays into typed
//! arrays with column-aware errors.

use arrow::array::{Array, ArrayRef};
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{Error, Result};

/// Get a column from a record batch by name
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `required` - Whether a missing column is an error (otherwise `None`)
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
) -> Result<Option<ArrayRef>> {
    match batch.schema().index_of(column_name) {
        Ok(idx) => Ok(Some(batch.column(idx).clone())),
        Err(_) if required => Err(Error::ColumnNotFound {
            column: column_name.to_string(),
        }
        .into()),
        Err(_) => {
            debug!("Column '{column_name}' not found in record batch");
            Ok(None)
        }
    }
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        Error::InvalidColumnType {
            column: column_name.to_string(),
            expected: expected_type_name.to_string(),
            actual: array.data_type().to_string(),
        }
        .into()
    })
}

/// Get the column index by name from a record batch
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch.schema().index_of(column_name).map_err(|_| {
        Error::ColumnNotFound {
            column: column_name.to_string(),
        }
        .into()
    })
}

/// Number of null entries per column, in schema order
#[must_use]
pub fn null_counts(batch: &RecordBatch) -> Vec<(String, usize)> {
    batch
        .schema()
        .fields()
        .iter()
        .zip(batch.columns())
        .map(|(field, column)| (field.name().clone(), column.null_count()))
        .collect()
}
