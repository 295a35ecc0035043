//! Casting survey columns to the two shapes the crate works with:
//! Float64 for measurements and Utf8 for answers.

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;

use crate::error::{Error, Result};
use crate::utils::arrow::array_utils::downcast_array;

/// Whether a data type is stored as a number
#[must_use]
pub const fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
    )
}

/// Whether a data type holds category labels
#[must_use]
pub fn is_categorical(data_type: &DataType) -> bool {
    match data_type {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Boolean => true,
        DataType::Dictionary(_, value) => is_categorical(value),
        _ => false,
    }
}

/// Cast a numeric column to `Float64Array`.
///
/// A `Null` column has no values to type and reads as all missing.
pub fn to_f64_array(column: &ArrayRef, column_name: &str) -> Result<Float64Array> {
    if !is_numeric(column.data_type()) && column.data_type() != &DataType::Null {
        return Err(Error::InvalidColumnType {
            column: column_name.to_string(),
            expected: "numeric".to_string(),
            actual: column.data_type().to_string(),
        }
        .into());
    }
    let casted = cast(column, &DataType::Float64)?;
    Ok(downcast_array::<Float64Array>(&casted, column_name, "Float64")?.clone())
}

/// Cast a categorical or numeric column to `StringArray`
pub fn to_string_array(column: &ArrayRef, column_name: &str) -> Result<StringArray> {
    if matches!(column.data_type(), DataType::Utf8) {
        return Ok(downcast_array::<StringArray>(column, column_name, "Utf8")?.clone());
    }
    let casted = cast(column, &DataType::Utf8)?;
    Ok(downcast_array::<StringArray>(&casted, column_name, "Utf8")?.clone())
}
