//! Arrow data handling utilities
//!
//! Helpers for column lookup, type casting and row-level extraction over
//! the survey's record batches.

pub mod array_utils;
pub mod conversion;
pub mod extractors;

pub use array_utils::{downcast_array, get_column, get_column_index, null_counts};
pub use conversion::{is_categorical, is_numeric, to_f64_array, to_string_array};
pub use extractors::{extract_f64, extract_string, finite_values, float_column, string_column};
