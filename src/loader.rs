//! Survey file loading
//!
//! Reads a CSV (schema inferred from the leading rows) or a Parquet file into
//! a single [`HealthTable`]. An unreadable file is fatal to the caller.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::config::DashboardConfig;
use crate::error::util::{file_extension, safe_open_file};
use crate::error::{Error, Result};
use crate::models::{HealthTable, columns};
use crate::utils::logging::{
    create_spinner, finish_progress_bar, log_load_start, log_table_loaded, log_warning,
};

/// Supported survey file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyFormat {
    Csv,
    Parquet,
}

impl SurveyFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match file_extension(path).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet" | "parq") => Ok(Self::Parquet),
            other => Err(Error::UnsupportedFormat(
                other.map_or_else(|| path.display().to_string(), str::to_string),
            )
            .into()),
        }
    }
}

/// Load a survey file into a table
pub fn load_table(path: &Path, config: &DashboardConfig) -> Result<HealthTable> {
    let start = Instant::now();
    log_load_start(path);

    let format = SurveyFormat::from_path(path)?;
    let spinner = create_spinner(Some("Reading survey file"));
    let table = match format {
        SurveyFormat::Csv => read_csv(path, config),
        SurveyFormat::Parquet => read_parquet(path, config),
    };
    finish_progress_bar(&spinner, None);
    let table = table?;

    if table.num_rows() == 0 {
        log_warning("Survey file contains no rows", Some(path));
    }
    log_table_loaded(path, &table, start.elapsed());
    Ok(table)
}

/// Read a CSV file with a header row
pub fn read_csv(path: &Path, config: &DashboardConfig) -> Result<HealthTable> {
    let mut file = safe_open_file(path, "reading survey CSV")?;

    let format = Format::default().with_header(true);
    let (schema, sampled) = format
        .infer_schema(&mut file, Some(config.infer_rows))
        .with_context(|| format!("Failed to infer CSV schema for {}", path.display()))?;
    log::debug!(
        "Inferred {} columns from {sampled} rows of {}",
        schema.fields().len(),
        path.display()
    );
    file.seek(SeekFrom::Start(0))?;

    let schema = Arc::new(retype_null_fields(&schema));
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(config.batch_size)
        .build(file)
        .with_context(|| format!("Failed to build CSV reader for {}", path.display()))?;

    let batches = reader
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .with_context(|| format!("Failed to read record batch from {}", path.display()))?;

    HealthTable::from_batches(schema, &batches)
}

/// Give a type to columns that had no values in the sampled rows.
///
/// Measurements become Float64 and everything else Utf8, so values past the
/// sampled rows are still read.
fn retype_null_fields(schema: &Schema) -> Schema {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| {
            if field.data_type() != &DataType::Null {
                return field.as_ref().clone();
            }
            let data_type = if columns::MEASUREMENTS.contains(&field.name().as_str()) {
                DataType::Float64
            } else {
                DataType::Utf8
            };
            log::debug!("Column '{}' has no sampled values, reading as {data_type}", field.name());
            field.as_ref().clone().with_data_type(data_type).with_nullable(true)
        })
        .collect();
    Schema::new_with_metadata(fields, schema.metadata().clone())
}

/// Read a Parquet file
pub fn read_parquet(path: &Path, config: &DashboardConfig) -> Result<HealthTable> {
    let file: File = safe_open_file(path, "reading survey parquet")?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Failed to read parquet file: {}", path.display()))?;
    let schema = builder.schema().clone();
    let reader = builder
        .with_batch_size(config.batch_size)
        .build()
        .with_context(|| format!("Failed to build parquet reader for {}", path.display()))?;

    let batches = reader
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .with_context(|| format!("Failed to read record batch from {}", path.display()))?;

    HealthTable::from_batches(schema, &batches)
}
