//! The in-memory survey table.
//!
//! `HealthTable` is the value threaded from the loader through feature
//! derivation into exploration. It always holds exactly one record batch.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::compute::concat_batches;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};
use crate::models::categories::{
    AlcoholDrinkers, CheckupTime, ECigaretteUsage, GeneralHealth, Sex, SmokerStatus, State, YesNo,
};
use crate::models::columns;
use crate::models::record::HealthRecord;
use crate::utils::arrow::{extract_f64, extract_string, float_column, string_column};

/// Survey table backed by a single Arrow record batch
#[derive(Debug, Clone)]
pub struct HealthTable {
    batch: RecordBatch,
}

impl HealthTable {
    /// Wrap an existing record batch
    #[must_use]
    pub const fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Concatenate batches read from a file into one table
    pub fn from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Self> {
        let batch = concat_batches(&schema, batches)?;
        Ok(Self { batch })
    }

    /// Build a table from typed records, one row per record
    pub fn from_records(records: &[HealthRecord]) -> Result<Self> {
        Ok(Self::new(records_to_batch(records)?))
    }

    #[must_use]
    pub const fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    #[must_use]
    pub fn into_batch(self) -> RecordBatch {
        self.batch
    }

    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&ArrayRef> {
        let idx = self.batch.schema().index_of(name).map_err(|_| Error::ColumnNotFound {
            column: name.to_string(),
        })?;
        Ok(self.batch.column(idx))
    }

    /// Declared storage type of a column
    pub fn data_type(&self, name: &str) -> Result<DataType> {
        Ok(self.column(name)?.data_type().clone())
    }

    /// Replace columns that already exist (in place) and append the rest
    pub fn with_columns(&self, new_columns: Vec<(Field, ArrayRef)>) -> Result<Self> {
        let schema = self.batch.schema();
        let mut fields: Vec<Field> = schema.fields().iter().map(|f| f.as_ref().clone()).collect();
        let mut arrays: Vec<ArrayRef> = self.batch.columns().to_vec();

        for (field, array) in new_columns {
            match fields.iter().position(|existing| existing.name() == field.name()) {
                Some(idx) => {
                    fields[idx] = field;
                    arrays[idx] = array;
                }
                None => {
                    fields.push(field);
                    arrays.push(array);
                }
            }
        }

        let schema = Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()));
        Ok(Self::new(RecordBatch::try_new(schema, arrays)?))
    }

    /// Materialise every row as a typed record.
    ///
    /// Columns absent from the table read as missing values.
    pub fn records(&self) -> Result<Vec<HealthRecord>> {
        let source = SourceColumns::read(&self.batch)?;
        Ok((0..self.num_rows()).map(|row| source.record(row)).collect())
    }

    /// Materialise a single row
    pub fn record(&self, row: usize) -> Result<HealthRecord> {
        if row >= self.num_rows() {
            return Err(Error::invalid_input(
                "row",
                format!("{row} is out of range for {} rows", self.num_rows()),
            )
            .into());
        }
        Ok(SourceColumns::read(&self.batch)?.record(row))
    }
}

/// Source columns of a batch cast to the types records are built from
struct SourceColumns {
    state: Option<StringArray>,
    sex: Option<StringArray>,
    general_health: Option<StringArray>,
    last_checkup_time: Option<StringArray>,
    flags: Vec<(&'static str, Option<StringArray>)>,
    smoker_status: Option<StringArray>,
    e_cigarette_usage: Option<StringArray>,
    alcohol_drinkers: Option<StringArray>,
    measurements: Vec<(&'static str, Option<Float64Array>)>,
}

const FLAG_COLUMNS: [&str; 13] = [
    columns::HAD_HEART_ATTACK,
    columns::HAD_ANGINA,
    columns::HAD_STROKE,
    columns::HAD_ASTHMA,
    columns::HAD_SKIN_CANCER,
    columns::HAD_COPD,
    columns::HAD_DEPRESSIVE_DISORDER,
    columns::HAD_KIDNEY_DISEASE,
    columns::HAD_ARTHRITIS,
    columns::HAD_DIABETES,
    columns::CHEST_SCAN,
    columns::FLU_VAX_LAST_12,
    columns::PNEUMO_VAX_EVER,
];

impl SourceColumns {
    fn read(batch: &RecordBatch) -> Result<Self> {
        let flags = FLAG_COLUMNS
            .iter()
            .map(|name| Ok((*name, string_column(batch, name)?)))
            .collect::<Result<Vec<_>>>()?;
        let measurements = columns::MEASUREMENTS
            .iter()
            .map(|name| Ok((*name, float_column(batch, name)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            state: string_column(batch, columns::STATE)?,
            sex: string_column(batch, columns::SEX)?,
            general_health: string_column(batch, columns::GENERAL_HEALTH)?,
            last_checkup_time: string_column(batch, columns::LAST_CHECKUP_TIME)?,
            flags,
            smoker_status: string_column(batch, columns::SMOKER_STATUS)?,
            e_cigarette_usage: string_column(batch, columns::E_CIGARETTE_USAGE)?,
            alcohol_drinkers: string_column(batch, columns::ALCOHOL_DRINKERS)?,
            measurements,
        })
    }

    fn record(&self, row: usize) -> HealthRecord {
        let mut record = HealthRecord {
            state: State::from_label(answer(&self.state, row)),
            sex: Sex::from_label(answer(&self.sex, row)),
            general_health: GeneralHealth::from_label(answer(&self.general_health, row)),
            last_checkup_time: CheckupTime::from_label(answer(&self.last_checkup_time, row)),
            smoker_status: SmokerStatus::from_label(answer(&self.smoker_status, row)),
            e_cigarette_usage: ECigaretteUsage::from_label(answer(&self.e_cigarette_usage, row)),
            alcohol_drinkers: AlcoholDrinkers::from_label(answer(&self.alcohol_drinkers, row)),
            ..HealthRecord::default()
        };

        for (name, column) in &self.flags {
            if let Some(flag) = record.flag_mut(name) {
                *flag = YesNo::from_label(answer(column, row));
            }
        }
        for (name, column) in &self.measurements {
            if let Some(value) = record.measurement_mut(name) {
                *value = column.as_ref().and_then(|array| extract_f64(array, row));
            }
        }

        record
    }
}

fn answer(column: &Option<StringArray>, row: usize) -> &str {
    column
        .as_ref()
        .and_then(|array| extract_string(array, row))
        .unwrap_or_default()
}

/// Convert records to a record batch using the dataset's column names
pub fn records_to_batch(records: &[HealthRecord]) -> Result<RecordBatch> {
    fn labels<F>(records: &[HealthRecord], f: F) -> ArrayRef
    where
        F: Fn(&HealthRecord) -> Option<String>,
    {
        Arc::new(records.iter().map(f).collect::<StringArray>())
    }

    fn numbers<F>(records: &[HealthRecord], f: F) -> ArrayRef
    where
        F: Fn(&HealthRecord) -> Option<f64>,
    {
        Arc::new(records.iter().map(f).collect::<Float64Array>())
    }

    let mut fields = vec![
        (columns::STATE, labels(records, |r| r.state.recorded_label().map(str::to_string))),
        (columns::SEX, labels(records, |r| r.sex.recorded_label().map(str::to_string))),
        (
            columns::GENERAL_HEALTH,
            labels(records, |r| r.general_health.recorded_label().map(str::to_string)),
        ),
        (
            columns::LAST_CHECKUP_TIME,
            labels(records, |r| r.last_checkup_time.recorded_label().map(str::to_string)),
        ),
    ];

    for (idx, name) in columns::CHRONIC_CONDITIONS.iter().enumerate() {
        fields.push((
            *name,
            labels(records, |r| r.chronic_flags()[idx].1.map(|f| f.label().to_string())),
        ));
    }

    fields.extend([
        (
            columns::SMOKER_STATUS,
            labels(records, |r| r.smoker_status.recorded_label().map(str::to_string)),
        ),
        (
            columns::E_CIGARETTE_USAGE,
            labels(records, |r| r.e_cigarette_usage.recorded_label().map(str::to_string)),
        ),
        (
            columns::ALCOHOL_DRINKERS,
            labels(records, |r| r.alcohol_drinkers.recorded_label().map(str::to_string)),
        ),
        (
            columns::CHEST_SCAN,
            labels(records, |r| r.chest_scan.map(|f| f.label().to_string())),
        ),
        (
            columns::FLU_VAX_LAST_12,
            labels(records, |r| r.flu_vax_last_12.map(|f| f.label().to_string())),
        ),
        (
            columns::PNEUMO_VAX_EVER,
            labels(records, |r| r.pneumo_vax_ever.map(|f| f.label().to_string())),
        ),
        (
            columns::PHYSICAL_HEALTH_DAYS,
            numbers(records, |r| r.physical_health_days),
        ),
        (
            columns::MENTAL_HEALTH_DAYS,
            numbers(records, |r| r.mental_health_days),
        ),
        (columns::SLEEP_HOURS, numbers(records, |r| r.sleep_hours)),
        (
            columns::HEIGHT_IN_METERS,
            numbers(records, |r| r.height_in_meters),
        ),
        (
            columns::WEIGHT_IN_KILOGRAMS,
            numbers(records, |r| r.weight_in_kilograms),
        ),
    ]);

    Ok(RecordBatch::try_from_iter(fields)?)
}
