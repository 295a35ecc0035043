//! Log lines for loading and deriving survey tables

use std::path::Path;
use std::time::Duration;

use crate::models::HealthTable;

/// Announce a survey file read
pub fn log_load_start(path: &Path) {
    log::info!("Loading survey data from {}", path.display());
}

/// Report the shape of a freshly loaded table
pub fn log_table_loaded(path: &Path, table: &HealthTable, elapsed: Duration) {
    log::info!(
        "Loaded {} rows x {} columns from {} in {elapsed:?}",
        table.num_rows(),
        table.schema().fields().len(),
        path.display()
    );
}

/// Report which columns a table pass wrote and over how many rows
pub fn log_columns_written(written: &[&str], rows: usize, elapsed: Duration) {
    log::info!("Wrote {} for {rows} rows in {elapsed:?}", written.join(", "));
}

pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
