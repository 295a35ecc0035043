//! Console output utilities
//!
//! Plain-text reports for the CLI. Tables go through arrow's pretty printer.

use anyhow::Context;
use arrow::util::pretty::pretty_format_batches;

use crate::algorithm::features::ScoreBreakdown;
use crate::algorithm::features::score::BASE_SCORE;
use crate::error::Result;
use crate::explore::stats::{CategoryCount, Summary};
use crate::models::HealthTable;
use crate::overview::ColumnInfo;

/// Print row and column totals
pub fn print_table_summary(table: &HealthTable, elapsed: std::time::Duration) {
    println!("Loaded table in {elapsed:?}");
    println!(
        "Total rows: {}, columns: {}",
        table.num_rows(),
        table.schema().fields().len()
    );
}

/// Print the column names, one per line
pub fn print_columns(table: &HealthTable) {
    println!("Columns:");
    for name in table.column_names() {
        println!("  - {name}");
    }
}

/// Print the non-null count and type of every column
pub fn print_schema_info(info: &[ColumnInfo], rows: usize) {
    let width = info.iter().map(|c| c.name.len()).max().unwrap_or(6).max(6);
    println!("{rows} entries, {} columns", info.len());
    println!(" #  {:<width$}  Non-Null Count  Dtype", "Column");
    for (i, column) in info.iter().enumerate() {
        println!(
            "{i:>2}  {:<width$}  {:>8} non-null  {}",
            column.name, column.non_null, column.dtype
        );
    }
}

/// Print the first `num_rows` rows as a table
pub fn print_sample_rows(table: &HealthTable, num_rows: usize) -> Result<()> {
    let sample = table.batch().slice(0, num_rows.min(table.num_rows()));
    let rendered = pretty_format_batches(&[sample]).context("Failed to format sample rows")?;
    println!("First {num_rows} rows:");
    println!("{rendered}");
    Ok(())
}

/// Print describe-style statistics, one row per column
pub fn print_describe(summaries: &[(String, Summary)]) {
    let width = summaries.iter().map(|(n, _)| n.len()).max().unwrap_or(6).max(6);
    println!(
        "{:<width$} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for (name, s) in summaries {
        println!(
            "{name:<width$} {:>8} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            s.count, s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max
        );
    }
}

/// Print a column's distinct values and their counts
pub fn print_value_counts(column: &str, counts: &[CategoryCount]) {
    println!("Unique values of {column}: {}", counts.len());
    for c in counts {
        println!("  {:<40} {}", c.category, c.count);
    }
}

/// Print each scoring term's contribution and the final score
pub fn print_score_breakdown(breakdown: &ScoreBreakdown) {
    println!("{:<20} {:>6}", "Base", BASE_SCORE);
    for (term, points) in &breakdown.contributions {
        println!("{:<20} {points:>+6}", term.column());
    }
    println!("{:<20} {:>6}", "Raw total", breakdown.raw_total);
    println!("{:<20} {:>6}", "HealthScore", breakdown.score);
}
