use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use heart_health::algorithm::features::{chronic_condition, reported_conditions};
use heart_health::explore::{Chart, charts_to_json};
use heart_health::intake::{IntakeForm, IntakeSubmission};
use heart_health::models::columns;
use heart_health::utils::arrow::get_column_index;
use heart_health::utils::logging::console;
use heart_health::{DashboardConfig, HealthTable, Result, overview};
use heart_health::{
    bivariate, correlation_heatmap, derive_features, load_table, multivariate, records_to_batch,
    score_breakdown, univariate,
};

/// Explore the heart-health survey dataset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Columns, schema report, summary statistics and value counts
    Overview {
        file: PathBuf,
        /// Categorical column whose unique values are listed
        #[arg(long)]
        column: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Derive BMI, ChronicCondition and HealthScore and print them
    Derive {
        file: PathBuf,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Build chart specifications from the derived table
    Explore {
        #[command(subcommand)]
        view: ExploreView,
    },
    /// Fill the intake form and echo the record
    Intake {
        #[command(flatten)]
        answers: AnswerArgs,
        /// Print the form layout instead of submitting it
        #[arg(long)]
        show_form: bool,
    },
    /// Score a record given as intake answers and print the breakdown
    Score {
        #[command(flatten)]
        answers: AnswerArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ExploreView {
    /// Charts for one column
    Uni {
        file: PathBuf,
        column: String,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Charts relating two columns
    Bi {
        file: PathBuf,
        x: String,
        y: String,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Correlation heatmap of the numeric columns
    Heatmap {
        file: PathBuf,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Scatter matrix of the numeric columns
    Multi {
        file: PathBuf,
        #[command(flatten)]
        chart: ChartArgs,
    },
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Rows to print
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Rows used to infer a CSV schema
    #[arg(long, default_value_t = 1000)]
    infer_rows: usize,
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Write chart JSON here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Histogram bin count
    #[arg(long, default_value_t = 30)]
    bins: usize,
    /// Upper bound on plotted points per chart
    #[arg(long, default_value_t = 5000)]
    max_points: usize,
}

#[derive(Args, Debug)]
struct AnswerArgs {
    /// An answer as NAME=VALUE, repeatable
    #[arg(long = "field", value_name = "NAME=VALUE")]
    fields: Vec<String>,
    /// JSON object of answers; --field values override it
    #[arg(long)]
    from: Option<PathBuf>,
}

impl TableArgs {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            sample_rows: self.rows,
            infer_rows: self.infer_rows,
            ..DashboardConfig::default()
        }
    }
}

impl ChartArgs {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            histogram_bins: self.bins,
            max_points: self.max_points,
            ..DashboardConfig::default()
        }
    }
}

impl AnswerArgs {
    fn submission(&self) -> Result<IntakeSubmission> {
        let mut submission = match &self.from {
            Some(path) => IntakeSubmission::from_json_file(path)?,
            None => IntakeSubmission::new(),
        };
        for assignment in &self.fields {
            submission.set_assignment(assignment)?;
        }
        Ok(submission)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Overview {
            file,
            column,
            table,
        } => run_overview(&file, column.as_deref(), &table.config()),
        Command::Derive { file, table } => run_derive(&file, &table.config()),
        Command::Explore { view } => run_explore(view),
        Command::Intake { answers, show_form } => {
            if show_form {
                println!("{}", serde_json::to_string_pretty(&IntakeForm::fields())?);
                return Ok(());
            }
            run_intake(&answers)
        }
        Command::Score { answers } => {
            let record = answers.submission()?.submit()?;
            console::print_score_breakdown(&score_breakdown(&record));
            println!(
                "{}: {}",
                chronic_condition(&record),
                reported_conditions(&record).join(", ")
            );
            Ok(())
        }
    }
}

fn run_overview(file: &Path, column: Option<&str>, config: &DashboardConfig) -> Result<()> {
    let start = Instant::now();
    let table = load_table(file, config)?;
    console::print_table_summary(&table, start.elapsed());

    console::print_columns(&table);
    console::print_schema_info(&overview::column_info(&table), table.num_rows());
    console::print_sample_rows(&table, config.sample_rows)?;
    console::print_describe(&overview::describe(&table)?);

    if let Some(column) = column {
        console::print_value_counts(column, &overview::column_value_counts(&table, column)?);
    }
    Ok(())
}

fn run_derive(file: &Path, config: &DashboardConfig) -> Result<()> {
    let table = derive_features(&load_table(file, config)?)?;

    let wanted = [
        columns::HEIGHT_IN_METERS,
        columns::WEIGHT_IN_KILOGRAMS,
        columns::BMI,
        columns::CHRONIC_CONDITION,
        columns::HEALTH_SCORE,
    ];
    let indices: Vec<usize> = wanted
        .iter()
        .filter_map(|name| get_column_index(table.batch(), name).ok())
        .collect();
    let derived = HealthTable::new(
        table
            .batch()
            .project(&indices)
            .context("Failed to select derived columns")?,
    );

    console::print_sample_rows(&derived, config.sample_rows)?;
    console::print_describe(&overview::describe(&derived)?);
    Ok(())
}

fn run_explore(view: ExploreView) -> Result<()> {
    let (file, chart_args) = match &view {
        ExploreView::Uni { file, chart, .. }
        | ExploreView::Bi { file, chart, .. }
        | ExploreView::Heatmap { file, chart }
        | ExploreView::Multi { file, chart } => (file, chart),
    };
    let config = chart_args.config();
    let table = derive_features(&load_table(file, &config)?)?;

    let charts: Vec<Chart> = match &view {
        ExploreView::Uni { column, .. } => univariate(&table, column, &config)?.into_vec(),
        ExploreView::Bi { x, y, .. } => bivariate(&table, x, y, &config)?.into_vec(),
        ExploreView::Heatmap { .. } => vec![correlation_heatmap(&table)?],
        ExploreView::Multi { .. } => vec![multivariate(&table, &config)?],
    };

    let json = charts_to_json(&charts)?;
    match &chart_args.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write charts to {}", path.display()))?;
            info!("Wrote {} charts to {}", charts.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_intake(answers: &AnswerArgs) -> Result<()> {
    let record = answers.submission()?.submit()?;

    println!("Your Input:");
    println!("{}", record.to_json()?);

    let echo = HealthTable::new(records_to_batch(std::slice::from_ref(&record))?);
    console::print_sample_rows(&echo, 1)
}
