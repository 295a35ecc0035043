//! Chart specifications
//!
//! Charts carry their computed data (bins, quartiles, density curves, counts)
//! and serialize to JSON, so any drawing surface can render them.

use serde::Serialize;

use crate::explore::stats::{BoxStats, CategoryCount, HistogramBin};

/// A point on a scatter or density curve
pub type Point = (f64, f64);

/// Counts of one category split by a second category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stack {
    pub category: String,
    pub segments: Vec<CategoryCount>,
}

/// Box statistics of a numeric column within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub category: String,
    pub stats: BoxStats,
}

/// Density curve of a numeric column within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolinGroup {
    pub category: String,
    pub bandwidth: f64,
    pub curve: Vec<Point>,
}

/// Raw values of a numeric column within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripGroup {
    pub category: String,
    pub values: Vec<f64>,
}

/// One panel of a scatter matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub x: String,
    pub y: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Histogram {
        title: String,
        column: String,
        bins: Vec<HistogramBin>,
    },
    BoxPlot {
        title: String,
        column: String,
        stats: BoxStats,
    },
    Density {
        title: String,
        column: String,
        bandwidth: f64,
        curve: Vec<Point>,
    },
    Pie {
        title: String,
        column: String,
        slices: Vec<CategoryCount>,
    },
    CategoryHistogram {
        title: String,
        column: String,
        counts: Vec<CategoryCount>,
    },
    Scatter {
        title: String,
        x: String,
        y: String,
        points: Vec<Point>,
    },
    StackedBar {
        title: String,
        x: String,
        color: String,
        stacks: Vec<Stack>,
    },
    GroupedBox {
        title: String,
        category: String,
        value: String,
        groups: Vec<BoxGroup>,
    },
    Violin {
        title: String,
        category: String,
        value: String,
        groups: Vec<ViolinGroup>,
    },
    Strip {
        title: String,
        category: String,
        value: String,
        groups: Vec<StripGroup>,
    },
    Heatmap {
        title: String,
        columns: Vec<String>,
        /// Row-major correlation matrix; `None` where undefined
        matrix: Vec<Vec<Option<f64>>>,
    },
    ScatterMatrix {
        title: String,
        columns: Vec<String>,
        cells: Vec<MatrixCell>,
    },
}

/// Chart type without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    BoxPlot,
    Density,
    Pie,
    CategoryHistogram,
    Scatter,
    StackedBar,
    GroupedBox,
    Violin,
    Strip,
    Heatmap,
    ScatterMatrix,
}

impl Chart {
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Histogram { .. } => ChartKind::Histogram,
            Self::BoxPlot { .. } => ChartKind::BoxPlot,
            Self::Density { .. } => ChartKind::Density,
            Self::Pie { .. } => ChartKind::Pie,
            Self::CategoryHistogram { .. } => ChartKind::CategoryHistogram,
            Self::Scatter { .. } => ChartKind::Scatter,
            Self::StackedBar { .. } => ChartKind::StackedBar,
            Self::GroupedBox { .. } => ChartKind::GroupedBox,
            Self::Violin { .. } => ChartKind::Violin,
            Self::Strip { .. } => ChartKind::Strip,
            Self::Heatmap { .. } => ChartKind::Heatmap,
            Self::ScatterMatrix { .. } => ChartKind::ScatterMatrix,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Histogram { title, .. }
            | Self::BoxPlot { title, .. }
            | Self::Density { title, .. }
            | Self::Pie { title, .. }
            | Self::CategoryHistogram { title, .. }
            | Self::Scatter { title, .. }
            | Self::StackedBar { title, .. }
            | Self::GroupedBox { title, .. }
            | Self::Violin { title, .. }
            | Self::Strip { title, .. }
            | Self::Heatmap { title, .. }
            | Self::ScatterMatrix { title, .. } => title,
        }
    }
}

/// Serialize charts as a pretty JSON array
pub fn charts_to_json(charts: &[Chart]) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(charts)?)
}

/// Title shared by single-column distribution charts
#[must_use]
pub fn distribution_title(column: &str) -> String {
    format!("Distribution of {column}")
}

/// Title shared by two-column charts
#[must_use]
pub fn pair_title(x: &str, y: &str) -> String {
    format!("Distribution between {x} & {y}")
}
