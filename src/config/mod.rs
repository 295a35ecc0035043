//! Configuration for loading and exploring the survey table.

/// Configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Rows per record batch when reading files
    pub batch_size: usize,
    /// Number of CSV rows sampled for schema inference
    pub infer_rows: usize,
    /// Number of bins in numeric histograms
    pub histogram_bins: usize,
    /// Number of grid points in density estimates
    pub density_points: usize,
    /// Largest distinct-value count still drawn as a pie chart
    pub pie_category_limit: usize,
    /// Upper bound on points per scatter-style chart (larger inputs are strided)
    pub max_points: usize,
    /// Rows shown when printing table samples
    pub sample_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            infer_rows: 1000,
            histogram_bins: 30,
            density_points: 200,
            pie_category_limit: 7,
            max_points: 5000,
            sample_rows: 10,
        }
    }
}
