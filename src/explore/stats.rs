//! Statistics behind the exploration charts
//!
//! Provides:
//! - Descriptive summaries (count, mean, std, quartiles)
//! - Box-plot statistics with 1.5 IQR whiskers
//! - Fixed-width histograms
//! - Gaussian kernel density estimates (Scott's rule)
//! - Pearson correlation
//! - Category value counts

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Descriptive statistics for a numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN for a single value
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise finite values; `None` when there are none
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        let count = sorted.len();
        if count == 0 {
            return None;
        }

        let mean = sorted.iter().sum::<f64>() / count as f64;
        Some(Self {
            count,
            mean,
            std: sample_std(&sorted, mean),
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Five-number summary with Tukey whiskers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within 1.5 IQR below Q1
    pub lower_whisker: f64,
    /// Largest value within 1.5 IQR above Q3
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        if sorted.is_empty() {
            return None;
        }

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let fence = 1.5 * (q3 - q1);
        let (low_fence, high_fence) = (q1 - fence, q3 + fence);

        let inside = sorted.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let (lower_whisker, upper_whisker) = inside
            .minmax()
            .into_option()
            .unwrap_or((median, median));

        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// A histogram bin covering `[lower, upper)`; the last bin is closed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over finite values
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let sorted = sorted_finite(values);
    if sorted.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: sorted.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &sorted {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Gaussian kernel density estimate.
///
/// Returns the bandwidth and `points` evenly spaced `(x, density)` pairs
/// spanning three bandwidths beyond the data range.
#[must_use]
pub fn kernel_density(values: &[f64], points: usize) -> Option<(f64, Vec<(f64, f64)>)> {
    let sorted = sorted_finite(values);
    let n = sorted.len();
    if n == 0 || points == 0 {
        return None;
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = sample_std(&sorted, mean);
    let mut bandwidth = std * (n as f64).powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        bandwidth = 1.0;
    }

    let lo = sorted[0] - 3.0 * bandwidth;
    let hi = sorted[n - 1] + 3.0 * bandwidth;
    let step = if points > 1 {
        (hi - lo) / (points - 1) as f64
    } else {
        0.0
    };
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    let curve = (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = sorted
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect();

    Some((bandwidth, curve))
}

/// Pearson correlation over pairs where both values are finite
#[must_use]
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    (denom > 0.0).then(|| cov / denom)
}

/// A category and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Count non-missing labels, most frequent first (ties keep first appearance)
#[must_use]
pub fn value_counts<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = appearance_counts(labels);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Count non-missing labels in first-appearance order
#[must_use]
pub fn appearance_counts<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in labels.into_iter().flatten() {
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(CategoryCount {
                    category: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Linear-interpolated quantile of sorted values
#[must_use]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .sorted_by(f64::total_cmp)
        .collect()
}

fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}
