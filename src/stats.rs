//! Descriptive statistics over per-dialog query counts
//!
//! Mean, min, max, and standard deviation come from trueno's SIMD vector
//! primitives; the median uses aprender's DescriptiveStats quantile, which is
//! more robust to outliers than the mean for skewed corpora.

use crate::dialog::Dialog;
use anyhow::{Context, Result};
use aprender::stats::DescriptiveStats;
use trueno::Vector;

/// Descriptive statistics for one corpus's query counts
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCountStats {
    /// Number of dialogs included (after any trimming)
    pub dialogs: usize,
    pub mean: f32,
    pub median: f32,
    pub min: f32,
    pub max: f32,
    pub stddev: f32,
}

/// Queries-per-dialog counts for a corpus, prompt included
pub fn query_counts(dialogs: &[Dialog]) -> Vec<f32> {
    dialogs.iter().map(|d| d.query_count() as f32).collect()
}

/// Compute descriptive statistics over query counts.
///
/// With `trim_outlier`, the single largest count is dropped first. Long-tail
/// dialogs (one runaway session) otherwise dominate the mean.
pub fn compute(counts: &[f32], trim_outlier: bool) -> Result<QueryCountStats> {
    let mut counts = counts.to_vec();
    if trim_outlier {
        drop_largest(&mut counts)?;
    }
    if counts.is_empty() {
        anyhow::bail!("Cannot compute statistics over an empty corpus");
    }

    let v = Vector::from_slice(&counts);
    let mean = v.mean().unwrap_or(0.0);
    let min = v.min().unwrap_or(0.0);
    let max = v.max().unwrap_or(0.0);
    let stddev = v.stddev().unwrap_or(0.0);
    let median = median(&v)?;

    Ok(QueryCountStats {
        dialogs: counts.len(),
        mean,
        median,
        min,
        max,
        stddev,
    })
}

/// Calculate median using aprender's DescriptiveStats quantile(0.5)
pub fn median(vector: &Vector<f32>) -> Result<f32> {
    let stats = DescriptiveStats::new(vector);
    stats
        .quantile(0.5)
        .map_err(|e| anyhow::anyhow!("Failed to compute median: {}", e))
}

/// Remove the single largest count
fn drop_largest(counts: &mut Vec<f32>) -> Result<()> {
    if counts.len() < 2 {
        anyhow::bail!(
            "Cannot trim an outlier from {} dialog(s); need at least 2",
            counts.len()
        );
    }
    let (largest, _) = counts
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .context("No largest element in a non-empty list")?;
    counts.remove(largest);
    Ok(())
}
