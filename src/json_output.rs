//! JSON output format for analysis reports

use crate::report::{CorpusReport, Report};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Query-count statistics for one corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStats {
    pub dialogs: usize,
    pub mean: f32,
    pub median: f32,
    pub min: f32,
    pub max: f32,
    pub stddev: f32,
}

/// Per-corpus analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCorpusReport {
    /// Corpus file name
    pub corpus: String,
    /// Dialogs parsed from the file
    pub dialogs: usize,
    pub stats: JsonStats,
    /// Dialogs that hit at least one unique modifier
    pub at_least_one: usize,
    /// Dialogs that hit at least `limit` unique modifiers
    pub at_limit: usize,
    /// Total modifier occurrences in the timeline
    pub occurrences: u64,
    /// Chart path (absent when chart rendering is disabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
}

/// Top-level JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub limit: usize,
    pub keywords: usize,
    pub corpora: Vec<JsonCorpusReport>,
}

impl JsonReport {
    fn from_report(report: &Report) -> Self {
        Self {
            limit: report.limit,
            keywords: report.keywords,
            corpora: report.corpora.iter().map(JsonCorpusReport::from).collect(),
        }
    }
}

impl From<&CorpusReport> for JsonCorpusReport {
    fn from(corpus: &CorpusReport) -> Self {
        Self {
            corpus: corpus.corpus.clone(),
            dialogs: corpus.dialogs,
            stats: JsonStats {
                dialogs: corpus.stats.dialogs,
                mean: corpus.stats.mean,
                median: corpus.stats.median,
                min: corpus.stats.min,
                max: corpus.stats.max,
                stddev: corpus.stats.stddev,
            },
            at_least_one: corpus.at_least_one,
            at_limit: corpus.at_limit,
            occurrences: corpus.occurrences,
            chart: corpus.chart.clone(),
        }
    }
}

/// Serialize a report as pretty-printed JSON.
pub fn render(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_report(report))
        .context("Failed to serialize report as JSON")
}
