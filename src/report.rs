//! Summary report assembly and text rendering

use crate::stats::QueryCountStats;

/// Analysis results for one corpus file
#[derive(Debug, Clone)]
pub struct CorpusReport {
    /// Corpus file name as given on the command line
    pub corpus: String,
    /// Dialogs parsed from the file
    pub dialogs: usize,
    /// Query-count statistics (after any outlier trimming)
    pub stats: QueryCountStats,
    /// Dialogs that hit at least one unique modifier
    pub at_least_one: usize,
    /// Dialogs that hit at least `Report::limit` unique modifiers
    pub at_limit: usize,
    /// Total modifier occurrences accumulated into the timeline
    pub occurrences: u64,
    /// Chart file path, if one was rendered
    pub chart: Option<String>,
}

/// Full analysis report over all corpora
#[derive(Debug, Clone)]
pub struct Report {
    /// Unique-modifier threshold used for `at_limit`
    pub limit: usize,
    /// Keywords in the lexicon
    pub keywords: usize,
    pub corpora: Vec<CorpusReport>,
}

impl Report {
    /// Render the human-readable summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for corpus in &self.corpora {
            out.push_str(&format!("=== {} ===\n", corpus.corpus));
            out.push_str(&format!("{:<34} {}\n", "Dialogs:", corpus.dialogs));
            if corpus.stats.dialogs != corpus.dialogs {
                out.push_str(&format!(
                    "{:<34} {} (outlier trimmed)\n",
                    "Dialogs in statistics:", corpus.stats.dialogs
                ));
            }
            out.push_str(&format!(
                "{:<34} {:.2}\n",
                "Queries per dialog (mean):", corpus.stats.mean
            ));
            out.push_str(&format!(
                "{:<34} {:.2}\n",
                "Queries per dialog (median):", corpus.stats.median
            ));
            out.push_str(&format!(
                "{:<34} {:.0} / {:.0}\n",
                "Queries per dialog (min/max):", corpus.stats.min, corpus.stats.max
            ));
            out.push_str(&format!(
                "{:<34} {:.2}\n",
                "Queries per dialog (stddev):", corpus.stats.stddev
            ));
            out.push_str(&format!(
                "{:<34} {}\n",
                "Dialogs with >= 1 unique modifier:", corpus.at_least_one
            ));
            out.push_str(&format!(
                "{:<34} {}\n",
                format!("Dialogs with >= {} unique modifiers:", self.limit),
                corpus.at_limit
            ));
            out.push_str(&format!(
                "{:<34} {}\n",
                "Modifier occurrences:", corpus.occurrences
            ));
            if let Some(chart) = &corpus.chart {
                out.push_str(&format!("{:<34} {}\n", "Chart:", chart));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "{} corpora analyzed against {} keywords\n",
            self.corpora.len(),
            self.keywords
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            limit: 2,
            keywords: 40,
            corpora: vec![CorpusReport {
                corpus: "dialogy1.txt".to_string(),
                dialogs: 10,
                stats: QueryCountStats {
                    dialogs: 9,
                    mean: 11.5,
                    median: 10.0,
                    min: 2.0,
                    max: 41.0,
                    stddev: 4.87,
                },
                at_least_one: 6,
                at_limit: 3,
                occurrences: 42,
                chart: Some("output1.png".to_string()),
            }],
        }
    }

    #[test]
    fn test_render_text_contains_stats() {
        let text = sample().render_text();
        assert!(text.contains("=== dialogy1.txt ==="));
        assert!(text.contains("mean"));
        assert!(text.contains("11.50"));
        assert!(text.contains("median"));
        assert!(text.contains("10.00"));
    }

    #[test]
    fn test_render_text_flags_trimmed_corpus() {
        let text = sample().render_text();
        assert!(text.contains("outlier trimmed"));
    }

    #[test]
    fn test_render_text_threshold_lines() {
        let text = sample().render_text();
        assert!(text.contains(">= 1 unique modifier"));
        assert!(text.contains(">= 2 unique modifiers: 3"));
    }

    #[test]
    fn test_render_text_without_chart() {
        let mut report = sample();
        report.corpora[0].chart = None;
        assert!(!report.render_text().contains("Chart:"));
    }
}
