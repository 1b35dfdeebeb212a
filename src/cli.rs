//! CLI argument parsing for Charla

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Character set of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceEncoding {
    /// UTF-8 (dialog corpora)
    Utf8,
    /// Windows-1250, the code page of the Central European lexicon files
    Windows1250,
}

#[derive(Parser, Debug)]
#[command(name = "charla")]
#[command(version)]
#[command(about = "Dialog transcript analyzer with modifier-lexicon correlation", long_about = None)]
pub struct Cli {
    /// Dialog corpus files to analyze, in order
    #[arg(
        value_name = "CORPUS",
        default_values_os_t = vec![PathBuf::from("dialogy1.txt"), PathBuf::from("dialogy2.txt")]
    )]
    pub corpora: Vec<PathBuf>,

    /// Modifier lexicon file (one keyword per line)
    #[arg(
        short = 'm',
        long = "modifiers",
        value_name = "PATH",
        default_value = "modifikatory.txt"
    )]
    pub modifiers: PathBuf,

    /// Character set of the lexicon file
    #[arg(long = "modifiers-encoding", value_enum, default_value = "windows1250")]
    pub modifiers_encoding: SourceEncoding,

    /// Unique-modifier threshold reported per corpus
    #[arg(short = 'l', long = "limit", value_name = "N", default_value = "2")]
    pub limit: usize,

    /// Drop the single largest query count per corpus before computing statistics
    #[arg(long = "trim-outlier")]
    pub trim_outlier: bool,

    /// Skip rendering timeline charts
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Prefix for chart output files (output1.png, output2.png, ...)
    #[arg(long = "chart-prefix", value_name = "PREFIX", default_value = "output")]
    pub chart_prefix: String,

    /// Output format for the summary report
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
