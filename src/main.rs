use anyhow::{Context, Result};
use charla::cli::{Cli, OutputFormat, SourceEncoding};
use charla::csv_output::{CsvDialogRow, CsvOutput};
use charla::dialog::Dialog;
use charla::lexicon::ModifierLexicon;
use charla::report::{CorpusReport, Report};
use charla::timeline::Timeline;
use charla::{chart, corpus, dialog, json_output, scan, stats};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Analyze one corpus file: parse, compute query-count statistics, scan for
/// modifiers, and render the timeline chart unless disabled.
fn analyze_corpus(
    path: &Path,
    ordinal: usize,
    lexicon: &mut ModifierLexicon,
    args: &Cli,
) -> Result<(CorpusReport, Vec<Dialog>)> {
    let text = corpus::read_to_string(path, SourceEncoding::Utf8)?;
    let mut dialogs = dialog::parse_corpus(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(corpus = %path.display(), dialogs = dialogs.len(), "corpus parsed");

    let counts = stats::query_counts(&dialogs);
    let stats = stats::compute(&counts, args.trim_outlier)
        .with_context(|| format!("Failed to compute statistics for {}", path.display()))?;

    let mut timeline = Timeline::new();
    scan::scan_corpus(&mut dialogs, lexicon, &mut timeline);

    let chart_path = if args.no_chart {
        None
    } else {
        let file = format!("{}{}.png", args.chart_prefix, ordinal);
        let title = format!("Modifier occurrences per minute: {}", path.display());
        chart::render_timeline(&timeline, &title, Path::new(&file))?;
        Some(file)
    };

    let corpus_report = CorpusReport {
        corpus: path.display().to_string(),
        dialogs: dialogs.len(),
        stats,
        at_least_one: scan::dialogs_at_or_over(&dialogs, 1),
        at_limit: scan::dialogs_at_or_over(&dialogs, args.limit),
        occurrences: timeline.total(),
        chart: chart_path,
    };
    Ok((corpus_report, dialogs))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate limit range (threshold of 0 matches every dialog)
    if args.limit < 1 {
        anyhow::bail!("Invalid value for --limit: {} (must be >= 1)", args.limit);
    }

    init_tracing(args.debug);

    let lexicon_text = corpus::read_to_string(&args.modifiers, args.modifiers_encoding)?;
    let mut lexicon = ModifierLexicon::from_text(&lexicon_text);
    tracing::info!(keywords = lexicon.len(), "lexicon loaded");

    let mut report = Report {
        limit: args.limit,
        keywords: lexicon.len(),
        corpora: Vec::new(),
    };
    let mut csv = CsvOutput::new();

    for (index, path) in args.corpora.iter().enumerate() {
        let (corpus_report, dialogs) = analyze_corpus(path, index + 1, &mut lexicon, &args)?;
        if matches!(args.format, OutputFormat::Csv) {
            for d in &dialogs {
                csv.add_row(CsvDialogRow {
                    corpus: corpus_report.corpus.clone(),
                    dialog: d.id.clone(),
                    queries: d.query_count(),
                    unique_modifiers: d.unique_modifiers,
                });
            }
        }
        report.corpora.push(corpus_report);
    }

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", json_output::render(&report)?),
        OutputFormat::Csv => print!("{}", csv.to_csv()),
    }

    Ok(())
}
