//! Command implementations.
//!
//! Each command renders into a writer so it can be exercised without a
//! terminal.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use queens_report_core::ranking::{Direction, Ranker, SortKey};
use queens_report_core::series::{self, DurationSample, SizeAveragePoint};
use queens_report_core::stats::DurationStats;
use queens_report_core::{languages as language_stats, ReportState, ReportSummary, Snapshot};
use queens_report_results::ingest::{self, AnalyseOptions, AnalyseReport};
use queens_report_results::{markdown, source, FileSource};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::settings::ReportSettings;

/// Output format of report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown document.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Final ranking key applied after board width and average duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// More duration samples first.
    Samples,
    /// Language name, alphabetical.
    Language,
}

impl TieBreak {
    fn key(self) -> (SortKey, Direction) {
        match self {
            TieBreak::Samples => (SortKey::SampleCount, Direction::Descending),
            TieBreak::Language => (SortKey::Language, Direction::Ascending),
        }
    }
}

/// Ranker for the summary table.
pub fn ranker(tie_break: Option<TieBreak>) -> Ranker {
    match tie_break.map(TieBreak::key) {
        Some((key, direction)) => Ranker::default().then(key, direction),
        None => Ranker::default(),
    }
}

/// Load the results file into `state`.
///
/// On failure `state` keeps what it held before.
pub async fn load_results(state: &mut ReportState, path: &Path) -> Result<()> {
    source::load(state, &FileSource::new(path))
        .await
        .with_context(|| format!("failed to load results from {}", path.display()))?;
    Ok(())
}

/// Write the ranked summary table.
pub fn summary(
    snapshot: &Snapshot,
    ranker: &Ranker,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let summary = ReportSummary::build(snapshot, ranker);
    match format {
        OutputFormat::Markdown => writeln!(out, "{}", markdown::generate_summary(&summary))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
    }
    Ok(())
}

/// Selects one record by identity tuple and board width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesQuery {
    /// Language name.
    pub language: String,
    /// Version string.
    pub version: String,
    /// Source name.
    pub source: String,
    /// Board width.
    pub width: u32,
}

#[derive(Debug, Serialize)]
struct SeriesView<'a> {
    language: &'a str,
    version: &'a str,
    source: &'a str,
    board_width: u32,
    stats: DurationStats,
    time_series: Vec<DurationSample>,
    size_series: Vec<SizeAveragePoint>,
}

/// Write the time and size series of the record matching `query`.
pub fn series(
    snapshot: &Snapshot,
    query: &SeriesQuery,
    min_board_width: u32,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let target = snapshot
        .iter()
        .find(|r| {
            r.board_width == query.width
                && r.language == query.language
                && r.version == query.version
                && r.source == query.source
        })
        .ok_or_else(|| {
            anyhow!(
                "no record for {} / {} / {} at board width {}",
                query.language,
                query.version,
                query.source,
                query.width
            )
        })?;

    match format {
        OutputFormat::Markdown => writeln!(
            out,
            "{}",
            markdown::generate_series(snapshot, target, min_board_width)
        )?,
        OutputFormat::Json => {
            let view = SeriesView {
                language: &target.language,
                version: &target.version,
                source: &target.source,
                board_width: target.board_width,
                stats: DurationStats::from_durations(&target.durations),
                time_series: series::time_series(target),
                size_series: snapshot.size_series(target, min_board_width),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        }
    }
    Ok(())
}

/// Write the number of distinct languages and their names.
pub fn languages(snapshot: &Snapshot, out: &mut impl Write) -> Result<()> {
    let names = language_stats::distinct_languages(snapshot);
    writeln!(out, "{} languages", names.len())?;
    for name in names {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

/// Merge runner logs into the results file.
pub fn analyse(settings: &ReportSettings) -> Result<AnalyseReport> {
    let options = AnalyseOptions::read(&settings.analyse_file).with_context(|| {
        format!(
            "failed to read analyser options from {}",
            settings.analyse_file.display()
        )
    })?;
    let report = ingest::analyse(&settings.results_dir, &options, &settings.results_file)
        .context("failed to analyse runner logs")?;
    info!(
        logs = report.logs,
        skipped = report.skipped,
        records = report.records,
        "Analysis complete"
    );
    Ok(report)
}
