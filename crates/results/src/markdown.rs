//! Markdown output generation for benchmark reports.
//!
//! This module renders the ranked summary table and per-record duration
//! series as markdown, the format the report is published in.

use chrono::{DateTime, Utc};
use queens_report_core::series::{self, Column, DurationSample, SizeAveragePoint};
use queens_report_core::stats::DurationStats;
use queens_report_core::{Record, ReportSummary};
use std::fmt;

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.6}"),
        None => "n/a".to_string(),
    }
}

/// Markdown rendering of a [`ReportSummary`].
#[derive(Debug, Clone)]
pub struct MarkdownSummary<'a> {
    summary: &'a ReportSummary,
    generated: DateTime<Utc>,
}

impl<'a> MarkdownSummary<'a> {
    /// Render `summary` stamped with the current time.
    pub fn new(summary: &'a ReportSummary) -> Self {
        Self::at(summary, Utc::now())
    }

    /// Render `summary` stamped with `generated`.
    pub fn at(summary: &'a ReportSummary, generated: DateTime<Utc>) -> Self {
        Self { summary, generated }
    }
}

impl fmt::Display for MarkdownSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# N-Queens Benchmark Report")?;
        writeln!(f)?;
        writeln!(f, "Generated: {}", self.generated.to_rfc3339())?;
        writeln!(f)?;
        writeln!(f, "Languages: {}", self.summary.languages)?;
        writeln!(f)?;
        writeln!(f, "## Results")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Rank | Language | Version | Source | Board | Runs | Average |"
        )?;
        writeln!(
            f,
            "|------|----------|---------|--------|-------|------|---------|"
        )?;

        for row in &self.summary.rows {
            writeln!(
                f,
                "| {} | {} | {} | {} | {}x{} | {} | {} |",
                row.rank,
                row.language,
                row.version,
                row.source,
                row.board_width,
                row.board_width,
                row.count,
                format_average(row.average)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        write!(f, "Total entries: {}", self.summary.rows.len())
    }
}

/// Markdown rendering of one record's time and size series.
#[derive(Debug, Clone)]
pub struct MarkdownSeries<'a> {
    target: &'a Record,
    min_board_width: u32,
    time: Vec<DurationSample>,
    size: Vec<SizeAveragePoint>,
}

impl<'a> MarkdownSeries<'a> {
    /// Build both series of `target` against `records`.
    pub fn new(records: &[Record], target: &'a Record, min_board_width: u32) -> Self {
        Self {
            target,
            min_board_width,
            time: series::time_series(target),
            size: series::size_series(records, target, min_board_width),
        }
    }
}

impl fmt::Display for MarkdownSeries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = DurationStats::from_durations(&self.target.durations);
        let width = self.target.board_width;

        writeln!(f, "## {} ({}x{})", self.target.identity(), width, width)?;
        writeln!(f)?;
        writeln!(
            f,
            "**Runs:** {}, **Average:** {}",
            stats.count,
            format_average((!stats.is_empty()).then_some(stats.average))
        )?;
        writeln!(f)?;
        writeln!(f, "### Duration by timestamp")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Timestamps: {}",
            series::join_column(&self.time, Column::First)
        )?;
        writeln!(
            f,
            "- Durations: {}",
            series::join_column(&self.time, Column::Second)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "### Average duration by board width (>= {})",
            self.min_board_width
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Board widths: {}",
            series::join_column(&self.size, Column::First)
        )?;
        write!(
            f,
            "- Averages: {}",
            series::join_column(&self.size, Column::Second)
        )
    }
}

/// Generate a markdown summary.
pub fn generate_summary(summary: &ReportSummary) -> String {
    MarkdownSummary::new(summary).to_string()
}

/// Generate the markdown series section for `target`.
pub fn generate_series(records: &[Record], target: &Record, min_board_width: u32) -> String {
    MarkdownSeries::new(records, target, min_board_width).to_string()
}
