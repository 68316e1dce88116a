// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Serializable report summary.
//!
//! The summary is the table a presentation layer shows: every record in
//! ranked order with its sample count and average, plus the number of
//! distinct languages.

use crate::languages;
use crate::ranking::Ranker;
use crate::record::Record;
use crate::stats::DurationStats;
use serde::Serialize;

/// One row of the ranked report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Position in the ranking, starting at 1.
    pub rank: usize,
    /// Implementation language.
    pub language: String,
    /// Runtime or compiler version.
    pub version: String,
    /// Implementation source.
    pub source: String,
    /// Board width.
    pub board_width: u32,
    /// Number of samples.
    pub count: usize,
    /// Average duration; `None` when the record has no samples.
    pub average: Option<f64>,
}

impl SummaryRow {
    fn from_record(rank: usize, record: &Record) -> Self {
        let stats = DurationStats::from_durations(&record.durations);
        Self {
            rank,
            language: record.language.clone(),
            version: record.version.clone(),
            source: record.source.clone(),
            board_width: record.board_width,
            count: stats.count,
            average: (!stats.is_empty()).then_some(stats.average),
        }
    }
}

/// Ranked table plus collection-wide figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of distinct languages.
    pub languages: usize,
    /// Ranked rows.
    pub rows: Vec<SummaryRow>,
}

impl ReportSummary {
    /// Build the summary of `records` ordered by `ranker`.
    pub fn build(records: &[Record], ranker: &Ranker) -> Self {
        let rows = ranker
            .rank(records)
            .into_iter()
            .enumerate()
            .map(|(ix, record)| SummaryRow::from_record(ix + 1, record))
            .collect();
        Self {
            languages: languages::distinct_language_count(records),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows_follow_ranking() {
        let records = vec![
            Record::builder()
                .language("python")
                .version("3.10")
                .source("Queen.py")
                .board_width(12)
                .duration("1", 4.0)
                .duration("2", 6.0)
                .build()
                .unwrap(),
            Record::builder()
                .language("java")
                .version("16")
                .source("Queen.java")
                .board_width(12)
                .duration("1", 1.0)
                .build()
                .unwrap(),
            Record::builder()
                .language("java")
                .version("16")
                .source("Queen.java")
                .board_width(13)
                .build()
                .unwrap(),
        ];
        let summary = ReportSummary::build(&records, &Ranker::default());

        assert_eq!(summary.languages, 2);
        assert_eq!(summary.rows.len(), 3);
        assert_eq!(summary.rows[0].board_width, 13);
        assert_eq!(summary.rows[0].average, None);
        assert_eq!(summary.rows[1].language, "java");
        assert_eq!(summary.rows[2].count, 2);
        assert_eq!(summary.rows[2].average, Some(5.0));
        assert_eq!(summary.rows[2].rank, 3);
    }

    #[test]
    fn test_summary_serializes_missing_average_as_null() {
        let records = vec![Record::builder()
            .language("go")
            .version("1.17")
            .source("queen.go")
            .board_width(8)
            .build()
            .unwrap()];
        let summary = ReportSummary::build(&records, &Ranker::default());
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["rows"][0]["average"].is_null());
        assert_eq!(value["languages"], 1);
    }
}
