//! Runner log ingestion.
//!
//! Benchmark runners append the output of every run to a log file:
//!
//! ```text
//! SOURCE=Queen.py
//! VERSION=Python 3.10
//! TIMESTAMP=1637080462000
//! Queen raster (12x12)
//! ...took 4.712011 seconds.
//! ...14200 solutions found.
//! ```
//!
//! [`parse_log`] turns one log into records, [`merge`] folds them into an
//! existing collection, and [`analyse`] does both for a whole results
//! directory and rewrites the results file.

use crate::error::{Result, SourceError};
use crate::io;
use once_cell::sync::Lazy;
use queens_report_core::Record;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

static RUN_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Queen raster \((?P<width>\d+)x\d+\)\r?\n\.\.\.took (?P<duration>\d*\.\d*) seconds\.\r?\n\.\.\.(?P<solutions>\d+) solutions found\.",
    )
    .expect("run block pattern is valid")
});

/// Timestamp used when a log carries no `TIMESTAMP=` line.
pub const MISSING_TIMESTAMP: &str = "0";

/// Maps log files to the language they were produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Substring of the log file name selecting this descriptor.
    pub key: String,
    /// Language recorded for matching logs.
    pub language: String,
    /// Distribution the runtime was taken from.
    pub distribution: String,
    /// Homepage of the language or runtime.
    pub url: String,
}

/// Contents of the analyser options file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyseOptions {
    /// Descriptors, tried in order.
    pub descriptors: Vec<Descriptor>,
}

impl AnalyseOptions {
    /// Read options from a JSON file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| SourceError::Malformed {
            origin: path.display().to_string(),
            source,
        })
    }

    /// First descriptor whose key occurs in `file_name`.
    pub fn find(&self, file_name: &str) -> Option<&Descriptor> {
        self.descriptors
            .iter()
            .find(|d| file_name.contains(d.key.as_str()))
    }
}

/// Value of the first `KEY=value` line in `text`.
fn header_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .map(str::trim_end)
}

/// Parse one runner log into records.
///
/// Every run block becomes one record with a single duration keyed by the
/// log's timestamp. `name` identifies the log in errors.
pub fn parse_log(text: &str, descriptor: &Descriptor, name: &str) -> Result<Vec<Record>> {
    let source = header_value(text, "SOURCE")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SourceError::invalid_log(name, "missing SOURCE"))?;
    let version = header_value(text, "VERSION")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SourceError::invalid_log(name, "missing VERSION"))?;
    let timestamp = header_value(text, "TIMESTAMP")
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_TIMESTAMP);

    let mut records = Vec::new();
    for block in RUN_BLOCK.captures_iter(text) {
        let width: u32 = block["width"]
            .parse()
            .map_err(|e| SourceError::invalid_log(name, format!("bad board width: {e}")))?;
        let duration: f64 = block["duration"]
            .parse()
            .map_err(|e| SourceError::invalid_log(name, format!("bad duration: {e}")))?;
        let solutions: u64 = block["solutions"]
            .parse()
            .map_err(|e| SourceError::invalid_log(name, format!("bad solution count: {e}")))?;

        let record = Record::builder()
            .language(descriptor.language.as_str())
            .version(version)
            .source(source)
            .board_width(width)
            .duration(timestamp, duration)
            .solutions(solutions)
            .url(descriptor.url.as_str())
            .distribution(descriptor.distribution.as_str())
            .build()
            .map_err(|e| SourceError::invalid_log(name, e.to_string()))?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(SourceError::invalid_log(name, "no benchmark runs found"));
    }
    debug!(log = name, records = records.len(), "Parsed runner log");
    Ok(records)
}

/// Outcome of a [`merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records appended as new entries.
    pub added: usize,
    /// Existing records that received additional durations.
    pub updated: usize,
}

/// Fold `incoming` records into `existing`.
///
/// An incoming record with the same board width and identity tuple as an
/// existing one contributes its durations to it (same timestamps are
/// overwritten); any other record is appended.
pub fn merge(existing: &mut Vec<Record>, incoming: Vec<Record>) -> MergeStats {
    let mut stats = MergeStats::default();
    for record in incoming {
        let found = existing.iter().position(|old| {
            old.board_width == record.board_width && old.identity() == record.identity()
        });
        match found {
            Some(ix) => {
                existing[ix].durations.extend(record.durations);
                stats.updated += 1;
            }
            None => {
                existing.push(record);
                stats.added += 1;
            }
        }
    }
    stats
}

/// Summary of an [`analyse`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyseReport {
    /// Log files that matched a descriptor and were merged.
    pub logs: usize,
    /// Log files skipped because no descriptor matched.
    pub skipped: usize,
    /// Merge totals across all logs.
    pub merged: MergeStats,
    /// Records in the rewritten results file.
    pub records: usize,
}

/// Merge every `*.log` file in `results_dir` into `results_file`.
///
/// Existing results are kept and extended; a missing results file starts an
/// empty collection. Logs are processed in file name order.
pub fn analyse(
    results_dir: impl AsRef<Path>,
    options: &AnalyseOptions,
    results_file: impl AsRef<Path>,
) -> Result<AnalyseReport> {
    let results_dir = results_dir.as_ref();
    let results_file = results_file.as_ref();

    let mut records = if results_file.is_file() {
        io::read_results(results_file)?
    } else {
        Vec::new()
    };

    let entries = fs::read_dir(results_dir).map_err(|e| SourceError::io(results_dir, e))?;
    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::io(results_dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".log") {
            logs.push((name, entry.path()));
        }
    }
    logs.sort();

    let mut report = AnalyseReport::default();
    for (name, path) in logs {
        let Some(descriptor) = options.find(&name) else {
            warn!(log = %name, "No descriptor matches log, skipping");
            report.skipped += 1;
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|e| SourceError::io(&path, e))?;
        let parsed = parse_log(&text, descriptor, &name)?;
        let stats = merge(&mut records, parsed);
        info!(
            log = %name,
            language = %descriptor.language,
            added = stats.added,
            updated = stats.updated,
            "Merged runner log"
        );
        report.logs += 1;
        report.merged.added += stats.added;
        report.merged.updated += stats.updated;
    }

    io::write_results(&records, results_file)?;
    report.records = records.len();
    Ok(report)
}
