// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record types.
//!
//! A [`Record`] is one benchmark observation unit: an implementation variant
//! (language, version, source file) run at one board width, together with
//! every duration measured for it, keyed by the timestamp of the run.
//!
//! The JSON shape mirrors the results file written by the log analyser:
//!
//! ```text
//! {
//!   "language": "Python",
//!   "version": "Python 3.10",
//!   "source": "Queen.py",
//!   "chessboard-width": 12,
//!   "durations": { "1637080462000": 4.71 }
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Timestamp under which a duration was recorded.
///
/// Keys are strings in JSON. Two keys that both parse as finite numbers are
/// ordered numerically, so `"900"` sorts before `"1000"`. Numeric keys sort
/// before non-numeric ones, and non-numeric keys sort lexicographically.
/// Numerically equal keys with different spellings fall back to the string
/// order, which keeps `Ord` consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampKey(String);

impl TimestampKey {
    /// Create a key from its textual form.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as written in the source data.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Ord for TimestampKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TimestampKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimestampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimestampKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TimestampKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<u64> for TimestampKey {
    fn from(key: u64) -> Self {
        Self(key.to_string())
    }
}

/// Durations of one record, keyed by timestamp.
///
/// Iteration order is ascending [`TimestampKey`] order.
pub type Durations = BTreeMap<TimestampKey, f64>;

/// The `(language, version, source)` tuple that groups records belonging to
/// the same implementation variant across board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity<'a> {
    /// Implementation language.
    pub language: &'a str,
    /// Runtime or compiler version.
    pub version: &'a str,
    /// Implementation source file.
    pub source: &'a str,
}

impl<'a> Identity<'a> {
    /// Build an identity from its three parts.
    pub fn new(language: &'a str, version: &'a str, source: &'a str) -> Self {
        Self {
            language,
            version,
            source,
        }
    }
}

impl fmt::Display for Identity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.language, self.version, self.source)
    }
}

/// One benchmark observation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Implementation language name.
    pub language: String,
    /// Runtime or compiler version.
    pub version: String,
    /// Implementation variant (source file).
    pub source: String,
    /// Chessboard dimension the run solved.
    #[serde(rename = "chessboard-width")]
    pub board_width: u32,
    /// Measured durations keyed by run timestamp.
    pub durations: Durations,
    /// Where the implementation or runtime comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Distribution the runtime was taken from (e.g. a docker image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    /// Number of solutions the run reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<u64>,
}

impl Record {
    /// Create a new builder.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// The identity tuple used for grouping.
    pub fn identity(&self) -> Identity<'_> {
        Identity::new(&self.language, &self.version, &self.source)
    }

    /// Check the shape guarantees the engine relies on.
    ///
    /// Every duration must be a finite, non-negative number. Identity
    /// fields may be any string, including an empty one. The engine itself
    /// never calls this; data sources call it once at the boundary.
    pub fn validate(&self) -> Result<()> {
        for (key, duration) in &self.durations {
            if !duration.is_finite() || *duration < 0.0 {
                return Err(Error::invalid_input(format!(
                    "duration for timestamp '{key}' must be a finite non-negative number, got {duration}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`Record`] instances.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    language: Option<String>,
    version: Option<String>,
    source: Option<String>,
    board_width: Option<u32>,
    durations: Durations,
    url: Option<String>,
    distribution: Option<String>,
    solutions: Option<u64>,
}

impl RecordBuilder {
    /// Set the language (required).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the version (required).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the source (required).
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the board width (required).
    pub fn board_width(mut self, width: u32) -> Self {
        self.board_width = Some(width);
        self
    }

    /// Add one duration sample. A repeated timestamp replaces the earlier value.
    pub fn duration(mut self, timestamp: impl Into<TimestampKey>, duration: f64) -> Self {
        self.durations.insert(timestamp.into(), duration);
        self
    }

    /// Replace all duration samples.
    pub fn durations(mut self, durations: Durations) -> Self {
        self.durations = durations;
        self
    }

    /// Set the url.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the distribution.
    pub fn distribution(mut self, distribution: impl Into<String>) -> Self {
        self.distribution = Some(distribution.into());
        self
    }

    /// Set the number of solutions found.
    pub fn solutions(mut self, solutions: u64) -> Self {
        self.solutions = Some(solutions);
        self
    }

    /// Build the record.
    ///
    /// Returns `Err` if a required field is missing or the record does not
    /// pass [`Record::validate`].
    pub fn build(self) -> Result<Record> {
        let record = Record {
            language: self
                .language
                .ok_or_else(|| Error::invalid_input("language is required"))?,
            version: self
                .version
                .ok_or_else(|| Error::invalid_input("version is required"))?,
            source: self
                .source
                .ok_or_else(|| Error::invalid_input("source is required"))?,
            board_width: self
                .board_width
                .ok_or_else(|| Error::invalid_input("board_width is required"))?,
            durations: self.durations,
            url: self.url,
            distribution: self.distribution,
            solutions: self.solutions,
        };
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_keys_order_numerically() {
        let mut keys = vec![
            TimestampKey::from("1000"),
            TimestampKey::from("900"),
            TimestampKey::from("95"),
        ];
        keys.sort();
        let ordered: Vec<&str> = keys.iter().map(TimestampKey::as_str).collect();
        assert_eq!(ordered, vec!["95", "900", "1000"]);
    }

    #[test]
    fn test_non_numeric_keys_sort_after_numeric() {
        let mut keys = vec![
            TimestampKey::from("b"),
            TimestampKey::from("10"),
            TimestampKey::from("a"),
        ];
        keys.sort();
        let ordered: Vec<&str> = keys.iter().map(TimestampKey::as_str).collect();
        assert_eq!(ordered, vec!["10", "a", "b"]);
    }

    #[test]
    fn test_equal_numeric_value_keeps_distinct_keys() {
        let a = TimestampKey::from("1");
        let b = TimestampKey::from("1.0");
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserialize_results_entry() {
        let json = r#"{
            "language": "Python",
            "url": "https://www.python.org",
            "distribution": "docker.io/python",
            "chessboard-width": 12,
            "durations": {"1637080462000": 4.5, "1637080000000": 5.5},
            "solutions": 14200,
            "source": "Queen.py",
            "version": "Python 3.10"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.board_width, 12);
        assert_eq!(record.durations.len(), 2);
        assert_eq!(record.solutions, Some(14200));
        let first = record.durations.keys().next().unwrap();
        assert_eq!(first.as_str(), "1637080000000");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"language": "Go", "version": "1.17", "durations": {}}"#;
        let result: std::result::Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_chessboard_width_key() {
        let record = Record::builder()
            .language("Go")
            .version("1.17")
            .source("queen.go")
            .board_width(8)
            .build()
            .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["chessboard-width"], 8);
        assert!(value.get("url").is_none());
    }

    #[test]
    fn test_builder_requires_language() {
        let result = Record::builder()
            .version("1.0")
            .source("impl")
            .board_width(8)
            .build();
        assert!(result.unwrap_err().to_string().contains("language"));
    }

    #[test]
    fn test_builder_rejects_negative_duration() {
        let result = Record::builder()
            .language("go")
            .version("1.0")
            .source("impl")
            .board_width(8)
            .duration("1", -1.0)
            .build();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_builder_accepts_empty_identity_fields() {
        let record = Record::builder()
            .language("")
            .version("")
            .source("")
            .board_width(8)
            .duration("1", 0.5)
            .build()
            .unwrap();
        assert_eq!(record.identity().to_string(), " /  / ");
    }

    #[test]
    fn test_identity_equality_is_structural() {
        let a = Record::builder()
            .language("go")
            .version("1.0")
            .source("impl")
            .board_width(8)
            .build()
            .unwrap();
        let mut b = a.clone();
        b.board_width = 16;
        assert_eq!(a.identity(), b.identity());
        b.source = "other".to_string();
        assert_ne!(a.identity(), b.identity());
    }
}
