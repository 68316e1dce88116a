// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranking of records for the report table.
//!
//! A [`Ranker`] is an ordered list of `(SortKey, Direction)` pairs. Keys are
//! evaluated in order and the first non-equal comparison decides; records
//! that compare equal on every key keep their original relative order
//! because [`Ranker::rank`] uses a stable sort.
//!
//! The default ranker puts the largest board first and, within one board
//! width, the fastest average first:
//!
//! ```
//! use queens_report_core::ranking::{Direction, Ranker, SortKey};
//!
//! let ranker = Ranker::new()
//!     .then(SortKey::BoardWidth, Direction::Descending)
//!     .then(SortKey::AverageDuration, Direction::Ascending);
//! assert_eq!(ranker, Ranker::default());
//! ```

use crate::record::Record;
use crate::stats;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Sort direction for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// A value extracted from a record for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The chessboard width.
    BoardWidth,
    /// Mean of the record's durations.
    ///
    /// Records without durations have a NaN average and always sort after
    /// records with one, whatever the direction.
    AverageDuration,
    /// Number of duration samples.
    SampleCount,
    /// Language name, compared as text.
    Language,
}

impl SortKey {
    /// Compare two records on this key in the given direction.
    pub fn compare(self, a: &Record, b: &Record, direction: Direction) -> Ordering {
        match self {
            SortKey::BoardWidth => direction.apply(a.board_width.cmp(&b.board_width)),
            SortKey::SampleCount => direction.apply(
                stats::count(&a.durations).cmp(&stats::count(&b.durations)),
            ),
            SortKey::Language => direction.apply(a.language.cmp(&b.language)),
            SortKey::AverageDuration => compare_nan_last(
                stats::average(&a.durations),
                stats::average(&b.durations),
                direction,
            ),
        }
    }
}

fn compare_nan_last(a: f64, b: f64, direction: Direction) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
    }
}

/// Composite comparator over an ordered list of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    keys: Vec<(SortKey, Direction)>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
            .then(SortKey::BoardWidth, Direction::Descending)
            .then(SortKey::AverageDuration, Direction::Ascending)
    }
}

impl Ranker {
    /// A ranker without keys; every pair compares equal.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append a key evaluated after the existing ones.
    pub fn then(mut self, key: SortKey, direction: Direction) -> Self {
        self.keys.push((key, direction));
        self
    }

    /// Three-way comparison of two records.
    ///
    /// `Ordering::Less` means `a` ranks before `b`.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.keys
            .iter()
            .map(|(key, direction)| key.compare(a, b, *direction))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// References to `records` in ranked order. The input is untouched.
    pub fn rank<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let mut ranked: Vec<&Record> = records.iter().collect();
        ranked.sort_by(|a, b| self.compare(a, b));
        for record in unmeasured(&ranked) {
            warn!(
                record = %record.identity(),
                board_width = record.board_width,
                "Ranked record has no durations"
            );
        }
        debug!(records = ranked.len(), keys = self.keys.len(), "Ranked records");
        ranked
    }
}

fn unmeasured<'a>(ranked: &[&'a Record]) -> Vec<&'a Record> {
    ranked
        .iter()
        .copied()
        .filter(|r| stats::average(&r.durations).is_nan())
        .collect()
}

/// Compare two records with the default ranking.
pub fn compare(a: &Record, b: &Record) -> Ordering {
    Ranker::default().compare(a, b)
}
