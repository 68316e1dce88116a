// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Duration series for charting.
//!
//! Two series exist per record:
//!
//! - the **time series**: every `(timestamp, duration)` sample of the record,
//!   ascending by timestamp;
//! - the **size series**: `(board width, average duration)` for every record
//!   sharing the record's identity tuple, ascending by board width.
//!
//! [`join_column`] flattens one column of either series into the
//! comma-separated form chart widgets and CSV exports consume.

use crate::error::Error;
use crate::record::{Record, TimestampKey};
use crate::stats;
use serde::Serialize;
use std::fmt::Display;

/// Smallest board width included in a size series by default.
///
/// Smaller boards finish too quickly for their timings to be meaningful.
pub const DEFAULT_MIN_BOARD_WIDTH: u32 = 12;

/// One measured duration of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSample {
    /// Timestamp of the run.
    pub timestamp: TimestampKey,
    /// Measured duration.
    pub duration: f64,
}

/// Average duration of an implementation at one board width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeAveragePoint {
    /// Board width.
    pub board_width: u32,
    /// Average duration at that width (`NaN` without samples).
    pub average: f64,
}

/// Which component of a pair to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// First component (index 0).
    First,
    /// Second component (index 1).
    Second,
}

impl TryFrom<usize> for Column {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Column::First),
            1 => Ok(Column::Second),
            other => Err(Error::InvalidColumn(other)),
        }
    }
}

/// A two-component series entry that can be formatted column-wise.
pub trait SeriesPoint {
    /// Text of the selected component.
    fn column(&self, column: Column) -> String;
}

impl SeriesPoint for DurationSample {
    fn column(&self, column: Column) -> String {
        match column {
            Column::First => self.timestamp.to_string(),
            Column::Second => self.duration.to_string(),
        }
    }
}

impl SeriesPoint for SizeAveragePoint {
    fn column(&self, column: Column) -> String {
        match column {
            Column::First => self.board_width.to_string(),
            Column::Second => self.average.to_string(),
        }
    }
}

impl<A: Display, B: Display> SeriesPoint for (A, B) {
    fn column(&self, column: Column) -> String {
        match column {
            Column::First => self.0.to_string(),
            Column::Second => self.1.to_string(),
        }
    }
}

/// All samples of `record`, ascending by timestamp.
pub fn time_series(record: &Record) -> Vec<DurationSample> {
    // `Durations` iterates in timestamp order already.
    record
        .durations
        .iter()
        .map(|(timestamp, duration)| DurationSample {
            timestamp: timestamp.clone(),
            duration: *duration,
        })
        .collect()
}

/// Average duration per board width for `target`'s implementation.
///
/// Selects every record in `records` with the same identity tuple as
/// `target` and a board width of at least `min_board_width`, then sorts the
/// points ascending by width. No matching record yields an empty series.
pub fn size_series(
    records: &[Record],
    target: &Record,
    min_board_width: u32,
) -> Vec<SizeAveragePoint> {
    let identity = target.identity();
    let mut points: Vec<SizeAveragePoint> = records
        .iter()
        .filter(|r| r.identity() == identity && r.board_width >= min_board_width)
        .map(|r| SizeAveragePoint {
            board_width: r.board_width,
            average: stats::average(&r.durations),
        })
        .collect();
    points.sort_by_key(|p| p.board_width);
    points
}

/// Comma-separated text of one column of `series`, in sequence order.
pub fn join_column<P: SeriesPoint>(series: &[P], column: Column) -> String {
    series
        .iter()
        .map(|point| point.column(column))
        .collect::<Vec<_>>()
        .join(",")
}
