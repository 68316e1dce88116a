// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-record duration statistics.
//!
//! # Empty durations
//!
//! The average of an empty duration map is undefined. [`average`] returns
//! `f64::NAN` for that case; the ranking places NaN averages after every
//! real average and formatters print it as `NaN`. Callers that would rather
//! fail use [`try_average`], which returns [`Error::EmptyDurations`].

use crate::error::{Error, Result};
use crate::record::Durations;
use serde::Serialize;

/// Number of measurements in a duration map.
pub fn count(durations: &Durations) -> usize {
    durations.len()
}

/// Arithmetic mean of all durations, or `NaN` when there are none.
pub fn average(durations: &Durations) -> f64 {
    try_average(durations).unwrap_or(f64::NAN)
}

/// Arithmetic mean of all durations.
///
/// Returns [`Error::EmptyDurations`] when the map is empty.
pub fn try_average(durations: &Durations) -> Result<f64> {
    if durations.is_empty() {
        return Err(Error::EmptyDurations);
    }
    let total: f64 = durations.values().sum();
    Ok(total / durations.len() as f64)
}

/// Summary statistics for one record's durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    /// Number of samples.
    pub count: usize,
    /// Mean duration, `NaN` without samples.
    pub average: f64,
    /// Shortest duration.
    pub min: Option<f64>,
    /// Longest duration.
    pub max: Option<f64>,
}

impl DurationStats {
    /// Compute statistics from a duration map.
    pub fn from_durations(durations: &Durations) -> Self {
        let min = durations.values().copied().reduce(f64::min);
        let max = durations.values().copied().reduce(f64::max);
        Self {
            count: count(durations),
            average: average(durations),
            min,
            max,
        }
    }

    /// Whether there were no samples to summarize.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
