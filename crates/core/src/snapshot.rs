// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Immutable record snapshot and its load state.
//!
//! A report starts in [`ReportState::Init`]. Loading records moves it to
//! [`ReportState::Loaded`] with a [`Snapshot`]; loading again replaces the
//! snapshot as a whole. Snapshots are never modified after creation, so
//! clones are cheap and views computed from one snapshot stay consistent.

use crate::error::{Error, Result};
use crate::languages;
use crate::ranking::Ranker;
use crate::record::Record;
use crate::series::{self, SizeAveragePoint};
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only collection of records.
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Arc<[Record]>,
}

impl Snapshot {
    /// Freeze a record collection.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records ordered by `ranker`.
    pub fn rank(&self, ranker: &Ranker) -> Vec<&Record> {
        ranker.rank(&self.records)
    }

    /// Number of distinct languages in the snapshot.
    pub fn distinct_language_count(&self) -> usize {
        languages::distinct_language_count(&self.records)
    }

    /// Size series of `target` against every record in the snapshot.
    pub fn size_series(&self, target: &Record, min_board_width: u32) -> Vec<SizeAveragePoint> {
        series::size_series(&self.records, target, min_board_width)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Snapshot {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<Record>> for Snapshot {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Load state of a report.
#[derive(Debug, Clone, Default)]
pub enum ReportState {
    /// No data yet.
    #[default]
    Init,
    /// Data available.
    Loaded(Snapshot),
}

impl ReportState {
    /// Install a new snapshot, replacing any previous one.
    ///
    /// Returns the installed snapshot.
    pub fn load(&mut self, records: Vec<Record>) -> Snapshot {
        let snapshot = Snapshot::new(records);
        let replaced = self.is_loaded();
        info!(records = snapshot.len(), replaced, "Report data loaded");
        *self = ReportState::Loaded(snapshot.clone());
        snapshot
    }

    /// Whether a snapshot is installed.
    pub fn is_loaded(&self) -> bool {
        matches!(self, ReportState::Loaded(_))
    }

    /// The installed snapshot.
    ///
    /// Returns [`Error::NotLoaded`] while still in `Init`.
    pub fn snapshot(&self) -> Result<&Snapshot> {
        match self {
            ReportState::Loaded(snapshot) => Ok(snapshot),
            ReportState::Init => Err(Error::NotLoaded),
        }
    }
}
