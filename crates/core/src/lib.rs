// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Aggregation engine for N-queens benchmark records.
//!
//! This crate turns a read-only collection of [`Record`]s into the derived
//! views a report needs: per-record statistics, a ranking, the number of
//! distinct languages, and duration series suitable for charting.
//!
//! Every function here is a pure function of its inputs. The record
//! collection is held as an immutable [`Snapshot`] inside a [`ReportState`]
//! that moves from `Init` to `Loaded` exactly once per load.
//!
//! # Quick Start
//!
//! ```
//! use queens_report_core::{ranking::Ranker, series, stats, Record};
//!
//! let records = vec![
//!     Record::builder()
//!         .language("Rust")
//!         .version("1.75")
//!         .source("queen.rs")
//!         .board_width(12)
//!         .duration("1000", 0.5)
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let ranked = Ranker::default().rank(&records);
//! assert_eq!(stats::average(&ranked[0].durations), 0.5);
//! assert_eq!(series::time_series(ranked[0]).len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`record`] - The typed `Record` and its identity tuple
//! - [`stats`] - Count/average reduction over durations
//! - [`ranking`] - Composable multi-key ordering
//! - [`languages`] - Distinct language counting
//! - [`series`] - Time and size series, column joining
//! - [`snapshot`] - Immutable record snapshot and load state
//! - [`summary`] - Serializable report summary

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod languages;
pub mod ranking;
pub mod record;
pub mod series;
pub mod snapshot;
pub mod stats;
pub mod summary;

pub use error::{Error, Result};
pub use record::{Durations, Identity, Record, RecordBuilder, TimestampKey};
pub use snapshot::{ReportState, Snapshot};
pub use summary::{ReportSummary, SummaryRow};
