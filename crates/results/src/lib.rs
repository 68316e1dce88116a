//! Data-source boundary for N-queens benchmark reports.
//!
//! This crate obtains records for the aggregation engine in
//! [`queens_report_core`] and renders what the engine computes.
//!
//! # Quick Start
//!
//! ```no_run
//! use queens_report_core::{ranking::Ranker, ReportState, ReportSummary};
//! use queens_report_results::{markdown, source::{self, FileSource}};
//!
//! # async fn run() -> queens_report_results::Result<()> {
//! let mut state = ReportState::default();
//! let snapshot = source::load(&mut state, &FileSource::new("results/results.json")).await?;
//!
//! let summary = ReportSummary::build(&snapshot, &Ranker::default());
//! println!("{}", markdown::generate_summary(&summary));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`io`] - Reading and writing the results document
//! - [`source`] - Asynchronous record sources
//! - [`ingest`] - Runner log parsing and merging
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod ingest;
pub mod io;
pub mod markdown;
pub mod source;

pub use error::{Result, SourceError};
pub use source::{FileSource, JsonSource, RecordSource};
