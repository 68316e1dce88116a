// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the aggregation engine.

use thiserror::Error;

/// Errors raised by the aggregation engine.
///
/// The engine is pure and performs no I/O, so the taxonomy is narrow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An average was requested for a record without duration samples.
    #[error("no duration samples to average")]
    EmptyDurations,

    /// A column index other than 0 or 1 was passed to a pair formatter.
    #[error("invalid column index {0}: expected 0 or 1")]
    InvalidColumn(usize),

    /// A view was requested before any records were loaded.
    #[error("report data has not been loaded")]
    NotLoaded,

    /// A record could not be constructed from the supplied parts.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
