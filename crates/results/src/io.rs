//! I/O operations for the results document.
//!
//! The results document is a JSON array of records. Shape and invariants are
//! checked here, once, so the aggregation engine can assume well-formed
//! records.

use crate::error::{Result, SourceError};
use queens_report_core::Record;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Default results file path.
pub const RESULTS_FILE: &str = "results/results.json";

/// Default directory holding runner logs.
pub const RESULTS_DIR: &str = "results";

/// Decode and validate a results document.
///
/// `origin` names the document in error messages. The first malformed or
/// invalid record fails the whole document.
pub fn parse_results(json: &str, origin: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_str(json).map_err(|source| SourceError::Malformed {
            origin: origin.to_string(),
            source,
        })?;

    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|source| SourceError::InvalidRecord {
                origin: origin.to_string(),
                index,
                source,
            })?;
    }

    debug!(origin, records = records.len(), "Parsed results document");
    Ok(records)
}

/// Read results from a JSON file.
pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    parse_results(&content, &path.display().to_string())
}

/// Read results from a JSON file without blocking the runtime.
pub async fn read_results_async(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::io(path, e))?;
    parse_results(&content, &path.display().to_string())
}

/// Write results to a JSON file, creating parent directories as needed.
pub fn write_results(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SourceError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|e| SourceError::io(path, e))?;
    info!(path = %path.display(), records = records.len(), "Results written");
    Ok(())
}
