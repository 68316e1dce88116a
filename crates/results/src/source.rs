//! Record sources.
//!
//! A [`RecordSource`] delivers the full record collection in one
//! asynchronous fetch. That fetch is the only suspension point of a report;
//! everything computed afterwards runs synchronously on the snapshot.

use crate::error::Result;
use crate::io;
use async_trait::async_trait;
use queens_report_core::{Record, ReportState, Snapshot};
use std::path::PathBuf;
use tracing::info;

/// Supplier of benchmark records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable description used in logs.
    fn describe(&self) -> String;

    /// Fetch and validate every record.
    async fn fetch(&self) -> Result<Vec<Record>>;
}

/// Records read from a results JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        io::read_results_async(&self.path).await
    }
}

/// Records decoded from an in-memory JSON document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    /// Source decoding `document`.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    fn describe(&self) -> String {
        "in-memory document".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        io::parse_results(&self.document, "in-memory document")
    }
}

/// Fetch from `source` and install the records in `state`.
///
/// On failure `state` is left as it was.
pub async fn load(state: &mut ReportState, source: &dyn RecordSource) -> Result<Snapshot> {
    info!(source = %source.describe(), "Fetching records");
    let records = source.fetch().await?;
    Ok(state.load(records))
}
