//! List and upload types.

use super::ResourceRecord;

/// One page of records from a list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// The records in this page.
    pub records: Vec<ResourceRecord>,

    /// The server-reported collection size, independent of the slice
    /// in `records`.
    pub total: u64,
}

impl ListPage {
    /// The empty page returned when a list-style read degrades on failure.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single file to ingest.
///
/// Uploads are per-file: one job per file, outcomes reported
/// individually, never atomically across a batch.
#[derive(Debug, Clone)]
pub struct UploadJob {
    /// File name sent with the multipart part.
    pub file_name: String,

    /// File contents.
    pub bytes: Vec<u8>,

    /// Target department for the ingested document.
    pub department: String,

    /// Display title for the ingested document.
    pub title: String,
}
