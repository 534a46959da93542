//! Multipart upload types.
//!
//! The gateway never produces meaningful values for these; they exist so
//! the multipart capability surface has concrete result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-progress multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartInfo {
    /// Object name.
    pub object: String,
    /// Upload identifier.
    pub upload_id: String,
    /// When the upload was initiated.
    pub initiated: Option<DateTime<Utc>>,
}

/// A page of in-progress multipart uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMultipartsInfo {
    pub key_marker: String,
    pub upload_id_marker: String,
    pub next_key_marker: String,
    pub next_upload_id_marker: String,
    pub max_uploads: usize,
    pub is_truncated: bool,
    pub uploads: Vec<MultipartInfo>,
    pub prefix: String,
    pub delimiter: String,
    pub common_prefixes: Vec<String>,
}

/// One uploaded part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartInfo {
    /// Part number (1-based).
    pub part_number: usize,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Entity tag of the part.
    pub etag: String,
    /// Size in bytes.
    pub size: u64,
}

/// A page of uploaded parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPartsInfo {
    pub bucket: String,
    pub object: String,
    pub upload_id: String,
    pub storage_class: String,
    pub part_number_marker: usize,
    pub next_part_number_marker: usize,
    pub max_parts: usize,
    pub is_truncated: bool,
    pub parts: Vec<PartInfo>,
}

/// A part reference supplied when completing an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletePart {
    /// Part number (1-based).
    pub part_number: usize,
    /// Entity tag returned when the part was uploaded.
    pub etag: String,
}
