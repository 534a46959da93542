//! Bucket-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a bucket (a directory directly under the store root).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name.
    pub name: String,
    /// Creation time as reported by the remote store.
    pub created: Option<DateTime<Utc>>,
}

/// Backend capacity report.
///
/// Directory stores expose no capacity figures, so every field stays zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfo {
    /// Total capacity in bytes.
    pub total: u64,
    /// Free capacity in bytes.
    pub free: u64,
}
