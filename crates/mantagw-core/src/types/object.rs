//! Object-level types and listing pages.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-supplied object metadata (header name → value).
///
/// Lookups are case-sensitive: `content-type` and `Content-Type` are
/// different keys.
pub type ObjectMetadata = HashMap<String, String>;

/// Metadata describing one object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Bucket the object was resolved against.
    pub bucket: String,
    /// Object name.
    pub name: String,
    /// Last modification time.
    pub mod_time: Option<DateTime<Utc>>,
    /// Size in bytes.
    pub size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Entity tag, when the store provides one.
    pub etag: String,
    /// MIME content type.
    pub content_type: String,
    /// Content encoding.
    pub content_encoding: String,
    /// Additional user-defined metadata.
    pub user_defined: ObjectMetadata,
}

/// One page of a V1 object listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListObjectsInfo {
    /// Whether more results are available.
    pub is_truncated: bool,
    /// Marker to resume a truncated listing.
    pub next_marker: String,
    /// Objects on this page.
    pub objects: Vec<ObjectInfo>,
    /// Pseudo-directory prefixes, each ending in `/`.
    pub prefixes: Vec<String>,
}

/// One page of a V2 object listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListObjectsV2Info {
    /// Whether more results are available.
    pub is_truncated: bool,
    /// Token the caller supplied.
    pub continuation_token: String,
    /// Token to resume a truncated listing.
    pub next_continuation_token: String,
    /// Objects on this page.
    pub objects: Vec<ObjectInfo>,
    /// Pseudo-directory prefixes, each ending in `/`.
    pub prefixes: Vec<String>,
}
