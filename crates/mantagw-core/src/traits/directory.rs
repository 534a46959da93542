//! Remote directory-store trait.
//!
//! A directory store is the outbound side of the gateway: a hierarchical
//! namespace of directories and objects addressed by absolute paths such
//! as `/stor/photos/cat.jpg`.

use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A byte stream type used for reading object contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Content type the store reports for a directory fetched as an object.
pub const DIRECTORY_CONTENT_TYPE: &str = "application/x-json-stream; type=directory";

/// Kind of a directory listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A sub-directory.
    Directory,
    /// A stored object (file).
    Object,
}

/// One entry returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Entry name relative to the listed directory.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Last modification time.
    #[serde(rename = "mtime")]
    pub modified_time: DateTime<Utc>,
    /// Size in bytes (objects only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Entity tag (objects only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl DirectoryEntry {
    /// Whether this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

/// An object fetched from the store, with its body still unread.
pub struct RemoteObject {
    /// MIME content type.
    pub content_type: String,
    /// Body length in bytes.
    pub content_length: u64,
    /// Last modification time, when reported.
    pub last_modified: Option<DateTime<Utc>>,
    /// Entity tag, when reported.
    pub etag: Option<String>,
    /// Base64 MD5 of the body, when reported.
    pub content_md5: Option<String>,
    /// Object body.
    pub body: ByteStream,
}

impl fmt::Debug for RemoteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteObject")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .field("last_modified", &self.last_modified)
            .field("etag", &self.etag)
            .field("content_md5", &self.content_md5)
            .finish_non_exhaustive()
    }
}

/// Parameters for writing an object.
#[derive(Debug, Clone)]
pub struct PutObjectRequest {
    /// Absolute object path.
    pub path: String,
    /// Declared body length in bytes.
    pub content_length: u64,
    /// MIME content type; the store picks a default when absent.
    pub content_type: Option<String>,
    /// Object body.
    pub body: Bytes,
}

/// Trait for directory-oriented storage backends.
///
/// Implementations exist for a remote Manta service over HTTP and for the
/// local filesystem. Paths are absolute and already joined by the caller.
#[async_trait]
pub trait DirectoryStore: Send + Sync + fmt::Debug + 'static {
    /// Return the store type name (e.g., "manta", "local").
    fn provider_type(&self) -> &str;

    /// Create a directory. Creating an existing directory succeeds.
    async fn put_directory(&self, path: &str) -> AppResult<()>;

    /// List the entries of a directory.
    async fn list_directory(&self, path: &str) -> AppResult<Vec<DirectoryEntry>>;

    /// Delete an empty directory.
    async fn delete_directory(&self, path: &str) -> AppResult<()>;

    /// Fetch an object (or a directory rendered as an object).
    async fn get_object(&self, path: &str) -> AppResult<RemoteObject>;

    /// Write an object, replacing any existing one.
    async fn put_object(&self, request: PutObjectRequest) -> AppResult<()>;

    /// Delete an object.
    async fn delete_object(&self, path: &str) -> AppResult<()>;
}
