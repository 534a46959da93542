//! Local filesystem directory store.
//!
//! Mirrors the Manta namespace on disk so the gateway can run without a
//! remote service. Object bodies live under `<root>/tree`, and each
//! object's content type and etag are kept in a JSON sidecar under
//! `<root>/meta` so they never show up in listings. Sidecars are named by
//! a digest of the object path, so the sidecar namespace is flat and
//! cannot collide with the shape of the object tree.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use mantagw_core::error::{AppError, ErrorKind};
use mantagw_core::path::ROOT_STORE;
use mantagw_core::result::AppResult;
use mantagw_core::traits::directory::{
    DIRECTORY_CONTENT_TYPE, DirectoryEntry, DirectoryStore, EntryType, PutObjectRequest,
    RemoteObject,
};

/// Per-object attributes stored beside the namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectSidecar {
    content_type: String,
    etag: String,
}

/// Directory store rooted in a local directory.
#[derive(Debug, Clone)]
pub struct LocalDirectoryStore {
    /// Namespace root; `/stor/a` lives at `<tree>/stor/a`.
    tree: PathBuf,
    /// Sidecar root, one file per object.
    meta: PathBuf,
}

impl LocalDirectoryStore {
    /// Create a store rooted at `root_path`, creating the root store
    /// directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        let store = Self {
            tree: root.join("tree"),
            meta: root.join("meta"),
        };

        for dir in [
            store.tree.join(ROOT_STORE.trim_start_matches('/')),
            store.meta.clone(),
        ] {
            fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create storage root: {}", dir.display()),
                    e,
                )
            })?;
        }

        tracing::info!(root = %root.display(), "Initialized local directory store");
        Ok(store)
    }

    /// Relative form of an absolute store path, rejecting traversal.
    fn relative(path: &str) -> AppResult<PathBuf> {
        let rel = PathBuf::from(path.trim_start_matches('/'));
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::validation(format!("Invalid path: {path}")));
        }
        if rel.as_os_str().is_empty() {
            return Err(AppError::validation("Path is empty"));
        }
        Ok(rel)
    }

    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        Ok(self.tree.join(Self::relative(path)?))
    }

    fn sidecar_path(&self, path: &str) -> AppResult<PathBuf> {
        let rel = Self::relative(path)?;
        let key: Vec<_> = rel.components().map(|c| c.as_os_str().to_string_lossy()).collect();
        let digest = Sha256::digest(key.join("/").as_bytes());
        Ok(self
            .meta
            .join(format!("{}.json", URL_SAFE_NO_PAD.encode(digest))))
    }

    async fn read_sidecar(&self, path: &str) -> Option<ObjectSidecar> {
        let file = self.sidecar_path(path).ok()?;
        let raw = fs::read(&file).await.ok()?;
        serde_json::from_slice(&raw).ok()
    }

    async fn write_sidecar(&self, path: &str, sidecar: &ObjectSidecar) -> AppResult<()> {
        let file = self.sidecar_path(path)?;
        let raw = serde_json::to_vec(sidecar)?;
        fs::write(&file, raw)
            .await
            .map_err(|e| io_error(e, "write metadata", path))
    }

    async fn remove_sidecar(&self, path: &str) {
        let Ok(file) = self.sidecar_path(path) else {
            return;
        };
        if let Err(e) = fs::remove_file(&file).await
            && e.kind() != std::io::ErrorKind::NotFound
        {
            debug!(path, error = %e, "Failed to remove object metadata");
        }
    }

    /// Require the parent of `full` to be an existing directory.
    async fn ensure_parent_dir(full: &Path, path: &str) -> AppResult<()> {
        let parent = full
            .parent()
            .ok_or_else(|| AppError::validation(format!("Invalid path: {path}")))?;
        match fs::metadata(parent).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(AppError::validation(format!(
                "Parent of {path} is not a directory"
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::not_found(
                format!("Parent directory of {path} does not exist"),
            )),
            Err(e) => Err(io_error(e, "stat parent of", path)),
        }
    }

    async fn read_entries(&self, full: &Path, path: &str) -> AppResult<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(full)
            .await
            .map_err(|e| io_error(e, "list directory", path))?;

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| io_error(e, "read directory entry in", path))?
        {
            let entry_meta = entry
                .metadata()
                .await
                .map_err(|e| io_error(e, "stat entry in", path))?;
            let name = entry.file_name().to_string_lossy().to_string();
            let modified_time = modified(&entry_meta);

            if entry_meta.is_dir() {
                entries.push(DirectoryEntry {
                    name,
                    entry_type: EntryType::Directory,
                    modified_time,
                    size: None,
                    etag: None,
                });
            } else {
                let child = format!("{}/{}", path.trim_end_matches('/'), name);
                let etag = self.read_sidecar(&child).await.map(|s| s.etag);
                entries.push(DirectoryEntry {
                    name,
                    entry_type: EntryType::Object,
                    modified_time,
                    size: Some(entry_meta.len()),
                    etag,
                });
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[async_trait]
impl DirectoryStore for LocalDirectoryStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put_directory(&self, path: &str) -> AppResult<()> {
        let full = self.resolve(path)?;
        match fs::metadata(&full).await {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(AppError::conflict(format!(
                    "An object already exists at {path}"
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(io_error(e, "stat", path)),
        }

        Self::ensure_parent_dir(&full, path).await?;
        fs::create_dir(&full)
            .await
            .map_err(|e| io_error(e, "create directory", path))?;

        debug!(path, "Created directory");
        Ok(())
    }

    async fn list_directory(&self, path: &str) -> AppResult<Vec<DirectoryEntry>> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full)
            .await
            .map_err(|e| io_error(e, "stat", path))?;
        if !meta.is_dir() {
            return Err(AppError::validation(format!("{path} is not a directory")));
        }
        self.read_entries(&full, path).await
    }

    async fn delete_directory(&self, path: &str) -> AppResult<()> {
        if path.trim_end_matches('/') == ROOT_STORE {
            return Err(AppError::authorization(format!("{ROOT_STORE} cannot be deleted")));
        }

        let full = self.resolve(path)?;
        let meta = fs::metadata(&full)
            .await
            .map_err(|e| io_error(e, "stat", path))?;
        if !meta.is_dir() {
            return Err(AppError::validation(format!("{path} is not a directory")));
        }

        let mut dir = fs::read_dir(&full)
            .await
            .map_err(|e| io_error(e, "list directory", path))?;
        if dir
            .next_entry()
            .await
            .map_err(|e| io_error(e, "read directory entry in", path))?
            .is_some()
        {
            return Err(AppError::conflict(format!("Directory {path} is not empty")));
        }

        fs::remove_dir(&full)
            .await
            .map_err(|e| io_error(e, "delete directory", path))?;

        debug!(path, "Deleted directory");
        Ok(())
    }

    async fn get_object(&self, path: &str) -> AppResult<RemoteObject> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full)
            .await
            .map_err(|e| io_error(e, "stat", path))?;
        let last_modified = Some(modified(&meta));

        if meta.is_dir() {
            let entries = self.read_entries(&full, path).await?;
            let mut listing = Vec::new();
            for entry in &entries {
                serde_json::to_writer(&mut listing, entry)?;
                listing.push(b'\n');
            }
            let body = Bytes::from(listing);

            return Ok(RemoteObject {
                content_type: DIRECTORY_CONTENT_TYPE.to_string(),
                content_length: body.len() as u64,
                last_modified,
                etag: None,
                content_md5: None,
                body: Box::pin(futures::stream::once(async move {
                    Ok::<_, std::io::Error>(body)
                })),
            });
        }

        let file = fs::File::open(&full)
            .await
            .map_err(|e| io_error(e, "open", path))?;
        let sidecar = self.read_sidecar(path).await;
        let content_type = sidecar
            .as_ref()
            .map(|s| s.content_type.clone())
            .unwrap_or_else(|| guess_content_type(path));

        Ok(RemoteObject {
            content_type,
            content_length: meta.len(),
            last_modified,
            etag: sidecar.map(|s| s.etag),
            content_md5: None,
            body: Box::pin(ReaderStream::new(file)),
        })
    }

    async fn put_object(&self, request: PutObjectRequest) -> AppResult<()> {
        let path = request.path.as_str();
        let full = self.resolve(path)?;

        if request.body.len() as u64 != request.content_length {
            return Err(AppError::validation(format!(
                "Content length mismatch for {path}: declared {}, received {}",
                request.content_length,
                request.body.len()
            )));
        }

        Self::ensure_parent_dir(&full, path).await?;
        if fs::metadata(&full).await.is_ok_and(|m| m.is_dir()) {
            return Err(AppError::conflict(format!("A directory exists at {path}")));
        }

        let sidecar = ObjectSidecar {
            content_type: request
                .content_type
                .clone()
                .unwrap_or_else(|| guess_content_type(path)),
            etag: uuid::Uuid::new_v4().to_string(),
        };
        self.write_sidecar(path, &sidecar).await?;

        if let Err(e) = fs::write(&full, &request.body).await {
            self.remove_sidecar(path).await;
            return Err(io_error(e, "write", path));
        }

        debug!(path, bytes = request.content_length, "Wrote object");
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full)
            .await
            .map_err(|e| io_error(e, "stat", path))?;
        if meta.is_dir() {
            return Err(AppError::validation(format!("{path} is a directory")));
        }

        fs::remove_file(&full)
            .await
            .map_err(|e| io_error(e, "delete", path))?;

        self.remove_sidecar(path).await;

        debug!(path, "Deleted object");
        Ok(())
    }
}

fn io_error(e: std::io::Error, action: &str, path: &str) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("{path} was not found"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action} {path}"), e)
    }
}

fn modified(meta: &std::fs::Metadata) -> DateTime<Utc> {
    meta.modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

fn guess_content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    async fn store() -> (tempfile::TempDir, LocalDirectoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDirectoryStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        (dir, store)
    }

    fn put(path: &str, body: &'static str, content_type: Option<&str>) -> PutObjectRequest {
        PutObjectRequest {
            path: path.to_string(),
            content_length: body.len() as u64,
            content_type: content_type.map(str::to_string),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    async fn read_body(object: RemoteObject) -> Vec<u8> {
        let mut body = object.body;
        let mut out = Vec::new();
        while let Some(chunk) = body.next().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        out
    }

    #[tokio::test]
    async fn test_root_store_exists() {
        let (_dir, store) = store().await;
        assert!(store.list_directory("/stor").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_directory_is_idempotent() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/photos").await.unwrap();
        store.put_directory("/stor/photos").await.unwrap();

        let entries = store.list_directory("/stor").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "photos");
        assert!(entries[0].is_directory());
    }

    #[tokio::test]
    async fn test_put_directory_requires_parent() {
        let (_dir, store) = store().await;
        let err = store.put_directory("/stor/a/b").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let (_dir, store) = store().await;
        let err = store.list_directory("/stor/nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_object_roundtrip_with_sidecar() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/docs").await.unwrap();
        store
            .put_object(put("/stor/docs/a.txt", "hello", Some("text/x-custom")))
            .await
            .unwrap();

        let object = store.get_object("/stor/docs/a.txt").await.unwrap();
        assert_eq!(object.content_type, "text/x-custom");
        assert_eq!(object.content_length, 5);
        assert!(object.etag.is_some());
        assert_eq!(read_body(object).await, b"hello");

        let entries = store.list_directory("/stor/docs").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, Some(5));
        assert_eq!(entries[0].entry_type, EntryType::Object);
    }

    #[tokio::test]
    async fn test_put_object_guesses_content_type() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store
            .put_object(put("/stor/b/page.html", "<p/>", None))
            .await
            .unwrap();
        let object = store.get_object("/stor/b/page.html").await.unwrap();
        assert_eq!(object.content_type, "text/html");
    }

    #[tokio::test]
    async fn test_put_object_checks_length_and_parent() {
        let (_dir, store) = store().await;
        let err = store
            .put_object(put("/stor/missing/a", "x", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        store.put_directory("/stor/b").await.unwrap();
        let mut request = put("/stor/b/a", "abc", None);
        request.content_length = 10;
        let err = store.put_object(request).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_directory_as_object_lists_entries() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store.put_object(put("/stor/b/x", "1", None)).await.unwrap();

        let object = store.get_object("/stor/b").await.unwrap();
        assert_eq!(object.content_type, DIRECTORY_CONTENT_TYPE);
        let body = String::from_utf8(read_body(object).await).unwrap();
        let entry: DirectoryEntry = serde_json::from_str(body.trim()).unwrap();
        assert_eq!(entry.name, "x");
    }

    #[tokio::test]
    async fn test_delete_non_empty_directory_conflicts() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store.put_object(put("/stor/b/x", "1", None)).await.unwrap();

        let err = store.delete_directory("/stor/b").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        store.delete_object("/stor/b/x").await.unwrap();
        store.delete_directory("/stor/b").await.unwrap();
        assert!(store.list_directory("/stor/b").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_object() {
        let (_dir, store) = store().await;
        let err = store.delete_object("/stor/ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_sidecars_do_not_collide_with_json_named_directories() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store
            .put_object(put("/stor/b/x", "one", Some("text/x-one")))
            .await
            .unwrap();
        store.put_directory("/stor/b/x.json").await.unwrap();
        store
            .put_object(put("/stor/b/x.json/y", "two", Some("text/x-two")))
            .await
            .unwrap();

        let object = store.get_object("/stor/b/x").await.unwrap();
        assert_eq!(object.content_type, "text/x-one");
        let object = store.get_object("/stor/b/x.json/y").await.unwrap();
        assert_eq!(object.content_type, "text/x-two");

        // Reverse order: directory first, then a sibling whose sidecar
        // would have shared its name.
        store.put_directory("/stor/b/z.json").await.unwrap();
        store
            .put_object(put("/stor/b/z", "three", Some("text/x-three")))
            .await
            .unwrap();
        let object = store.get_object("/stor/b/z").await.unwrap();
        assert_eq!(object.content_type, "text/x-three");
    }

    #[tokio::test]
    async fn test_failed_put_leaves_no_object_behind() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store.put_directory("/stor/b/taken").await.unwrap();

        let err = store
            .put_object(put("/stor/b/taken", "x", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let names: Vec<String> = store
            .list_directory("/stor/b")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["taken"]);
        assert!(store.read_sidecar("/stor/b/taken").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_object_removes_sidecar() {
        let (_dir, store) = store().await;
        store.put_directory("/stor/b").await.unwrap();
        store.put_object(put("/stor/b/x", "1", None)).await.unwrap();
        assert!(store.read_sidecar("/stor/b/x").await.is_some());

        store.delete_object("/stor/b/x").await.unwrap();
        assert!(store.read_sidecar("/stor/b/x").await.is_none());
    }

    #[tokio::test]
    async fn test_rejects_traversal_and_root_delete() {
        let (_dir, store) = store().await;
        let err = store.put_directory("/stor/../escape").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = store.delete_directory("/stor").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
